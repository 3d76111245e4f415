//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Normalize a path to canonical form
//! - `validate`: Check how a raw string classifies
//! - `resolve`: Resolve a relative fragment against a base path
//! - `parent`: Walk up the directory hierarchy
//! - `basename`: Print the last path component
//! - `components`: Print the component decomposition

pub mod basename;
pub mod components;
pub mod normalize;
pub mod parent;
pub mod resolve;
pub mod validate;

pub use basename::BasenameCommand;
pub use components::ComponentsCommand;
pub use normalize::NormalizeCommand;
pub use parent::ParentCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
