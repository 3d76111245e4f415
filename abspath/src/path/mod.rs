//! Absolute path handling with pure string normalization.
//!
//! This module provides the [`AbsolutePath`] value type and the
//! normalization and validation algorithms behind it. Everything operates
//! on strings; nothing consults the filesystem.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization reduces a path string to a canonical form by:
//! - Dropping empty components (repeated or trailing separators)
//! - Dropping `.` components
//! - Folding each resolvable `..` into the component before it
//!
//! For absolute paths, a `..` with nothing left to cancel is silently
//! dropped: the root directory absorbs upward navigation. For relative
//! paths, leading `..` components are kept verbatim, because they can only
//! be resolved once a base is known.
//!
//! ## Validation
//!
//! Validation classifies a raw string before it becomes a path value.
//! Strings intended as absolute paths must start with `/`; strings
//! starting with `~` are rejected outright (home directory aliases are
//! never expanded here); everything else fails as not-absolute. The
//! trusting constructors skip classification and assert their
//! precondition instead.
//!
//! # Examples
//!
//! ```
//! use abspath::AbsolutePath;
//!
//! let path = AbsolutePath::new("/path/to/a/b/../c");
//! assert_eq!(path.as_str(), "/path/to/a/c");
//!
//! let base = AbsolutePath::new("/MyProject");
//! assert_eq!(AbsolutePath::resolve("Sources", &base).as_str(), "/MyProject/Sources");
//! ```

pub mod normalize;
mod standard;
mod types;
pub mod validate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export the value type; the normalizers stay addressable through their
// submodules for callers that work on raw strings.
pub use types::AbsolutePath;
