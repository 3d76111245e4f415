//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, ComponentsCommand, NormalizeCommand, ParentCommand, ResolveCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for normalizing and resolving absolute paths.
#[derive(Parser)]
#[command(name = "abspath")]
#[command(version, about = "Normalize and resolve absolute paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize a path to canonical form
    Normalize(NormalizeCommand),

    /// Check how a raw string classifies
    Validate(ValidateCommand),

    /// Resolve a relative fragment against a base path
    Resolve(ResolveCommand),

    /// Walk up the directory hierarchy
    Parent(ParentCommand),

    /// Print the last path component
    Basename(BasenameCommand),

    /// Print the component decomposition
    Components(ComponentsCommand),
}
