//! Utility functions for CLI operations.
//!
//! This module provides the small amount of shared plumbing the commands
//! need: the global option set and logger construction from it.

use abspath::{init_logger, Logger};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

impl GlobalOptions {
    /// Build a logger honoring the global verbosity flags.
    pub fn logger(&self) -> Logger {
        init_logger(self.verbose, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abspath::LogLevel;

    #[test]
    fn test_logger_respects_flags() {
        let verbose = GlobalOptions {
            verbose: true,
            quiet: false,
        };
        assert_eq!(verbose.logger().level(), LogLevel::Verbose);

        let quiet = GlobalOptions {
            verbose: false,
            quiet: true,
        };
        assert_eq!(quiet.logger().level(), LogLevel::Quiet);
    }
}
