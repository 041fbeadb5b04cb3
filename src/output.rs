//! Terminal output formatting
//!
//! Colored status messages for the CLI. Synthesized graphs go to stdout;
//! everything here writes to stderr so piped output stays machine-readable.

use colored::Colorize;

/// Formatter for human-facing CLI messages.
pub struct OutputFormatter {
    /// Use colored output
    use_color: bool,
    /// Verbosity level
    verbosity: u8,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(use_color: bool, verbosity: u8) -> Self {
        // Respect NO_COLOR environment variable
        let use_color = use_color && std::env::var("NO_COLOR").is_err();
        Self {
            use_color,
            verbosity,
        }
    }

    /// Informational message. Always shown; use [`Self::debug`] for chatter
    /// that should stay behind a verbosity flag.
    pub fn info(&self, message: &str) {
        eprintln!("{}", message);
    }

    /// Warning message.
    pub fn warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        } else {
            eprintln!("warning: {}", message);
        }
    }

    /// Error message.
    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "error:".red().bold(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    /// Debug message, shown at -vv and above.
    pub fn debug(&self, message: &str) {
        if self.verbosity >= 2 {
            if self.use_color {
                eprintln!("{} {}", "debug:".dimmed(), message.dimmed());
            } else {
                eprintln!("debug: {}", message);
            }
        }
    }
}
