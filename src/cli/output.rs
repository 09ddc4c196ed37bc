//! Terminal output formatting
//!
//! Every user-facing message goes through the formatter, categorized the
//! same way the handlers think about outcomes: success, info, warning, and
//! error. In JSON mode the chatter is suppressed and handlers emit a single
//! structured document instead.

use colored::Colorize;
use serde::Serialize;

/// Formats handler output for the terminal
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter, configuring color handling globally
    #[must_use]
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    /// Whether JSON mode is active
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// A completed action
    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{} {message}", "✓".green());
        }
    }

    /// Neutral information
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Something was skipped or needs attention, but the request went through
    pub fn warning(&self, message: &str) {
        if !self.json {
            println!("{} {message}", "⚠".yellow());
        }
    }

    /// The request failed
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "✗".red());
    }

    /// Emit a structured document (JSON mode)
    pub fn json(&self, value: &impl Serialize) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
