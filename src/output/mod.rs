mod error_output;
mod json;
mod path;
mod sarif;
mod text;

pub use error_output::{ErrorOutput, print_error, print_warning};
pub use json::JsonFormatter;
pub use path::normalize_separators;
pub use sarif::SarifFormatter;
pub use text::TextFormatter;

use crate::checker::ModuleReport;
use crate::error::Result;

/// Trait for formatting check reports into various output formats.
pub trait OutputFormatter {
    /// Format the per-module reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[ModuleReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Sarif,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Total number of diagnostics across all reports.
#[must_use]
pub fn count_diagnostics(reports: &[ModuleReport]) -> usize {
    reports.iter().map(|r| r.diagnostics.len()).sum()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
