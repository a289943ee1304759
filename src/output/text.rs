use std::fmt::Write;

use crate::checker::{Diagnostic, ModuleReport};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi, count_diagnostics};

/// Compiler-style text output: one `file:line:col: message` line per diagnostic.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic, output: &mut String) {
        let location = self.colorize(&diagnostic.location.to_string(), ansi::CYAN);
        let leaked = self.colorize(&diagnostic.leaked_type, ansi::RED);
        let _ = writeln!(
            output,
            "{location}: private type {leaked} is used in the exported {}",
            diagnostic.subject
        );
    }

    fn format_module_header(&self, report: &ModuleReport, output: &mut String) {
        let status = if report.is_clean() {
            self.colorize("ok", ansi::GREEN)
        } else {
            self.colorize("leaks", ansi::RED)
        };
        let _ = writeln!(
            output,
            "{status}: {} ({} declarations, {} diagnostics)",
            report.display_name(),
            report.declarations,
            report.diagnostics.len()
        );
    }

    fn format_summary(&self, reports: &[ModuleReport]) -> String {
        let leaking = reports.iter().filter(|r| !r.is_clean()).count();
        let clean = reports.len() - leaking;
        let total = count_diagnostics(reports);

        let clean_str = self.colorize(&clean.to_string(), ansi::GREEN);
        let leaking_str = self.colorize(&leaking.to_string(), ansi::RED);
        let total_str = if total == 0 {
            self.colorize(&total.to_string(), ansi::GREEN)
        } else {
            self.colorize(&total.to_string(), ansi::YELLOW)
        };

        format!(
            "Summary: {} modules checked, {clean_str} clean, {leaking_str} leaking, {total_str} diagnostics",
            reports.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[ModuleReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            if self.verbose >= 1 {
                self.format_module_header(report, &mut output);
            }
            for diagnostic in &report.diagnostics {
                self.format_diagnostic(diagnostic, &mut output);
            }
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&self.format_summary(reports));
        output.push('\n');

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
