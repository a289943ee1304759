use serde::Serialize;

use crate::checker::{Diagnostic, ModuleReport};
use crate::error::Result;

use super::{OutputFormatter, count_diagnostics, normalize_separators};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    modules: Vec<ModuleResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    modules: usize,
    clean: usize,
    leaking: usize,
    diagnostics: usize,
}

#[derive(Serialize)]
struct ModuleResult<'a> {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    module: Option<&'a str>,
    declarations: usize,
    diagnostics: &'a [Diagnostic],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[ModuleReport]) -> Result<String> {
        let leaking = reports.iter().filter(|r| !r.is_clean()).count();

        let output = JsonOutput {
            summary: Summary {
                modules: reports.len(),
                clean: reports.len() - leaking,
                leaking,
                diagnostics: count_diagnostics(reports),
            },
            modules: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &ModuleReport) -> ModuleResult<'_> {
    ModuleResult {
        source: normalize_separators(&report.source.to_string_lossy()),
        module: report.module.as_deref(),
        declarations: report.declarations,
        diagnostics: &report.diagnostics,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
