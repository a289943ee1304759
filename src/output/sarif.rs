use serde::Serialize;

use crate::checker::{Diagnostic, ModuleReport, SlotKind};
use crate::error::Result;

use super::{OutputFormatter, normalize_separators};

/// SARIF 2.1.0 output formatter for GitHub Code Scanning and other CI/CD tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SarifFormatter;

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_NAME: &str = "unexported-guard";
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

const RULE_PRIVATE_TYPE_LEAK: &str = "unexported-guard/private-type-leak";

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
struct ReportingDescriptor {
    id: &'static str,
    name: &'static str,
    #[serde(rename = "shortDescription")]
    short_description: MultiformatMessageString,
    #[serde(rename = "fullDescription")]
    full_description: MultiformatMessageString,
    #[serde(rename = "defaultConfiguration")]
    default_configuration: ReportingConfiguration,
}

#[derive(Serialize)]
struct ReportingConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
struct MultiformatMessageString {
    text: &'static str,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: &'static str,
    #[serde(rename = "ruleIndex")]
    rule_index: usize,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
    properties: ResultProperties,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
struct Location {
    #[serde(rename = "physicalLocation")]
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
struct PhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
struct ArtifactLocation {
    uri: String,
    #[serde(rename = "uriBaseId")]
    uri_base_id: &'static str,
}

#[derive(Serialize)]
struct Region {
    #[serde(rename = "startLine")]
    start_line: u32,
    #[serde(rename = "startColumn")]
    start_column: u32,
}

#[derive(Serialize)]
struct ResultProperties {
    #[serde(rename = "leakedType")]
    leaked_type: String,
    declaration: String,
    slot: SlotKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    module: Option<String>,
}

impl SarifFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_rules() -> Vec<ReportingDescriptor> {
        vec![ReportingDescriptor {
            id: RULE_PRIVATE_TYPE_LEAK,
            name: "PrivateTypeLeak",
            short_description: MultiformatMessageString {
                text: "Private type used in exported declaration",
            },
            full_description: MultiformatMessageString {
                text: "An exported function, method or type declaration references a private type, \
                       so callers outside the module cannot name or construct it.",
            },
            default_configuration: ReportingConfiguration { level: "error" },
        }]
    }

    fn convert_diagnostic(diagnostic: &Diagnostic, module: Option<&str>) -> SarifResult {
        SarifResult {
            rule_id: RULE_PRIVATE_TYPE_LEAK,
            rule_index: 0,
            level: "error",
            message: Message {
                text: diagnostic.message.clone(),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: normalize_separators(&diagnostic.location.file),
                        uri_base_id: "%SRCROOT%",
                    },
                    region: Region {
                        start_line: diagnostic.location.line,
                        start_column: diagnostic.location.column,
                    },
                },
            }],
            properties: ResultProperties {
                leaked_type: diagnostic.leaked_type.clone(),
                declaration: diagnostic.subject.to_string(),
                slot: diagnostic.slot,
                module: module.map(String::from),
            },
        }
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, reports: &[ModuleReport]) -> Result<String> {
        let results = reports
            .iter()
            .flat_map(|report| {
                report
                    .diagnostics
                    .iter()
                    .map(|d| Self::convert_diagnostic(d, report.module.as_deref()))
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: TOOL_NAME,
                        version: TOOL_VERSION,
                        rules: Self::build_rules(),
                    },
                },
                results,
            }],
        };

        Ok(serde_json::to_string_pretty(&log)?)
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
