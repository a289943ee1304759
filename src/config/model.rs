use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Which parts of the exported surface are inspected [checks].
///
/// All switches are independent and default to `false` (everything checked).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ChecksConfig {
    /// Named types backed by an interface are never treated as private.
    #[serde(default)]
    pub skip_interfaces: bool,

    /// Type declarations are not scanned.
    #[serde(default)]
    pub skip_types: bool,

    /// Function and method parameter lists are not scanned.
    #[serde(default)]
    pub skip_func_args: bool,

    /// Function and method result lists are not scanned.
    #[serde(default)]
    pub skip_func_returns: bool,
}

/// Manifest discovery settings [scanner].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Glob patterns for manifest files to ignore when walking directories.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Missing means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}
