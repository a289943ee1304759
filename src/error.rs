use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnexportedGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid module manifest: {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl UnexportedGuardError {
    /// Short category label used as the heading of rendered errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::ManifestParse { .. } => "Manifest",
            Self::TomlParse(_) => "Syntax",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("Failed to read file: {}", path.display()),
            Self::InvalidPattern { pattern, .. } => format!("Invalid glob pattern: '{pattern}'"),
            Self::ManifestParse { path, .. } => {
                format!("Invalid module manifest: {}", path.display())
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(_) => "Failed to parse configuration file".to_string(),
            Self::JsonSerialize(e) => format!("Failed to serialize output: {e}"),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::ManifestParse { source, .. } => Some(format!(
                "{source} (line {}, column {})",
                source.line(),
                source.column()
            )),
            Self::TomlParse(e) => Some(e.message().to_string()),
            Self::Config(_) | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Actionable hint shown under the error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Run `unexported-guard config validate` to check the configuration")
            }
            Self::InvalidPattern { .. } => Some("Check the glob syntax in `scanner.exclude`"),
            Self::ManifestParse { .. } => {
                Some("Regenerate the manifest with the language front end")
            }
            Self::FileRead { .. } | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UnexportedGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
