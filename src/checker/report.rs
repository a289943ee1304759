use std::path::PathBuf;

use super::diagnostic::Diagnostic;

/// Outcome of checking one module manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReport {
    /// Manifest file the module was read from.
    pub source: PathBuf,
    pub module: Option<String>,
    /// Number of declarations in the manifest, exported or not.
    pub declarations: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ModuleReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Module identifier if the manifest declares one, else the manifest path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.module.clone().unwrap_or_else(|| {
            crate::output::normalize_separators(&self.source.to_string_lossy())
        })
    }
}
