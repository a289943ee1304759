use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, UnexportedGuardError};

use super::declaration::Declaration;
use super::types::TypeTable;

/// Resolved view of one module, as handed over by the language front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    /// Import path or other identifier of the module, for display only.
    pub module: Option<String>,
    pub types: TypeTable,
    pub declarations: Vec<Declaration>,
}

/// Wire shape of a manifest. Declarations stay untyped until each one is
/// converted on its own.
#[derive(Deserialize)]
struct RawModule {
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    types: TypeTable,
    #[serde(default)]
    declarations: Vec<serde_json::Value>,
}

impl Module {
    /// Parses a manifest from JSON text. `path` is only used for error reporting.
    ///
    /// Declarations that do not match any known shape are skipped with a
    /// warning; the rest of the module is still returned.
    ///
    /// # Errors
    /// Returns `ManifestParse` if the text is not JSON or the top-level
    /// `module`/`types`/`declarations` fields are malformed.
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let raw: RawModule =
            serde_json::from_str(content).map_err(|source| UnexportedGuardError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        let declarations = raw
            .declarations
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(decl) => Some(decl),
                Err(e) => {
                    tracing::warn!(
                        manifest = %path.display(),
                        index,
                        error = %e,
                        "skipping malformed declaration"
                    );
                    None
                }
            })
            .collect();

        let module = Self {
            module: raw.module,
            types: raw.types,
            declarations,
        };
        module.log_dangling_references(path);
        Ok(module)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read, or `ManifestParse` if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| UnexportedGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&content, path)
    }

    fn log_dangling_references(&self, path: &Path) {
        let dangling = self
            .declarations
            .iter()
            .filter(|decl| !self.references_resolve(decl))
            .count();
        if dangling > 0 {
            tracing::warn!(
                manifest = %path.display(),
                dangling,
                "declarations reference unknown type ids; those slots are treated as opaque"
            );
        }
    }

    fn references_resolve(&self, decl: &Declaration) -> bool {
        match decl {
            Declaration::Function(f) | Declaration::Method(f) => f
                .params
                .iter()
                .chain(&f.results)
                .map(|slot| slot.ty)
                .chain(f.receiver)
                .all(|id| self.types.contains(id)),
            Declaration::Type(t) => self.types.contains(t.underlying),
        }
    }
}
