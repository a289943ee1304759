use std::path::Path;

use globset::GlobSet;

use crate::config::build_exclude_set;
use crate::error::Result;

const MANIFEST_EXTENSION: &str = "json";

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts `*.json` files that match none of the exclude globs.
pub struct ManifestFilter {
    exclude_patterns: GlobSet,
}

impl ManifestFilter {
    /// Create a new filter from glob exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            exclude_patterns: build_exclude_set(exclude_patterns)?,
        })
    }

    fn is_manifest(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MANIFEST_EXTENSION))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ManifestFilter {
    fn should_include(&self, path: &Path) -> bool {
        Self::is_manifest(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
