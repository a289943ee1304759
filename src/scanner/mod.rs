//! Manifest discovery for the `check` command.

mod filter;

pub use filter::{FileFilter, ManifestFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, UnexportedGuardError};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    // Exclude globs are matched against the path relative to the walk root.
    fn accepts(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.filter.should_include(relative)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                UnexportedGuardError::FileRead {
                    path,
                    source: e.into(),
                }
            })?;
            if entry.file_type().is_file() && self.accepts(root, entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Expands command-line inputs into the list of manifests to check.
///
/// Files named explicitly are kept as given. Directories are walked for
/// manifests accepted by the scanner. Order follows the inputs, then path
/// order within each directory; duplicates keep their first position.
///
/// # Errors
/// Returns an error if an input does not exist or a directory cannot be read.
pub fn discover_manifests<S: FileScanner>(paths: &[PathBuf], scanner: &S) -> Result<Vec<PathBuf>> {
    let mut manifests: Vec<PathBuf> = Vec::new();
    for path in paths {
        let found = if path.is_file() {
            vec![path.clone()]
        } else if path.is_dir() {
            scanner.scan(path)?
        } else {
            return Err(UnexportedGuardError::Config(format!(
                "Path not found: {}",
                path.display()
            )));
        };
        tracing::debug!(input = %path.display(), count = found.len(), "discovered manifests");
        for manifest in found {
            if !manifests.contains(&manifest) {
                manifests.push(manifest);
            }
        }
    }
    Ok(manifests)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
