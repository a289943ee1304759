//! Configuration semantic validation.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::Config;
use crate::{Result, UnexportedGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if any `scanner.exclude` pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    build_exclude_set(&config.scanner.exclude).map(|_| ())
}

/// Compiles exclude patterns into a single matcher.
///
/// # Errors
/// Returns `InvalidPattern` for the first pattern that fails to compile.
pub fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| UnexportedGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| UnexportedGuardError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}
