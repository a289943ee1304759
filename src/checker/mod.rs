mod classify;
mod diagnostic;
mod report;
mod scanner;
#[cfg(test)]
mod test_fixtures;

pub use classify::Classifier;
pub use diagnostic::{Diagnostic, SlotKind};
pub use report::ModuleReport;
pub use scanner::{DeclarationScanner, scan};

use crate::config::ChecksConfig;
use crate::model::Module;

pub trait Checker {
    /// Check every exported declaration of a module.
    ///
    /// Diagnostics come back in declaration order; the same module and checks
    /// always produce the same sequence.
    fn check(&self, module: &Module) -> Vec<Diagnostic>;
}

/// Reports private types that leak into a module's exported surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeakChecker {
    checks: ChecksConfig,
}

impl LeakChecker {
    #[must_use]
    pub const fn new(checks: ChecksConfig) -> Self {
        Self { checks }
    }
}

impl Checker for LeakChecker {
    fn check(&self, module: &Module) -> Vec<Diagnostic> {
        scan(&module.types, &module.declarations, self.checks)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
