use rayon::prelude::*;

use crate::config::ChecksConfig;
use crate::model::{Declaration, FunctionDecl, Slot, TypeDecl, TypeDescriptor, TypeTable};

use super::classify::Classifier;
use super::diagnostic::{Diagnostic, SlotKind};

/// Scans declarations for private types in their exported signatures.
///
/// Declarations are independent, so they are checked in parallel; the
/// ordered collect keeps the output in declaration order, parameters before
/// results within each function.
#[must_use]
pub fn scan(types: &TypeTable, declarations: &[Declaration], checks: ChecksConfig) -> Vec<Diagnostic> {
    let scanner = DeclarationScanner::new(types, checks);
    declarations
        .par_iter()
        .map(|decl| scanner.scan_declaration(decl))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Applies the skip policy for one module and runs the classifier per slot.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationScanner<'a> {
    types: &'a TypeTable,
    checks: ChecksConfig,
    classifier: Classifier<'a>,
}

impl<'a> DeclarationScanner<'a> {
    #[must_use]
    pub const fn new(types: &'a TypeTable, checks: ChecksConfig) -> Self {
        Self {
            types,
            checks,
            classifier: Classifier::new(types, checks),
        }
    }

    #[must_use]
    pub fn scan_declaration(&self, decl: &Declaration) -> Vec<Diagnostic> {
        if !decl.is_public() {
            tracing::debug!(declaration = decl.name(), "skipping private declaration");
            return Vec::new();
        }

        match decl {
            Declaration::Function(f) => self.scan_function(decl, f),
            Declaration::Method(m) => {
                if self.has_private_receiver(m) {
                    tracing::debug!(method = decl.name(), "skipping method of private receiver");
                    return Vec::new();
                }
                self.scan_function(decl, m)
            }
            Declaration::Type(t) => self.scan_type(decl, t),
        }
    }

    fn scan_function(&self, decl: &Declaration, f: &FunctionDecl) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if !self.checks.skip_func_args {
            self.scan_slots(decl, &f.params, SlotKind::Param, &mut diagnostics);
        }
        if !self.checks.skip_func_returns {
            self.scan_slots(decl, &f.results, SlotKind::Result, &mut diagnostics);
        }
        diagnostics
    }

    fn scan_slots(
        &self,
        decl: &Declaration,
        slots: &[Slot],
        kind: SlotKind,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for slot in slots {
            if let Some(leaked) = self.classifier.find_leak(slot.ty) {
                diagnostics.push(Diagnostic::new(
                    slot.location.clone(),
                    leaked,
                    decl.subject(),
                    kind,
                ));
            }
        }
    }

    fn scan_type(&self, decl: &Declaration, t: &TypeDecl) -> Vec<Diagnostic> {
        if self.checks.skip_types {
            return Vec::new();
        }
        if self.checks.skip_interfaces
            && matches!(self.types.get(t.underlying), TypeDescriptor::Interface { .. })
        {
            return Vec::new();
        }

        self.classifier
            .find_leak(t.underlying)
            .map(|leaked| {
                Diagnostic::new(
                    t.location.clone(),
                    leaked,
                    decl.subject(),
                    SlotKind::TypeDeclaration,
                )
            })
            .into_iter()
            .collect()
    }

    /// A method whose receiver type is private cannot be called from outside,
    /// regardless of which checks are enabled.
    fn has_private_receiver(&self, m: &FunctionDecl) -> bool {
        let Some(receiver) = m.receiver else {
            return false;
        };
        matches!(
            self.types.get(self.types.peel_indirections(receiver)),
            TypeDescriptor::Named {
                public: false,
                builtin: false,
                ..
            }
        )
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
