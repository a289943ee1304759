use std::collections::HashSet;

use crate::config::ChecksConfig;
use crate::model::{TypeDescriptor, TypeId, TypeTable};

/// Finds private named types reachable through a type's declared structure.
///
/// The search is depth-first and stops at the first private name found.
/// Fields and interface methods that are themselves private are not part of
/// the external contract and are never descended into.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    types: &'a TypeTable,
    checks: ChecksConfig,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub const fn new(types: &'a TypeTable, checks: ChecksConfig) -> Self {
        Self { types, checks }
    }

    /// Returns the name of the first private named type reachable from `ty`.
    #[must_use]
    pub fn find_leak(&self, ty: TypeId) -> Option<&'a str> {
        let mut visited = HashSet::new();
        self.visit(ty, &mut visited)
    }

    /// Reports whether `ty` exposes a private named type.
    #[must_use]
    pub fn is_leak(&self, ty: TypeId) -> bool {
        self.find_leak(ty).is_some()
    }

    // A node already in `visited` yields no leak: whatever could leak through
    // it was decided when it was first entered.
    fn visit(&self, id: TypeId, visited: &mut HashSet<TypeId>) -> Option<&'a str> {
        if !visited.insert(id) {
            return None;
        }

        let types = self.types;
        match types.get(id) {
            TypeDescriptor::Named {
                name,
                public,
                builtin,
                ..
            } => {
                if *builtin || *public {
                    return None;
                }
                if self.checks.skip_interfaces && types.is_interface_named(id) {
                    return None;
                }
                Some(name.as_str())
            }
            TypeDescriptor::Struct { fields } => fields
                .iter()
                .filter(|field| field.public)
                .find_map(|field| self.visit(field.ty, visited)),
            TypeDescriptor::Tuple { elements } => self.first_leak(elements, visited),
            TypeDescriptor::Signature { params, results } => self
                .first_leak(params, visited)
                .or_else(|| self.first_leak(results, visited)),
            TypeDescriptor::Interface { methods } => methods
                .iter()
                .filter(|method| method.public)
                .find_map(|method| self.visit(method.signature, visited)),
            TypeDescriptor::Map { key, value } => self
                .visit(*key, visited)
                .or_else(|| self.visit(*value, visited)),
            TypeDescriptor::Indirection { elem } => self.visit(*elem, visited),
            TypeDescriptor::Opaque => None,
        }
    }

    fn first_leak(&self, ids: &[TypeId], visited: &mut HashSet<TypeId>) -> Option<&'a str> {
        ids.iter().find_map(|id| self.visit(*id, visited))
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
