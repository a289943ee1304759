//! Read-only model of a module's resolved declarations and types.

mod declaration;
mod manifest;
mod types;

pub use declaration::{Declaration, FunctionDecl, Location, Slot, Subject, TypeDecl};
pub use manifest::Module;
pub use types::{Field, Method, TypeDescriptor, TypeId, TypeTable};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
