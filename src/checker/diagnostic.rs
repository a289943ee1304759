use serde::Serialize;

use crate::model::{Location, Subject};

/// Where in a declaration the private type was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Param,
    Result,
    TypeDeclaration,
}

/// A private type exposed by an exported declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub location: Location,
    pub message: String,
    pub leaked_type: String,
    pub subject: Subject,
    pub slot: SlotKind,
}

impl Diagnostic {
    #[must_use]
    pub fn new(location: Location, leaked_type: &str, subject: Subject, slot: SlotKind) -> Self {
        Self {
            message: format!("private type {leaked_type} is used in the exported {subject}"),
            location,
            leaked_type: leaked_type.to_string(),
            subject,
            slot,
        }
    }
}
