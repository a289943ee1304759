use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::TypeId;

/// Source position used to attribute a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One entry of a parameter or result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeId,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub public: bool,
    pub location: Location,
    /// Receiver type for methods. `None` on a method means the front end
    /// could not recover it; no receiver constraint is applied then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<TypeId>,
    #[serde(default)]
    pub params: Vec<Slot>,
    #[serde(default)]
    pub results: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub public: bool,
    pub location: Location,
    pub underlying: TypeId,
}

/// A top-level declaration of the module being checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Function(FunctionDecl),
    Method(FunctionDecl),
    Type(TypeDecl),
}

impl Declaration {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function(f) | Self::Method(f) => &f.name,
            Self::Type(t) => &t.name,
        }
    }

    #[must_use]
    pub const fn is_public(&self) -> bool {
        match self {
            Self::Function(f) | Self::Method(f) => f.public,
            Self::Type(t) => t.public,
        }
    }

    /// Human-readable label used in diagnostic messages.
    #[must_use]
    pub fn subject(&self) -> Subject {
        match self {
            Self::Function(f) => Subject::Function(f.name.clone()),
            Self::Method(f) => Subject::Method(f.name.clone()),
            Self::Type(t) => Subject::TypeDeclaration(t.name.clone()),
        }
    }
}

/// What kind of exported declaration a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Subject {
    Function(String),
    Method(String),
    TypeDeclaration(String),
}

impl Subject {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function(name) | Self::Method(name) | Self::TypeDeclaration(name) => name,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(name) => write!(f, "function {name}"),
            Self::Method(name) => write!(f, "method {name}"),
            Self::TypeDeclaration(name) => write!(f, "type declaration {name}"),
        }
    }
}
