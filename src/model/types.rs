use serde::{Deserialize, Serialize};

/// Index of a descriptor inside a [`TypeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub usize);

/// A struct field as seen from outside the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub public: bool,
    #[serde(rename = "type")]
    pub ty: TypeId,
}

/// An interface method. `signature` points at a `Signature` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub public: bool,
    pub signature: TypeId,
}

/// Resolved type structure supplied by the language front end.
///
/// The graph is arena-allocated: every edge is a [`TypeId`] into the owning
/// [`TypeTable`], so self-referential and mutually-referential types are
/// representable without shared ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// A declared type with a name. Builtins have no enclosing module.
    Named {
        name: String,
        public: bool,
        #[serde(default)]
        builtin: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        underlying: Option<TypeId>,
    },
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },
    /// Parameter and result lists.
    Tuple {
        #[serde(default)]
        elements: Vec<TypeId>,
    },
    Signature {
        #[serde(default)]
        params: Vec<TypeId>,
        #[serde(default)]
        results: Vec<TypeId>,
    },
    Interface {
        #[serde(default)]
        methods: Vec<Method>,
    },
    Map {
        key: TypeId,
        value: TypeId,
    },
    /// Pointer, slice, array or channel.
    #[serde(alias = "pointer", alias = "slice", alias = "array", alias = "chan")]
    Indirection { elem: TypeId },
    /// Primitives, unresolved references and anything the front end could not classify.
    #[serde(other)]
    Opaque,
}

static OPAQUE: TypeDescriptor = TypeDescriptor::Opaque;

/// Read-only arena of descriptors for one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable {
    descriptors: Vec<TypeDescriptor>,
}

impl TypeTable {
    #[must_use]
    pub const fn new(descriptors: Vec<TypeDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Looks up a descriptor. Ids outside the arena resolve to `Opaque`.
    #[must_use]
    pub fn get(&self, id: TypeId) -> &TypeDescriptor {
        self.descriptors.get(id.0).unwrap_or_else(|| {
            tracing::warn!(type_id = id.0, "dangling type reference treated as opaque");
            &OPAQUE
        })
    }

    #[must_use]
    pub fn contains(&self, id: TypeId) -> bool {
        id.0 < self.descriptors.len()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// True if `id` is a named type whose underlying representation is an interface.
    #[must_use]
    pub fn is_interface_named(&self, id: TypeId) -> bool {
        match self.get(id) {
            TypeDescriptor::Named {
                underlying: Some(underlying),
                ..
            } => matches!(self.get(*underlying), TypeDescriptor::Interface { .. }),
            _ => false,
        }
    }

    /// Peels pointer-like wrappers until a non-indirection descriptor is reached.
    ///
    /// Stops after as many steps as there are descriptors, so a cycle made only
    /// of indirections cannot loop forever.
    #[must_use]
    pub fn peel_indirections(&self, mut id: TypeId) -> TypeId {
        for _ in 0..=self.descriptors.len() {
            match self.get(id) {
                TypeDescriptor::Indirection { elem } => id = *elem,
                _ => break,
            }
        }
        id
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
