//! Shared builders for classifier and scanner tests.

use crate::model::{
    Declaration, Field, FunctionDecl, Location, Method, Slot, TypeDecl, TypeDescriptor, TypeId,
    TypeTable,
};

#[derive(Default)]
pub struct TypesBuilder {
    descriptors: Vec<TypeDescriptor>,
}

impl TypesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: TypeDescriptor) -> TypeId {
        self.descriptors.push(descriptor);
        TypeId(self.descriptors.len() - 1)
    }

    /// Replaces a descriptor, for building cycles.
    pub fn set(&mut self, id: TypeId, descriptor: TypeDescriptor) {
        self.descriptors[id.0] = descriptor;
    }

    pub fn named(&mut self, name: &str, public: bool) -> TypeId {
        self.push(TypeDescriptor::Named {
            name: name.to_string(),
            public,
            builtin: false,
            underlying: None,
        })
    }

    pub fn named_as(&mut self, name: &str, public: bool, underlying: TypeId) -> TypeId {
        self.push(TypeDescriptor::Named {
            name: name.to_string(),
            public,
            builtin: false,
            underlying: Some(underlying),
        })
    }

    pub fn builtin(&mut self, name: &str) -> TypeId {
        self.push(TypeDescriptor::Named {
            name: name.to_string(),
            public: false,
            builtin: true,
            underlying: None,
        })
    }

    pub fn opaque(&mut self) -> TypeId {
        self.push(TypeDescriptor::Opaque)
    }

    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.push(TypeDescriptor::Indirection { elem })
    }

    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.push(TypeDescriptor::Map { key, value })
    }

    pub fn tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.push(TypeDescriptor::Tuple { elements })
    }

    pub fn structure(&mut self, fields: Vec<Field>) -> TypeId {
        self.push(TypeDescriptor::Struct { fields })
    }

    pub fn signature(&mut self, params: Vec<TypeId>, results: Vec<TypeId>) -> TypeId {
        self.push(TypeDescriptor::Signature { params, results })
    }

    pub fn interface(&mut self, methods: Vec<Method>) -> TypeId {
        self.push(TypeDescriptor::Interface { methods })
    }

    pub fn build(self) -> TypeTable {
        TypeTable::new(self.descriptors)
    }
}

pub fn field(name: &str, public: bool, ty: TypeId) -> Field {
    Field {
        name: name.to_string(),
        public,
        ty,
    }
}

pub fn method(name: &str, public: bool, signature: TypeId) -> Method {
    Method {
        name: name.to_string(),
        public,
        signature,
    }
}

pub fn slot(name: &str, ty: TypeId, line: u32, column: u32) -> Slot {
    Slot {
        name: Some(name.to_string()),
        ty,
        location: Location::new("a.go", line, column),
    }
}

fn function_decl(name: &str, receiver: Option<TypeId>, params: Vec<Slot>, results: Vec<Slot>) -> FunctionDecl {
    FunctionDecl {
        name: name.to_string(),
        public: name.starts_with(char::is_uppercase),
        location: Location::new("a.go", 1, 1),
        receiver,
        params,
        results,
    }
}

/// Free function; visibility follows the case of the first letter.
pub fn function(name: &str, params: Vec<Slot>, results: Vec<Slot>) -> Declaration {
    Declaration::Function(function_decl(name, None, params, results))
}

pub fn method_decl(
    name: &str,
    receiver: Option<TypeId>,
    params: Vec<Slot>,
    results: Vec<Slot>,
) -> Declaration {
    Declaration::Method(function_decl(name, receiver, params, results))
}

pub fn type_decl(name: &str, underlying: TypeId, line: u32) -> Declaration {
    Declaration::Type(TypeDecl {
        name: name.to_string(),
        public: name.starts_with(char::is_uppercase),
        location: Location::new("a.go", line, 6),
        underlying,
    })
}
