use std::collections::HashMap;

use proto2c_schema::FieldKind;

use crate::error::GenError;
use crate::types::Type;

/// Registry name of the length-prefixed runtime string type.
pub const STRING_TYPE: &str = "proto2c_string";

const FUNDAMENTALS: [&str; 8] = [
    "bool",
    "float",
    "double",
    "int32_t",
    "int64_t",
    "uint32_t",
    "uint64_t",
    STRING_TYPE,
];

/// Opaque handle to a type owned by a `TypeRegistry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(usize);

/// Name-keyed symbol table of every type generated so far. The registry owns
/// the types; everything else refers to them through `TypeId` handles. One
/// registry lives per compiled schema file.
#[derive(Debug)]
pub struct TypeRegistry {
    types:   Vec<Type>,
    by_name: HashMap<String, TypeId>,
}

impl TypeRegistry {
    /// A fresh registry pre-seeded with the fundamental scalar/string types,
    /// so primitive field lookups never miss.
    pub fn new() -> Self {
        let mut registry = TypeRegistry {
            types:   Vec::new(),
            by_name: HashMap::new(),
        };
        for name in FUNDAMENTALS {
            registry.insert(Type::Fundamental { name: name.to_owned() });
        }
        registry
    }

    fn insert(&mut self, entry: Type) -> TypeId {
        let id = TypeId(self.types.len());
        self.by_name.insert(entry.name().to_owned(), id);
        self.types.push(entry);
        id
    }

    /// Register a newly assembled type under its canonical name. A name that
    /// is already taken indicates a normalization collision, never a valid
    /// path.
    pub fn register(&mut self, entry: Type) -> Result<TypeId, GenError> {
        if self.by_name.contains_key(entry.name()) {
            return Err(GenError::NameCollision(entry.name().to_owned()));
        }
        Ok(self.insert(entry))
    }

    /// Exact-name lookup. A miss means "unknown type" and the caller must
    /// fail, not substitute a default.
    pub fn find(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Lookup keyed by descriptor primitive kind. Composite kinds and
    /// `bytes` have no fundamental mapping.
    pub fn find_scalar(&self, kind: FieldKind) -> Option<TypeId> {
        let name = match kind {
            FieldKind::Bool => "bool",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::Int32 => "int32_t",
            FieldKind::Int64 => "int64_t",
            FieldKind::Uint32 => "uint32_t",
            FieldKind::Uint64 => "uint64_t",
            FieldKind::String => STRING_TYPE,
            FieldKind::Bytes | FieldKind::Message | FieldKind::Enum => return None,
        };
        self.find(name)
    }

    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.0]
    }

    pub fn type_name(&self, id: TypeId) -> &str {
        self.get(id).name()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
