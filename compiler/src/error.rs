use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Descriptor decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown type \"{type_name}\" referenced by field \"{field}\"")]
    UnresolvedType { type_name: String, field: String },

    #[error("The name \"{0}\" is generated twice")]
    NameCollision(String),

    #[error("Field \"{field}\" has unsupported kind \"{kind}\"")]
    UnsupportedFieldKind { field: String, kind: String },

    #[error("Oneof \"{0}\" has no member fields")]
    EmptyOneof(String),

    #[error("Field \"{field}\" references nonexistent oneof {index}")]
    InvalidOneofIndex { field: String, index: usize },

    #[error("Recursive nesting of \"{0}\" is not allowed")]
    RecursiveMessage(String),
}
