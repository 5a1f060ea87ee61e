//! Descriptor graph consumed by the proto2c compiler.
//!
//! The compiler never parses `.proto` text itself; an external parser hands
//! it an already-validated descriptor set, serialized as JSON. The types in
//! this crate mirror that hand-off format: plain data, read-only as far as
//! the compiler is concerned.
//!
//! ```
//! use proto2c_schema::*;
//!
//! let file = FileDescriptor {
//!     name: "demo.proto".to_owned(),
//!     package: None,
//!     messages: vec![MessageDescriptor {
//!         name: "Point".to_owned(),
//!         full_name: "Point".to_owned(),
//!         fields: vec![
//!             FieldDescriptor::scalar("x", 1, FieldLabel::Required, FieldKind::Float),
//!             FieldDescriptor::scalar("y", 2, FieldLabel::Required, FieldKind::Float),
//!         ],
//!         enums: vec![],
//!         oneofs: vec![],
//!     }],
//!     enums: vec![],
//! };
//! assert_eq!(file.messages[0].fields.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// One parser invocation's worth of schema files. Files are independent of
/// each other: each one is compiled with its own type registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSet {
    pub files: Vec<FileDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Schema file name as given to the parser, e.g. `pkg/shape.proto`.
    pub name:     String,
    pub package:  Option<String>,
    pub messages: Vec<MessageDescriptor>,
    pub enums:    Vec<EnumDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    pub name:      String,
    /// Full dotted name, e.g. `pkg.Shape`.
    pub full_name: String,
    /// All fields of the message, oneof members included.
    pub fields:    Vec<FieldDescriptor>,
    pub enums:     Vec<EnumDescriptor>,
    pub oneofs:    Vec<OneofDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name:        String,
    pub number:      i32,
    pub label:       FieldLabel,
    pub kind:        FieldKind,
    /// Full dotted name of the referenced message/enum, for composite kinds.
    pub type_name:   Option<String>,
    /// Index into the owning message's `oneofs` when this field is a oneof
    /// member.
    pub oneof_index: Option<usize>,
}

impl FieldDescriptor {
    /// Convenience constructor for a plain scalar field.
    pub fn scalar(name: &str, number: i32, label: FieldLabel, kind: FieldKind) -> Self {
        FieldDescriptor {
            name: name.to_owned(),
            number,
            label,
            kind,
            type_name: None,
            oneof_index: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub name:      String,
    pub full_name: String,
    pub values:    Vec<EnumValueDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueDescriptor {
    pub name:   String,
    pub number: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneofDescriptor {
    pub name:      String,
    pub full_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLabel {
    Required,
    Optional,
    Repeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
    String,
    Bytes,
    Message,
    Enum,
}

impl FieldKind {
    /// Stable lowercase form used in diagnostics and the JSON hand-off.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int32 => "int32",
            FieldKind::Int64 => "int64",
            FieldKind::Uint32 => "uint32",
            FieldKind::Uint64 => "uint64",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Message => "message",
            FieldKind::Enum => "enum",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
