use crate::printer::Printer;
use crate::registry::{TypeId, TypeRegistry};
use crate::strings::caps_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    Singular,
    Optional,
    Repeated,
}

/// A descriptor field bound to a registered type. The field never owns its
/// type; `type_id` is a handle into the registry that outlives it.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name:       String,
    pub type_id:    TypeId,
    pub repetition: Repetition,
}

impl Field {
    pub fn write_declaration(&self, registry: &TypeRegistry, printer: &mut Printer) {
        let type_name = registry.type_name(self.type_id);
        match self.repetition {
            Repetition::Singular => {
                printer.println(&format!("{} {};", type_name, self.name));
            }
            Repetition::Optional => {
                printer.println(&format!("proto2c_optional({}) {};", type_name, self.name));
            }
            Repetition::Repeated => {
                printer.println(&format!("proto2c_vector({}) {};", type_name, self.name));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name:   String,
    pub number: i32,
}

/// Every type the generator can produce. The variant set is closed, so this
/// is a plain enum rather than a trait hierarchy.
#[derive(Debug, Clone)]
pub enum Type {
    /// Built-in scalar or string type, pre-declared by the runtime library.
    Fundamental { name: String },
    /// Values are deduplicated by number and held in ascending numeric order.
    Enum { name: String, values: Vec<EnumValue> },
    Struct { name: String, fields: Vec<Field> },
    /// Models a oneof: discriminant byte plus a C union of the members.
    Union { name: String, fields: Vec<Field> },
}

impl Type {
    /// The registry key this type is filed under.
    pub fn name(&self) -> &str {
        match self {
            Type::Fundamental { name }
            | Type::Enum { name, .. }
            | Type::Struct { name, .. }
            | Type::Union { name, .. } => name,
        }
    }

    pub fn write_definition(&self, registry: &TypeRegistry, printer: &mut Printer) {
        match self {
            // Fundamentals come from the runtime headers, nothing to emit.
            Type::Fundamental { .. } => {}
            Type::Enum { name, values } => write_enum(name, values, printer),
            Type::Struct { name, fields } => {
                printer.print(&format!("typedef struct {} ", name));
                write_braced_fields(fields, registry, printer);
                printer.println(&format!(" {};", name));
            }
            Type::Union { name, fields } => write_union(name, fields, registry, printer),
        }
    }
}

fn write_enum(name: &str, values: &[EnumValue], printer: &mut Printer) {
    printer.println(&format!("typedef enum {} {{", name));
    printer.indent();
    for (i, value) in values.iter().enumerate() {
        let comma = if i + 1 < values.len() { "," } else { "" };
        printer.println(&format!("{} = {}{}", value.name, value.number, comma));
    }
    printer.outdent();
    printer.println(&format!("}} {};", name));
}

fn write_union(name: &str, fields: &[Field], registry: &TypeRegistry, printer: &mut Printer) {
    // Discriminant values for every arm. A bare C union cannot be read back
    // without knowing which member is active.
    printer.println("enum {");
    printer.indent();
    for (i, field) in fields.iter().enumerate() {
        let comma = if i + 1 < fields.len() { "," } else { "" };
        let entry = caps_case(&format!("{}_{}_type", name, field.name));
        printer.println(&format!("{}{}", entry, comma));
    }
    printer.outdent();
    printer.println("};");
    printer.newline();
    printer.println(&format!("typedef struct {} {{", name));
    printer.indent();
    printer.println("uint8_t type;");
    printer.print("union ");
    write_braced_fields(fields, registry, printer);
    printer.println(" value;");
    printer.outdent();
    printer.println(&format!("}} {};", name));
}

fn write_braced_fields(fields: &[Field], registry: &TypeRegistry, printer: &mut Printer) {
    printer.println("{");
    printer.indent();
    for field in fields {
        field.write_declaration(registry, printer);
    }
    printer.outdent();
    printer.print("}");
}
