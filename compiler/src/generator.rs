use proto2c_schema::{EnumDescriptor, FileDescriptor};

use crate::assemble;
use crate::error::GenError;
use crate::printer::Printer;
use crate::registry::TypeRegistry;
use crate::strings::{caps_case, snake_case};
use crate::verifier::verify_no_recursion;

const SCHEMA_SUFFIX: &str = ".proto";
const HEADER_SUFFIX: &str = ".h";

const RUNTIME_INCLUDES: [&str; 3] = [
    "proto2c/runtime/optional.h",
    "proto2c/runtime/string.h",
    "proto2c/runtime/vector.h",
];

/// Header name derived from the schema file name:
/// `pkg/shape.proto` becomes `pkg/shape.h`.
pub fn output_file_name(schema_name: &str) -> String {
    let stem = schema_name
        .strip_suffix(SCHEMA_SUFFIX)
        .unwrap_or(schema_name);
    format!("{}{}", stem, HEADER_SUFFIX)
}

/// Compile one descriptor file into the full text of its C header.
///
/// Two passes guarantee declare-before-use: the forward pass emits an
/// incomplete struct declaration per message and every enum definition
/// (file-level, then nested, in declaration order); the definition pass then
/// emits each message's oneof unions immediately followed by its struct, in
/// declaration order. Each assembled type is registered before anything that
/// can reference it resolves, so a forward reference between messages
/// surfaces as `UnresolvedType`.
///
/// On error nothing is returned; the caller never sees partial text.
pub fn generate_file(file: &FileDescriptor) -> Result<String, GenError> {
    verify_no_recursion(file)?;

    let mut registry = TypeRegistry::new();
    let mut printer = Printer::new();
    let guard = caps_case(&output_file_name(&file.name));

    printer.println(&format!("#ifndef {}", guard));
    printer.println(&format!("#define {}", guard));
    printer.newline();
    for include in RUNTIME_INCLUDES {
        printer.println(&format!("#include <{}>", include));
    }
    printer.newline();
    printer.println("#ifdef __cplusplus");
    printer.println("extern \"C\" {");
    printer.println("#endif /* __cplusplus */");
    printer.newline();

    // Forward pass.
    for message in &file.messages {
        let name = snake_case(&message.full_name);
        printer.println(&format!("typedef struct {} {};", name, name));
    }
    if !file.messages.is_empty() {
        printer.newline();
    }
    for descriptor in &file.enums {
        emit_enum(descriptor, &mut registry, &mut printer)?;
    }
    for message in &file.messages {
        for descriptor in &message.enums {
            emit_enum(descriptor, &mut registry, &mut printer)?;
        }
    }

    // Definition pass.
    for message in &file.messages {
        let mut unions = Vec::with_capacity(message.oneofs.len());
        for oneof_index in 0..message.oneofs.len() {
            let union_type = assemble::build_union(message, oneof_index, &registry)?;
            let id = registry.register(union_type)?;
            registry.get(id).write_definition(&registry, &mut printer);
            printer.newline();
            unions.push(id);
        }
        let struct_type = assemble::build_struct(message, &unions, &registry)?;
        let id = registry.register(struct_type)?;
        registry.get(id).write_definition(&registry, &mut printer);
        printer.newline();
    }

    printer.println("#ifdef __cplusplus");
    printer.println("}");
    printer.println("#endif /* __cplusplus */");
    printer.newline();
    printer.println(&format!("#endif /* {} */", guard));

    Ok(printer.into_string())
}

fn emit_enum(
    descriptor: &EnumDescriptor,
    registry: &mut TypeRegistry,
    printer: &mut Printer,
) -> Result<(), GenError> {
    let enum_type = assemble::build_enum(descriptor)?;
    let id = registry.register(enum_type)?;
    registry.get(id).write_definition(registry, printer);
    printer.newline();
    Ok(())
}
