use std::collections::HashMap;

use proto2c_schema::{FieldKind, FieldLabel, FileDescriptor, MessageDescriptor};

use crate::error::GenError;

/// Reject message graphs that embed themselves by value.
///
/// A message-typed field places the referenced struct directly inside its
/// owner, so a direct or mutual cycle would produce a type of unbounded
/// size. Repeated fields break the cycle: their members live behind the
/// growable vector wrapper. Runs before any emission so a bad file produces
/// no artifact at all.
pub fn verify_no_recursion(file: &FileDescriptor) -> Result<(), GenError> {
    let messages: HashMap<&str, &MessageDescriptor> = file
        .messages
        .iter()
        .map(|message| (message.full_name.as_str(), message))
        .collect();

    // 1 = on the current path, 2 = fully explored.
    let mut state: HashMap<String, u8> = HashMap::new();
    for message in &file.messages {
        check_recursion(&message.full_name, &messages, &mut state)?;
    }
    Ok(())
}

fn check_recursion(
    name: &str,
    messages: &HashMap<&str, &MessageDescriptor>,
    state: &mut HashMap<String, u8>,
) -> Result<(), GenError> {
    let message = match messages.get(name) {
        Some(message) => message,
        // Unknown references are reported as UnresolvedType during field
        // resolution, not here.
        None => return Ok(()),
    };
    match state.get(name) {
        Some(1) => return Err(GenError::RecursiveMessage(name.to_owned())),
        Some(2) => return Ok(()),
        _ => {}
    }

    state.insert(name.to_owned(), 1);
    for field in &message.fields {
        if field.kind == FieldKind::Message && field.label != FieldLabel::Repeated {
            if let Some(ref type_name) = field.type_name {
                check_recursion(type_name, messages, state)?;
            }
        }
    }
    state.insert(name.to_owned(), 2);
    Ok(())
}
