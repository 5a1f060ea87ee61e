use std::collections::{BTreeMap, HashSet};

use proto2c_schema::{EnumDescriptor, FieldDescriptor, MessageDescriptor};

use crate::error::GenError;
use crate::field;
use crate::registry::{TypeId, TypeRegistry};
use crate::strings::{caps_case, snake_case};
use crate::types::{EnumValue, Field, Repetition, Type};

/// Build an `Enum` from its descriptor. Values are deduplicated by number
/// (first declaration wins) and ordered by ascending number, so output is
/// stable across schema edits that only reorder values.
pub fn build_enum(descriptor: &EnumDescriptor) -> Result<Type, GenError> {
    let mut by_number: BTreeMap<i32, String> = BTreeMap::new();
    for value in &descriptor.values {
        let name = caps_case(&format!("{}_{}", descriptor.full_name, value.name));
        by_number.entry(value.number).or_insert(name);
    }

    let values: Vec<EnumValue> = by_number
        .into_iter()
        .map(|(number, name)| EnumValue { name, number })
        .collect();

    let mut seen = HashSet::new();
    for value in &values {
        if !seen.insert(value.name.as_str()) {
            return Err(GenError::NameCollision(value.name.clone()));
        }
    }

    Ok(Type::Enum { name: snake_case(&descriptor.full_name), values })
}

/// Build a `Union` from one oneof group of a message. Members are the
/// message fields carrying that oneof's index, ordered by ascending field
/// number.
pub fn build_union(
    message: &MessageDescriptor,
    oneof_index: usize,
    registry: &TypeRegistry,
) -> Result<Type, GenError> {
    let oneof = &message.oneofs[oneof_index];
    let mut members: Vec<&FieldDescriptor> = message
        .fields
        .iter()
        .filter(|field| field.oneof_index == Some(oneof_index))
        .collect();
    members.sort_by_key(|field| field.number);

    // A memberless oneof would render an empty discriminant enum and an
    // empty C union, neither of which is legal.
    if members.is_empty() {
        return Err(GenError::EmptyOneof(oneof.full_name.clone()));
    }

    let fields = resolve_all(&members, registry)?;
    Ok(Type::Union { name: snake_case(&oneof.full_name), fields })
}

/// Build the `Struct` for a message: plain fields in ascending field-number
/// order, followed by one singular union-typed field per oneof. `unions`
/// pairs positionally with `message.oneofs` and must already be registered.
pub fn build_struct(
    message: &MessageDescriptor,
    unions: &[TypeId],
    registry: &TypeRegistry,
) -> Result<Type, GenError> {
    // A field pointing past `message.oneofs` would otherwise be silently
    // dropped: no union pass claims it and the plain-field filter skips it.
    for field in &message.fields {
        if let Some(index) = field.oneof_index {
            if index >= message.oneofs.len() {
                return Err(GenError::InvalidOneofIndex {
                    field: field.name.clone(),
                    index,
                });
            }
        }
    }

    let mut plain: Vec<&FieldDescriptor> = message
        .fields
        .iter()
        .filter(|field| field.oneof_index.is_none())
        .collect();
    plain.sort_by_key(|field| field.number);

    let mut fields = resolve_all(&plain, registry)?;
    for (oneof, &type_id) in message.oneofs.iter().zip(unions) {
        fields.push(Field {
            name: snake_case(&oneof.name),
            type_id,
            repetition: Repetition::Singular,
        });
    }

    check_distinct_names(&fields)?;
    Ok(Type::Struct { name: snake_case(&message.full_name), fields })
}

fn resolve_all(
    descriptors: &[&FieldDescriptor],
    registry: &TypeRegistry,
) -> Result<Vec<Field>, GenError> {
    let mut fields = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        fields.push(field::resolve(descriptor, registry)?);
    }
    check_distinct_names(&fields)?;
    Ok(fields)
}

fn check_distinct_names(fields: &[Field]) -> Result<(), GenError> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(GenError::NameCollision(field.name.clone()));
        }
    }
    Ok(())
}
