use proto2c_schema::{FieldDescriptor, FieldKind, FieldLabel};

use crate::error::GenError;
use crate::registry::TypeRegistry;
use crate::strings::snake_case;
use crate::types::{Field, Repetition};

/// Bind one descriptor field to a type already present in the registry.
///
/// Message and enum references resolve by canonical name, which requires the
/// referenced type to have been registered first; a miss is an
/// `UnresolvedType` failure, never a default. Scalar kinds resolve against
/// the pre-seeded fundamentals. The registry is only read.
pub fn resolve(descriptor: &FieldDescriptor, registry: &TypeRegistry) -> Result<Field, GenError> {
    let type_id = match descriptor.kind {
        FieldKind::Message | FieldKind::Enum => {
            let referenced = descriptor.type_name.as_deref().unwrap_or("");
            registry
                .find(&snake_case(referenced))
                .ok_or_else(|| GenError::UnresolvedType {
                    type_name: referenced.to_owned(),
                    field:     descriptor.name.clone(),
                })?
        }
        kind => registry
            .find_scalar(kind)
            .ok_or_else(|| GenError::UnsupportedFieldKind {
                field: descriptor.name.clone(),
                kind:  kind.to_string(),
            })?,
    };

    Ok(Field {
        name: snake_case(&descriptor.name),
        type_id,
        repetition: repetition_of(descriptor.label),
    })
}

fn repetition_of(label: FieldLabel) -> Repetition {
    match label {
        FieldLabel::Required => Repetition::Singular,
        FieldLabel::Optional => Repetition::Optional,
        FieldLabel::Repeated => Repetition::Repeated,
    }
}
