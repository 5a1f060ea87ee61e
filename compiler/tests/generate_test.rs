use proto2c_compiler::error::GenError;
use proto2c_compiler::{generate_file, output_file_name};
use proto2c_schema::{
    EnumDescriptor, EnumValueDescriptor, FieldDescriptor, FieldKind, FieldLabel, FileDescriptor,
    MessageDescriptor, OneofDescriptor,
};

fn message_field(name: &str, number: i32, label: FieldLabel, target: &str) -> FieldDescriptor {
    FieldDescriptor {
        name:        name.to_owned(),
        number,
        label,
        kind:        FieldKind::Message,
        type_name:   Some(target.to_owned()),
        oneof_index: None,
    }
}

/// `pkg/shape.proto`: an enum, a plain struct, and a message exercising
/// sorting, wrappers, an enum reference, a message reference, and a oneof.
fn shape_file() -> FileDescriptor {
    let kind_enum = EnumDescriptor {
        name:      "Kind".to_owned(),
        full_name: "pkg.Kind".to_owned(),
        values:    vec![
            EnumValueDescriptor { name: "ROUND".to_owned(), number: 1 },
            EnumValueDescriptor { name: "FLAT".to_owned(), number: 0 },
        ],
    };

    let point = MessageDescriptor {
        name:      "Point".to_owned(),
        full_name: "pkg.Point".to_owned(),
        fields:    vec![
            FieldDescriptor::scalar("x", 1, FieldLabel::Required, FieldKind::Float),
            FieldDescriptor::scalar("y", 2, FieldLabel::Required, FieldKind::Float),
        ],
        enums:  vec![],
        oneofs: vec![],
    };

    let mut kind_field =
        FieldDescriptor::scalar("kind", 1, FieldLabel::Required, FieldKind::Enum);
    kind_field.type_name = Some("pkg.Kind".to_owned());

    let mut text = FieldDescriptor::scalar("text", 7, FieldLabel::Required, FieldKind::String);
    text.oneof_index = Some(0);
    let mut count = FieldDescriptor::scalar("count", 6, FieldLabel::Required, FieldKind::Int32);
    count.oneof_index = Some(0);

    let shape = MessageDescriptor {
        name:      "Shape".to_owned(),
        full_name: "pkg.Shape".to_owned(),
        fields:    vec![
            FieldDescriptor::scalar("traceID", 2, FieldLabel::Required, FieldKind::Uint64),
            kind_field,
            message_field("origin", 3, FieldLabel::Required, "pkg.Point"),
            FieldDescriptor::scalar("tags", 4, FieldLabel::Repeated, FieldKind::String),
            FieldDescriptor::scalar("retries", 5, FieldLabel::Optional, FieldKind::Int32),
            text,
            count,
        ],
        enums:  vec![],
        oneofs: vec![OneofDescriptor {
            name:      "payload".to_owned(),
            full_name: "payload".to_owned(),
        }],
    };

    FileDescriptor {
        name:     "pkg/shape.proto".to_owned(),
        package:  Some("pkg".to_owned()),
        messages: vec![point, shape],
        enums:    vec![kind_enum],
    }
}

#[test]
fn test_generated_header_is_exact() {
    let expected = "\
#ifndef PKG_SHAPE_H
#define PKG_SHAPE_H

#include <proto2c/runtime/optional.h>
#include <proto2c/runtime/string.h>
#include <proto2c/runtime/vector.h>

#ifdef __cplusplus
extern \"C\" {
#endif /* __cplusplus */

typedef struct pkg_point pkg_point;
typedef struct pkg_shape pkg_shape;

typedef enum pkg_kind {
    PKG_KIND_FLAT = 0,
    PKG_KIND_ROUND = 1
} pkg_kind;

typedef struct pkg_point {
    float x;
    float y;
} pkg_point;

enum {
    PAYLOAD_COUNT_TYPE,
    PAYLOAD_TEXT_TYPE
};

typedef struct payload {
    uint8_t type;
    union {
        int32_t count;
        proto2c_string text;
    } value;
} payload;

typedef struct pkg_shape {
    pkg_kind kind;
    uint64_t trace_id;
    pkg_point origin;
    proto2c_vector(proto2c_string) tags;
    proto2c_optional(int32_t) retries;
    payload payload;
} pkg_shape;

#ifdef __cplusplus
}
#endif /* __cplusplus */

#endif /* PKG_SHAPE_H */
";
    let generated = generate_file(&shape_file()).expect("generate_file failed");
    assert_eq!(generated, expected);
}

#[test]
fn test_generation_is_deterministic() {
    let file = shape_file();
    let first = generate_file(&file).unwrap();
    let second = generate_file(&file).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_reference_is_declared_before_use() {
    let generated = generate_file(&shape_file()).unwrap();
    // Each referencing line must come after the referenced definition.
    let enum_def = generated.find("typedef enum pkg_kind").unwrap();
    let enum_use = generated.find("pkg_kind kind;").unwrap();
    assert!(enum_def < enum_use);
    let point_def = generated.find("typedef struct pkg_point {").unwrap();
    let point_use = generated.find("pkg_point origin;").unwrap();
    assert!(point_def < point_use);
    let union_def = generated.find("typedef struct payload {").unwrap();
    let union_use = generated.find("payload payload;").unwrap();
    assert!(union_def < union_use);
}

#[test]
fn test_unresolved_reference_fails_with_no_artifact() {
    let file = FileDescriptor {
        name:     "broken.proto".to_owned(),
        package:  None,
        messages: vec![MessageDescriptor {
            name:      "Span".to_owned(),
            full_name: "Span".to_owned(),
            fields:    vec![message_field("log", 1, FieldLabel::Required, "Missing")],
            enums:     vec![],
            oneofs:    vec![],
        }],
        enums:    vec![],
    };
    let err = generate_file(&file).unwrap_err();
    assert!(matches!(
        err,
        GenError::UnresolvedType { type_name, field } if type_name == "Missing" && field == "log"
    ));
}

#[test]
fn test_forward_reference_between_messages_fails() {
    // Later is only forward-declared when Earlier resolves its fields, and
    // an incomplete type cannot be embedded by value.
    let file = FileDescriptor {
        name:     "order.proto".to_owned(),
        package:  None,
        messages: vec![
            MessageDescriptor {
                name:      "Earlier".to_owned(),
                full_name: "Earlier".to_owned(),
                fields:    vec![message_field("later", 1, FieldLabel::Required, "Later")],
                enums:     vec![],
                oneofs:    vec![],
            },
            MessageDescriptor {
                name:      "Later".to_owned(),
                full_name: "Later".to_owned(),
                fields:    vec![],
                enums:     vec![],
                oneofs:    vec![],
            },
        ],
        enums:    vec![],
    };
    let err = generate_file(&file).unwrap_err();
    assert!(matches!(err, GenError::UnresolvedType { .. }));
}

#[test]
fn test_recursive_message_fails() {
    let file = FileDescriptor {
        name:     "list.proto".to_owned(),
        package:  None,
        messages: vec![MessageDescriptor {
            name:      "Node".to_owned(),
            full_name: "Node".to_owned(),
            fields:    vec![message_field("next", 1, FieldLabel::Optional, "Node")],
            enums:     vec![],
            oneofs:    vec![],
        }],
        enums:    vec![],
    };
    let err = generate_file(&file).unwrap_err();
    assert!(matches!(err, GenError::RecursiveMessage(name) if name == "Node"));
}

#[test]
fn test_name_collision_fails() {
    // Two top-level entities normalizing to the same canonical name.
    let file = FileDescriptor {
        name:     "collide.proto".to_owned(),
        package:  None,
        messages: vec![
            MessageDescriptor {
                name:      "TraceID".to_owned(),
                full_name: "TraceID".to_owned(),
                fields:    vec![],
                enums:     vec![],
                oneofs:    vec![],
            },
            MessageDescriptor {
                name:      "trace_id".to_owned(),
                full_name: "trace_id".to_owned(),
                fields:    vec![],
                enums:     vec![],
                oneofs:    vec![],
            },
        ],
        enums:    vec![],
    };
    let err = generate_file(&file).unwrap_err();
    assert!(matches!(err, GenError::NameCollision(name) if name == "trace_id"));
}

#[test]
fn test_nested_enum_is_emitted_in_forward_pass() {
    let file = FileDescriptor {
        name:     "nested.proto".to_owned(),
        package:  None,
        messages: vec![MessageDescriptor {
            name:      "Span".to_owned(),
            full_name: "Span".to_owned(),
            fields:    vec![{
                let mut field =
                    FieldDescriptor::scalar("state", 1, FieldLabel::Required, FieldKind::Enum);
                field.type_name = Some("Span.State".to_owned());
                field
            }],
            enums:     vec![EnumDescriptor {
                name:      "State".to_owned(),
                full_name: "Span.State".to_owned(),
                values:    vec![EnumValueDescriptor { name: "OPEN".to_owned(), number: 0 }],
            }],
            oneofs:    vec![],
        }],
        enums:    vec![],
    };
    let generated = generate_file(&file).unwrap();
    let enum_def = generated.find("typedef enum span_state").unwrap();
    let struct_def = generated.find("typedef struct span {").unwrap();
    assert!(enum_def < struct_def);
    assert!(generated.contains("span_state state;"));
}

#[test]
fn test_sibling_files_are_independent() {
    let broken = FileDescriptor {
        name:     "broken.proto".to_owned(),
        package:  None,
        messages: vec![MessageDescriptor {
            name:      "Bad".to_owned(),
            full_name: "Bad".to_owned(),
            fields:    vec![message_field("x", 1, FieldLabel::Required, "Missing")],
            enums:     vec![],
            oneofs:    vec![],
        }],
        enums:    vec![],
    };
    assert!(generate_file(&broken).is_err());
    // A failed sibling leaves no state behind; the good file still compiles.
    assert!(generate_file(&shape_file()).is_ok());
}

#[test]
fn test_output_file_name_derivation() {
    assert_eq!(output_file_name("pkg/shape.proto"), "pkg/shape.h");
    assert_eq!(output_file_name("model.proto"), "model.h");
    assert_eq!(output_file_name("no_suffix"), "no_suffix.h");
}
