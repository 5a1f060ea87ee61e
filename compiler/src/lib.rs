//! proto2c-compiler
//!
//! This crate implements:
//!  1) Identifier normalization (`make_identifier` / `snake_case` / `caps_case`),
//!  2) The generated-type model (fundamentals, enums, structs, oneof unions),
//!  3) A per-file type registry with handle-based lookup,
//!  4) Field resolution and struct/union assembly,
//!  5) Two-pass header emission (`generate_file` → `String`),
//!  6) Error types (`GenError`), and the descriptor-set loader.

pub mod assemble;
pub mod error;
pub mod field;
pub mod generator;
pub mod loader;
pub mod printer;
pub mod registry;
pub mod strings;
pub mod types;
pub mod verifier;

pub use generator::generate_file;
pub use generator::output_file_name;
pub use loader::load_descriptor_set;
