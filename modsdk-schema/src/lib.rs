//! # modsdk Schema
//!
//! Class schema model and loader for header generation.
//!
//! This crate provides:
//! - The in-memory model of game classes, functions and members
//! - Per-platform bindings and hardcoded layout values
//! - XML schema loading
//! - Schema validation

pub mod classes;
pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use classes::{ClassDefinition, Function, FunctionType, Inline, Member, MemberType};
pub use error::{ParseError, SchemaError};
pub use parser::{parse_schema, parse_schema_file};
pub use types::{ClassName, Platform, Root};
pub use validation::validate_schema;
