//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use modsdk::prelude::*;
//! ```

// Schema types
pub use modsdk_schema::{
    ClassDefinition, ClassName, Function, FunctionType, Inline, Member, MemberType, ParseError,
    Platform, Root, SchemaError, parse_schema, parse_schema_file, validate_schema,
};

// Generation
pub use modsdk_codegen::{CodegenError, GeneratorConfig, HeaderGenerator, write_header};
