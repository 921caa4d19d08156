//! Schema validation utilities.
//!
//! This module checks the per-class consistency rules a loaded schema must
//! satisfy before headers are generated from it. Base-class resolution is
//! left to the generator, which reports missing bases while ordering classes.

use crate::classes::{ClassDefinition, Function, MemberType};
use crate::error::SchemaError;
use crate::types::Root;

/// Validates a loaded schema for correctness.
///
/// # Arguments
/// * `root` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(root: &Root) -> Result<(), SchemaError> {
    for class in root.classes.values() {
        validate_class(class)?;
    }
    Ok(())
}

/// Validates a single class definition.
fn validate_class(class: &ClassDefinition) -> Result<(), SchemaError> {
    for function in &class.functions {
        validate_function(class, function)?;
    }

    for member in &class.members {
        // Hardcode names carry a 2-character prefix that is stripped on output
        if member.member_type == MemberType::Hardcode && member.name.chars().count() <= 2 {
            return Err(SchemaError::Validation {
                message: format!(
                    "hardcode member '{}' in class '{}' is too short to carry its prefix",
                    member.name, class.name
                ),
            });
        }
    }

    Ok(())
}

/// Validates a function within a class.
fn validate_function(class: &ClassDefinition, function: &Function) -> Result<(), SchemaError> {
    if function.parent_class != class.name {
        return Err(SchemaError::ParentMismatch {
            function: function.name.clone(),
            owner: class.name.to_string(),
            parent: function.parent_class.to_string(),
        });
    }

    if !function.argnames.is_empty() && function.argnames.len() != function.args.len() {
        return Err(SchemaError::ArgumentMismatch {
            class: class.name.to_string(),
            function: function.name.clone(),
            args: function.args.len(),
            argnames: function.argnames.len(),
        });
    }

    if function.is_defined != function.definition.is_some() {
        return Err(SchemaError::InconsistentDefinition {
            class: class.name.to_string(),
            function: function.name.clone(),
        });
    }

    Ok(())
}
