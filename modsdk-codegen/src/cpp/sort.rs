//! Dependency ordering of classes.
//!
//! Classes are emitted in post-order of a depth-first walk over their base
//! classes, so every base is declared before any class deriving from it.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use modsdk_schema::{ClassDefinition, Root};
use std::collections::HashSet;

/// Traversal state for one generation run.
#[derive(Debug, Default)]
pub struct SortContext<'a> {
    looked: HashSet<&'a str>,
    ordered: Vec<&'a ClassDefinition>,
}

impl<'a> SortContext<'a> {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the class has already been visited.
    #[must_use]
    pub fn is_visited(&self, name: &str) -> bool {
        self.looked.contains(name)
    }

    /// Classes in emission order.
    #[must_use]
    pub fn ordered(&self) -> &[&'a ClassDefinition] {
        &self.ordered
    }

    /// Consumes the context, returning classes in emission order.
    #[must_use]
    pub fn into_ordered(self) -> Vec<&'a ClassDefinition> {
        self.ordered
    }
}

/// Appends `class` to the context after every class it depends on.
///
/// Each class is visited at most once per context. Classes in the external
/// namespace are neither visited nor emitted.
///
/// # Errors
/// Returns `CodegenError::ExpectedClassDefinition` if `class` is not part of
/// `root`, or `CodegenError::MissingClassDefinition` if a base is undeclared.
pub fn sort_class<'a>(
    root: &'a Root,
    class: &'a ClassDefinition,
    ctx: &mut SortContext<'a>,
    config: &GeneratorConfig,
) -> Result<(), CodegenError> {
    if config.is_external(class.name.as_str()) {
        return Ok(());
    }
    // Marked before recursing so shared and cyclic bases terminate
    if !ctx.looked.insert(class.name.as_str()) {
        return Ok(());
    }

    for base in &class.superclasses {
        if config.is_external(base) {
            continue;
        }
        if !root.has_class(class.name.as_str()) {
            return Err(CodegenError::expected_class(class.name.as_str()));
        }
        let base_class = root
            .get_class(base)
            .ok_or_else(|| CodegenError::missing_class(base.as_str()))?;
        sort_class(root, base_class, ctx, config)?;
    }

    tracing::trace!(class = %class.name, position = ctx.ordered.len(), "ordered class");
    ctx.ordered.push(class);
    Ok(())
}

/// Orders every class in the schema, bases first.
///
/// # Errors
/// Returns `CodegenError::MissingClassDefinition` if any base is undeclared.
pub fn sort_root<'a>(
    root: &'a Root,
    config: &GeneratorConfig,
) -> Result<Vec<&'a ClassDefinition>, CodegenError> {
    let mut ctx = SortContext::new();
    for class in root.classes.values() {
        sort_class(root, class, &mut ctx, config)?;
    }
    Ok(ctx.into_ordered())
}
