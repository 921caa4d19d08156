//! Class declaration code generation.

use super::{functions, helpers, members, templates};
use modsdk_schema::{ClassDefinition, Function, Platform};

/// Generator for forward declarations and class bodies.
pub struct ClassGenerator<'a> {
    ordered: &'a [&'a ClassDefinition],
    platform: Platform,
}

/// Rendered class bodies plus the functions whose bodies go after them.
#[derive(Debug, Default)]
pub struct ClassBodies<'a> {
    /// Concatenated class bodies.
    pub text: String,
    /// Defined functions in the order they were found.
    pub out_of_line: Vec<&'a Function>,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a generator over classes already in dependency order.
    #[must_use]
    pub fn new(ordered: &'a [&'a ClassDefinition], platform: Platform) -> Self {
        Self { ordered, platform }
    }

    /// Generates `struct X;` for every class.
    #[must_use]
    pub fn generate_predeclarations(&self) -> String {
        self.ordered
            .iter()
            .map(|class| templates::class_predeclare(class.name.as_str()))
            .collect()
    }

    /// Generates every class body.
    #[must_use]
    pub fn generate_bodies(&self) -> ClassBodies<'a> {
        let mut bodies = ClassBodies::default();
        for &class in self.ordered {
            let body = self.generate_class(class, &mut bodies.out_of_line);
            bodies.text.push_str(&body);
        }
        bodies
    }

    /// Generates one class body, collecting its defined functions.
    fn generate_class(
        &self,
        class: &'a ClassDefinition,
        out_of_line: &mut Vec<&'a Function>,
    ) -> String {
        let mut output = templates::class_start(
            class.name.as_str(),
            &helpers::format_bases(&class.superclasses),
        );

        for inline in &class.inlines {
            output.push_str(&templates::inline_definition(&inline.inlined));
        }

        for function in &class.functions {
            if function.is_defined {
                out_of_line.push(function);
            }
            if let Some(line) = functions::function_declaration(function, self.platform) {
                output.push_str(&line);
            }
        }

        for member in &class.members {
            if let Some(line) = members::member_definition(member, self.platform) {
                output.push_str(&line);
            }
        }

        output.push_str(templates::CLASS_END);
        tracing::debug!(class = %class.name, "generated class body");
        output
    }
}
