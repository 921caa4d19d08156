//! Function declaration and out-of-line definition rendering.

use super::{helpers, templates};
use modsdk_schema::{Function, FunctionType, Platform};

/// Renders the in-body declaration of a function.
///
/// Returns `None` when the function has no binding on `platform` and no
/// portable body, which means it cannot be offered on that platform.
#[must_use]
pub fn function_declaration(function: &Function, platform: Platform) -> Option<String> {
    if !function.is_bound_on(platform) && !function.is_defined {
        tracing::debug!(
            class = %function.parent_class,
            function = %function.name,
            %platform,
            "skipping unbound function"
        );
        return None;
    }

    let arg_types = helpers::raw_arg_types(&function.args);
    let line = match function.function_type {
        FunctionType::Constructor | FunctionType::Destructor => {
            templates::structor_declaration(&function.name, &arg_types)
        }
        kind => templates::function_declaration(
            kind == FunctionType::Static,
            kind == FunctionType::Virtual,
            helpers::return_type(function),
            &function.name,
            &arg_types,
            function.is_const,
        ),
    };
    Some(line)
}

/// Renders the out-of-line definition of a defined function.
#[must_use]
pub fn ool_definition(function: &Function) -> String {
    templates::ool_function_definition(
        helpers::return_type(function),
        function.parent_class.as_str(),
        &function.name,
        &helpers::raw_params(&function.args, &function.argnames),
        function.is_const,
        function.definition.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(name: &str, kind: FunctionType) -> Function {
        let mut function = Function::new(name, kind);
        function.parent_class = "X".into();
        function.binds.insert(Platform::Windows, "0x100".to_string());
        function
    }

    #[test]
    fn test_virtual_declaration() {
        let mut function = bound("init", FunctionType::Virtual);
        function.return_type = Some("bool".to_string());
        function.add_arg("int", "level");
        function.add_arg("float", "speed");

        assert_eq!(
            function_declaration(&function, Platform::Windows).as_deref(),
            Some("\tvirtual bool init(int, float);\n")
        );
    }

    #[test]
    fn test_static_const_declaration() {
        let mut function = bound("shared", FunctionType::Static);
        function.return_type = Some("X*".to_string());
        assert_eq!(
            function_declaration(&function, Platform::Windows).as_deref(),
            Some("\tstatic X* shared();\n")
        );

        let mut getter = bound("size", FunctionType::Normal);
        getter.return_type = Some("int".to_string());
        getter.is_const = true;
        assert_eq!(
            function_declaration(&getter, Platform::Windows).as_deref(),
            Some("\tint size() const;\n")
        );
    }

    #[test]
    fn test_structor_declaration() {
        let mut ctor = bound("X", FunctionType::Constructor);
        ctor.add_arg("int", "v");
        let dtor = bound("~X", FunctionType::Destructor);

        assert_eq!(
            function_declaration(&ctor, Platform::Windows).as_deref(),
            Some("\tX(int);\n")
        );
        assert_eq!(
            function_declaration(&dtor, Platform::Windows).as_deref(),
            Some("\t~X();\n")
        );
    }

    #[test]
    fn test_unbound_undefined_is_skipped() {
        let function = bound("update", FunctionType::Virtual);
        assert!(function_declaration(&function, Platform::Mac).is_none());
    }

    #[test]
    fn test_unbound_defined_is_declared() {
        let mut function = Function::new("f", FunctionType::Normal);
        function.parent_class = "X".into();
        function.return_type = Some("int".to_string());
        function.set_definition("{ return 1; }");

        assert_eq!(
            function_declaration(&function, Platform::Android).as_deref(),
            Some("\tint f();\n")
        );
        assert_eq!(ool_definition(&function), "int X::f() { return 1; }\n");
    }

    #[test]
    fn test_ool_definition_with_params() {
        let mut function = Function::new("add", FunctionType::Normal);
        function.parent_class = "Math".into();
        function.return_type = Some("int".to_string());
        function.is_const = true;
        function.args = vec!["int".to_string(), "int".to_string()];
        function.argnames = vec!["a".to_string(), String::new()];
        function.set_definition("{ return a + p1; }");

        assert_eq!(
            ool_definition(&function),
            "int Math::add(int a, int p1) const { return a + p1; }\n"
        );
    }
}
