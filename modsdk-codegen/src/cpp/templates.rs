//! Text templates for generated C++ declarations.
//!
//! The output is compiler input, so every builder keeps the exact tabs,
//! semicolons and newlines of the declaration it renders.

/// Boilerplate at the top of every generated header.
pub const HEADER_START: &str = "\n#pragma once\n#include <HeaderBase.hpp>\n";

/// Closing line of a class body.
pub const CLASS_END: &str = "};\n";

/// `struct {name};`
#[must_use]
pub fn class_predeclare(class_name: &str) -> String {
    format!("struct {class_name};\n")
}

/// Opening of a class body, preceded by a blank line.
#[must_use]
pub fn class_start(class_name: &str, base_classes: &str) -> String {
    format!("\nstruct {class_name}{base_classes} {{\n")
}

/// Verbatim inline fragment inside a class body.
#[must_use]
pub fn inline_definition(inlined: &str) -> String {
    format!("\t{inlined}\n")
}

/// Declaration of an ordinary, virtual or static function.
#[must_use]
pub fn function_declaration(
    is_static: bool,
    is_virtual: bool,
    return_type: &str,
    function_name: &str,
    raw_arg_types: &str,
    is_const: bool,
) -> String {
    format!(
        "\t{static_}{virtual_}{return_type} {function_name}({raw_arg_types}){const_};\n",
        static_ = if is_static { "static " } else { "" },
        virtual_ = if is_virtual { "virtual " } else { "" },
        const_ = const_suffix(is_const),
    )
}

/// Declaration of a constructor or destructor.
#[must_use]
pub fn structor_declaration(function_name: &str, raw_arg_types: &str) -> String {
    format!("\t{function_name}({raw_arg_types});\n")
}

/// Plain data member.
#[must_use]
pub fn member_definition(ty: &str, member_name: &str, array: &str) -> String {
    format!("\t{ty} {member_name}{array};\n")
}

/// Padding directive.
#[must_use]
pub fn pad_definition(hardcode: &str) -> String {
    format!("\tGEODE_PAD({hardcode});\n")
}

/// Member placed at a hardcoded value.
#[must_use]
pub fn hardcode_definition(ty: &str, member_name: &str, hardcode: &str) -> String {
    format!("\tCLASSPARAM({ty}, {member_name}, {hardcode});\n")
}

/// Out-of-line function definition qualified by its class.
#[must_use]
pub fn ool_function_definition(
    return_type: &str,
    class_name: &str,
    function_name: &str,
    raw_params: &str,
    is_const: bool,
    definition: &str,
) -> String {
    format!(
        "{return_type} {class_name}::{function_name}({raw_params}){const_} {definition}\n",
        const_ = const_suffix(is_const),
    )
}

const fn const_suffix(is_const: bool) -> &'static str {
    if is_const { " const" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_templates() {
        assert_eq!(class_predeclare("A"), "struct A;\n");
        assert_eq!(class_start("B", " : A"), "\nstruct B : A {\n");
        assert_eq!(class_start("A", ""), "\nstruct A {\n");
        assert_eq!(inline_definition("int x = 0;"), "\tint x = 0;\n");
    }

    #[test]
    fn test_function_templates() {
        assert_eq!(
            function_declaration(false, true, "bool", "init", "int, float", false),
            "\tvirtual bool init(int, float);\n"
        );
        assert_eq!(
            function_declaration(true, false, "Foo*", "get", "", false),
            "\tstatic Foo* get();\n"
        );
        assert_eq!(
            function_declaration(false, false, "int", "size", "", true),
            "\tint size() const;\n"
        );
        assert_eq!(structor_declaration("~Foo", ""), "\t~Foo();\n");
    }

    #[test]
    fn test_member_templates() {
        assert_eq!(member_definition("int", "m_x", "[4]"), "\tint m_x[4];\n");
        assert_eq!(pad_definition("0x8"), "\tGEODE_PAD(0x8);\n");
        assert_eq!(
            hardcode_definition("float", "m_speed", "0x120"),
            "\tCLASSPARAM(float, m_speed, 0x120);\n"
        );
    }

    #[test]
    fn test_ool_template() {
        assert_eq!(
            ool_function_definition("int", "X", "f", "int a", true, "{ return a; }"),
            "int X::f(int a) const { return a; }\n"
        );
    }
}
