//! Header assembly.
//!
//! Orders the schema's classes and concatenates the generated fragments into
//! one header: prologue, forward declarations, class bodies, then the
//! out-of-line function definitions.

use crate::config::GeneratorConfig;
use crate::cpp::{ClassGenerator, functions, sort_root};
use crate::error::CodegenError;
use modsdk_schema::Root;

/// Main header generator.
pub struct HeaderGenerator<'a> {
    root: &'a Root,
    config: GeneratorConfig,
}

impl<'a> HeaderGenerator<'a> {
    /// Creates a new generator for a loaded schema.
    #[must_use]
    pub fn new(root: &'a Root, config: GeneratorConfig) -> Self {
        Self { root, config }
    }

    /// Generates the complete header text.
    ///
    /// # Errors
    /// Returns `CodegenError` if a base class is missing from the schema. No
    /// partial output is produced in that case.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let ordered = sort_root(self.root, &self.config)?;
        let classes = ClassGenerator::new(&ordered, self.config.active_platform());

        let mut output = String::from(self.config.header_prologue());
        output.push_str(&classes.generate_predeclarations());

        let bodies = classes.generate_bodies();
        output.push_str(&bodies.text);

        for function in &bodies.out_of_line {
            output.push_str(&functions::ool_definition(function));
        }

        tracing::info!(
            platform = %self.config.active_platform(),
            classes = ordered.len(),
            out_of_line = bodies.out_of_line.len(),
            bytes = output.len(),
            "generated header"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpp::templates::HEADER_START;
    use modsdk_schema::{Platform, parse_schema};

    fn generate(xml: &str, platform: Platform) -> Result<String, CodegenError> {
        let root = parse_schema(xml).expect("Failed to parse");
        HeaderGenerator::new(&root, GeneratorConfig::new().platform(platform)).generate()
    }

    #[test]
    fn test_two_class_header() {
        let xml = r#"<schema>
    <class name="B" bases="A">
        <function name="run" kind="virtual"><bind platform="windows">0x2</bind></function>
    </class>
    <class name="A">
        <function name="A" kind="constructor"><bind platform="windows">0x1</bind></function>
    </class>
</schema>"#;

        let output = generate(xml, Platform::Windows).expect("generate");
        let expected = format!(
            "{HEADER_START}struct A;\nstruct B;\n\
             \nstruct A {{\n\tA();\n}};\n\
             \nstruct B : A {{\n\tvirtual void run();\n}};\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_out_of_line_after_bodies() {
        let xml = r#"<schema>
    <class name="X">
        <function name="f" returns="int"><body>{ return 1; }</body></function>
    </class>
    <class name="Y" bases="X"/>
</schema>"#;

        let output = generate(xml, Platform::Mac).expect("generate");
        let ool = output.find("int X::f() { return 1; }\n").expect("ool definition");
        let last_body = output.rfind(crate::cpp::templates::CLASS_END).expect("class end");

        assert!(ool > last_body);
        assert!(output.ends_with("int X::f() { return 1; }\n"));
        assert!(output.contains("\tint f();\n"));
    }

    #[test]
    fn test_missing_base_produces_no_output() {
        let xml = r#"<schema><class name="C" bases="D"/></schema>"#;
        let err = generate(xml, Platform::Windows).expect_err("must fail");
        assert_eq!(err.to_string(), "Create class definition for D");
    }

    #[test]
    fn test_platform_selection() {
        let xml = r#"<schema>
    <class name="P">
        <function name="win"><bind platform="windows">0x1</bind></function>
        <function name="mac"><bind platform="mac">0x2</bind></function>
        <member type="int" name="m_plain" platforms="mac"/>
        <hardcode type="int" name="m_m_fixed"><bind platform="windows">0x30</bind></hardcode>
    </class>
</schema>"#;

        let windows = generate(xml, Platform::Windows).expect("generate");
        assert!(windows.contains("\tvoid win();\n"));
        assert!(!windows.contains("mac()"));
        assert!(!windows.contains("m_plain"));
        assert!(windows.contains("\tCLASSPARAM(int, m_fixed, 0x30);\n"));

        let mac = generate(xml, Platform::Mac).expect("generate");
        assert!(mac.contains("\tvoid mac();\n"));
        assert!(!mac.contains("win()"));
        assert!(mac.contains("\tint m_plain;\n"));
        assert!(!mac.contains("CLASSPARAM"));
    }

    #[test]
    fn test_external_classes_not_emitted() {
        let xml = r#"<schema>
    <class name="cocos2d::CCNode"/>
    <class name="Layer" bases="cocos2d::CCNode"/>
</schema>"#;

        let output = generate(xml, Platform::Windows).expect("generate");
        assert!(!output.contains("struct cocos2d::CCNode;"));
        assert!(output.contains("struct Layer;\n"));
        assert!(output.contains("\nstruct Layer : cocos2d::CCNode {\n"));
    }

    #[test]
    fn test_custom_prologue() {
        let root = parse_schema(r#"<schema><class name="A"/></schema>"#).expect("Failed to parse");
        let config = GeneratorConfig::new().prologue("// generated\n");
        let output = HeaderGenerator::new(&root, config).generate().expect("generate");
        assert_eq!(output, "// generated\nstruct A;\n\nstruct A {\n};\n");
    }

    #[test]
    fn test_empty_schema() {
        let output = generate("<schema/>", Platform::Windows).expect("generate");
        assert_eq!(output, HEADER_START);
    }
}
