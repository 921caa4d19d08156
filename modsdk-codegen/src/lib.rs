//! # modsdk Codegen
//!
//! C++ header generation from class schemas.
//!
//! This crate provides:
//! - Dependency ordering of classes (bases before derived classes)
//! - Forward declarations and class bodies with per-platform members
//! - Out-of-line function definitions
//! - Header file writing

pub mod config;
pub mod cpp;
pub mod error;
pub mod generator;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::HeaderGenerator;
pub use writer::write_header;

/// Generates a C++ header from a class schema string.
///
/// # Arguments
/// * `xml` - XML class schema content
/// * `config` - Generation settings
///
/// # Returns
/// Generated header text.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(xml: &str, config: GeneratorConfig) -> Result<String, CodegenError> {
    let root = modsdk_schema::parse_schema(xml)?;
    modsdk_schema::validate_schema(&root)?;
    HeaderGenerator::new(&root, config).generate()
}

/// Generates a C++ header from a class schema file.
///
/// # Arguments
/// * `path` - Path to the XML class schema file
/// * `config` - Generation settings
///
/// # Returns
/// Generated header text.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modsdk_schema::Platform;

    #[test]
    fn test_generate_from_xml() {
        let xml = r#"<schema>
    <class name="A"><member type="int" name="m_x" platforms="all"/></class>
    <class name="B" bases="A"/>
</schema>"#;

        let output =
            generate_from_xml(xml, GeneratorConfig::new().platform(Platform::Ios)).expect("generate");
        assert!(output.contains("struct A;\nstruct B;\n"));
        assert!(output.contains("\tint m_x;\n"));
    }

    #[test]
    fn test_generate_from_xml_validation_error() {
        let xml = r#"<schema>
    <class name="A"><hardcode type="int" name="m"/></class>
</schema>"#;

        let result = generate_from_xml(xml, GeneratorConfig::new());
        assert!(matches!(result, Err(CodegenError::Schema(_))));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = generate_from_file(&dir.path().join("absent.xml"), GeneratorConfig::new());
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }
}
