//! Command-line front end for header generation.

use anyhow::Context;
use clap::Parser;
use modsdk_codegen::config::DEFAULT_EXTERNAL_PREFIX;
use modsdk_codegen::{GeneratorConfig, HeaderGenerator, write_header};
use modsdk_schema::{Platform, parse_schema_file, validate_schema};
use std::path::PathBuf;

/// Generates the C++ header for the game's classes from a schema file.
#[derive(Debug, Parser)]
#[command(name = "headergen", version, about)]
pub struct Cli {
    /// Class schema file (XML).
    pub schema: PathBuf,

    /// Destination header file.
    #[arg(short, long, default_value = "GeneratedHeader.hpp")]
    pub output: PathBuf,

    /// Target platform: mac, windows, ios or android. Defaults to the host.
    #[arg(short, long, env = "MODSDK_PLATFORM", value_parser = parse_platform)]
    pub platform: Option<Platform>,

    /// Namespace of classes already declared by existing headers.
    #[arg(long, default_value = DEFAULT_EXTERNAL_PREFIX)]
    pub external_prefix: String,

    /// Skip schema validation before generating.
    #[arg(long)]
    pub no_validate: bool,
}

impl Cli {
    /// Builds the generator configuration from the arguments.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .platform(self.platform.unwrap_or_else(Platform::host))
            .external_prefix(self.external_prefix.clone())
    }
}

fn parse_platform(value: &str) -> Result<Platform, String> {
    Platform::parse(value).ok_or_else(|| format!("unknown platform '{value}'"))
}

/// Loads, validates, generates and writes the header.
///
/// Nothing is written unless generation succeeds.
///
/// # Errors
/// Returns an error if the schema cannot be loaded or is invalid, if a base
/// class is missing, or if the header cannot be written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let root = parse_schema_file(&cli.schema)
        .with_context(|| format!("Loading schema {}", cli.schema.display()))?;
    tracing::info!(classes = root.len(), schema = %cli.schema.display(), "loaded schema");

    if cli.no_validate {
        tracing::warn!("schema validation disabled");
    } else {
        validate_schema(&root).context("Validating schema")?;
    }

    let header = HeaderGenerator::new(&root, cli.config())
        .generate()
        .context("Generating header")?;

    write_header(&cli.output, &header)
        .with_context(|| format!("Writing {}", cli.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    const SCHEMA: &str = r#"<schema>
    <class name="A">
        <function name="value" returns="int"><body>{ return 1; }</body></function>
    </class>
    <class name="B" bases="A, cocos2d::CCNode"/>
</schema>"#;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "headergen",
            "Classes.xml",
            "-o",
            "out/Header.hpp",
            "--platform",
            "android",
            "--external-prefix",
            "fmod::",
        ])
        .expect("valid arguments");

        assert_eq!(cli.schema, PathBuf::from("Classes.xml"));
        assert_eq!(cli.output, PathBuf::from("out/Header.hpp"));
        assert_eq!(cli.platform, Some(Platform::Android));
        assert!(!cli.no_validate);

        let config = cli.config();
        assert_eq!(config.active_platform(), Platform::Android);
        assert!(config.is_external("fmod::System"));
    }

    #[test]
    fn test_parse_args_rejects_unknown_platform() {
        let result = Cli::try_parse_from(["headergen", "Classes.xml", "-p", "switch"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_writes_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schema = dir.path().join("Classes.xml");
        let output = dir.path().join("include").join("Header.hpp");
        std::fs::write(&schema, SCHEMA).expect("write schema");

        let cli = Cli::try_parse_from([
            OsStr::new("headergen"),
            schema.as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
            OsStr::new("-p"),
            OsStr::new("mac"),
        ])
        .expect("valid arguments");
        run(&cli).expect("run");

        let header = std::fs::read_to_string(&output).expect("header written");
        assert!(header.contains("#pragma once"));
        assert!(header.contains("struct A;\nstruct B;\n"));
        assert!(header.contains("\nstruct B : A, cocos2d::CCNode {\n"));
        assert!(header.ends_with("int A::value() { return 1; }\n"));
    }

    #[test]
    fn test_run_missing_base_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schema = dir.path().join("Classes.xml");
        let output = dir.path().join("Header.hpp");
        std::fs::write(&schema, r#"<schema><class name="C" bases="D"/></schema>"#)
            .expect("write schema");

        let cli = Cli::try_parse_from([
            OsStr::new("headergen"),
            schema.as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ])
        .expect("valid arguments");

        let err = run(&cli).expect_err("must fail");
        assert!(format!("{err:#}").contains("Create class definition for D"));
        assert!(!output.exists());
    }
}
