//! # modsdk
//!
//! Tooling for a game mod SDK.
//!
//! modsdk turns a schema of the game's internal classes into a C++ header
//! that mods compile against: classes are declared bases-first, members and
//! functions are filtered per platform, and portable function bodies are
//! emitted out of line.
//!
//! ## Quick Start
//!
//! ```ignore
//! use modsdk::prelude::*;
//!
//! let root = parse_schema(&std::fs::read_to_string("Classes.xml")?)?;
//! validate_schema(&root)?;
//! let header = HeaderGenerator::new(&root, GeneratorConfig::new().platform(Platform::Mac))
//!     .generate()?;
//! write_header("GeneratedHeader.hpp".as_ref(), &header)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Class schema model, XML loading and validation
//! - [`codegen`] - Dependency ordering and header generation
//! - [`cli`] - The `headergen` command-line front end

pub mod cli;
pub mod prelude;

/// Class schema model, loading and validation.
pub mod schema {
    pub use modsdk_schema::*;
}

/// C++ header generation.
pub mod codegen {
    pub use modsdk_codegen::*;
}

// Re-export commonly used items at the crate root
pub use modsdk_codegen::{CodegenError, GeneratorConfig, HeaderGenerator, write_header};
pub use modsdk_schema::{ClassDefinition, Platform, Root, parse_schema, validate_schema};
