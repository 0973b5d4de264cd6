//! errgen-core - Error-message code generation
//!
//! Scans a directory of Rust sources for a struct whose fields carry
//! `#[errgen(...)]` annotations and generates one constructor per field,
//! each producing an error whose text starts with a stable identifier tag
//! such as `[ERR-1]`.
//!
//! The pipeline is:
//! - [`source`] parses every `.rs` file of the directory
//! - [`locate`] finds the target struct and its fields
//! - [`annotation`] decodes each field's annotation
//! - [`ident`] assigns identifiers in declaration order
//! - [`emit`] builds and renders the generated declarations
//! - [`output`] writes (or checks) the destination file
//!
//! [`Generator`] drives the whole pass from a [`GeneratorConfig`].
//!
//! ```no_run
//! use errgen_core::{GeneratorConfig, generate_file};
//!
//! let config = GeneratorConfig::new("BasicErrMsg").with_source_dir("src/defs");
//! let outcome = generate_file(config)?;
//! println!("wrote {}", outcome.path().display());
//! # Ok::<(), errgen_core::GenerateError>(())
//! ```

pub mod annotation;
pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod ident;
pub mod locate;
pub mod naming;
pub mod output;
pub mod source;
pub mod template;

pub use config::GeneratorConfig;
pub use emit::GeneratedArtifact;
pub use error::{GenerateError, GenerateResult};
pub use generator::{Generator, Mode, Outcome, generate_file};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GenerateError, GenerateResult, GeneratedArtifact, Generator, GeneratorConfig, Mode,
        Outcome, generate_file,
    };
}
