//! Pipeline driver
//!
//! Scanner, locator, allocator, emitter and writer run strictly in sequence.
//! Any fatal error stops the run before the output file is touched.

use crate::config::GeneratorConfig;
use crate::emit::{GeneratedArtifact, emit};
use crate::error::{GenerateError, GenerateResult};
use crate::ident::allocate;
use crate::locate::locate;
use crate::output::{check_up_to_date, output_path, write_atomic};
use crate::source::scan_dir;
use std::path::PathBuf;

/// What to do with the rendered artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write (or overwrite) the output file.
    #[default]
    Write,
    /// Compare against the existing output file without touching it.
    Check,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, messages: usize },
    UpToDate { path: PathBuf, messages: usize },
}

impl Outcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            Outcome::Written { path, .. } | Outcome::UpToDate { path, .. } => path,
        }
    }

    /// Number of generated messages.
    pub fn messages(&self) -> usize {
        match self {
            Outcome::Written { messages, .. } | Outcome::UpToDate { messages, .. } => *messages,
        }
    }
}

/// Runs one generation pass for a validated configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Validate `config` and wrap it in a generator.
    pub fn new(config: GeneratorConfig) -> GenerateResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Destination of the generated file.
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.config)
    }

    /// Build the artifact in memory without touching the output file.
    pub fn generate(&self) -> GenerateResult<GeneratedArtifact> {
        let config = &self.config;
        let files = scan_dir(&config.source_dir)?;

        let target =
            locate(&config.type_name, &files).ok_or_else(|| GenerateError::TypeNotFound {
                type_name: config.type_name.clone(),
                dir: config.source_dir.clone(),
            })?;
        tracing::debug!(
            type_name = %target.name,
            file = %target.path.display(),
            fields = target.fields.len(),
            "located target struct"
        );

        let records = allocate(&target.fields, &config.prefix, config.base)?;
        emit(&target.name, &target.package_name, &records)
    }

    /// Generate and then write or check the output file.
    pub fn run(&self, mode: Mode) -> GenerateResult<Outcome> {
        let artifact = self.generate()?;
        let messages = artifact.constructor_decls.len();
        let content = artifact.render();
        let path = self.output_path();

        match mode {
            Mode::Write => {
                write_atomic(&path, &content)?;
                tracing::info!(path = %path.display(), messages, "wrote generated code");
                Ok(Outcome::Written { path, messages })
            }
            Mode::Check => {
                check_up_to_date(&path, &content)?;
                tracing::info!(path = %path.display(), "generated code is up to date");
                Ok(Outcome::UpToDate { path, messages })
            }
        }
    }
}

/// Validate `config` and write its output file.
pub fn generate_file(config: GeneratorConfig) -> GenerateResult<Outcome> {
    Generator::new(config)?.run(Mode::Write)
}
