//! Generator configuration types

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "ERR-";

/// Settings for one generation run.
///
/// Can be built from CLI flags, from an `errgen.toml` file, or both (flags
/// win). Only `type_name` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the struct that declares the error messages
    #[serde(default, rename = "type")]
    pub type_name: String,

    /// Prefix of every generated identifier (`ERR-` gives `[ERR-1]`)
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Explicit output path; derived from the type name when absent
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Directory whose `.rs` files are scanned
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Identifier assigned to the first declared field
    #[serde(default = "default_base")]
    pub base: u32,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_base() -> u32 {
    1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            type_name: String::new(),
            prefix: default_prefix(),
            output: None,
            source_dir: default_source_dir(),
            base: default_base(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for the given struct with default settings
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GenerateResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GenerateError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> GenerateResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> GenerateResult<()> {
        if self.type_name.trim().is_empty() {
            return Err(GenerateError::Config(
                "mandatory parameter `type` is missing".to_string(),
            ));
        }

        if self.prefix.is_empty() {
            return Err(GenerateError::Config("prefix must not be empty".to_string()));
        }

        // The tag is rendered as `[<prefix><id>]`; a bracket in the prefix
        // would break prefix-free matching in the classifier.
        if self.prefix.contains(['[', ']']) {
            return Err(GenerateError::Config(format!(
                "prefix must not contain brackets: {:?}",
                self.prefix
            )));
        }

        if self.base == 0 {
            return Err(GenerateError::Config(
                "identifier base must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
