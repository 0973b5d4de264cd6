//! Error types for the generation pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Fatal conditions that abort a generation run.
///
/// Non-fatal conditions (a field without an `errmsg`) are logged and never
/// surface as an error.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Invalid or incomplete configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Source directory could not be listed
    #[error("cannot process directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file could not be read
    #[error("failed reading a source file: filename={}, err={source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not valid Rust
    #[error("failed parsing a source file: filename={}, err={source}", path.display())]
    ParseSource {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    /// No struct with the requested name exists in the scanned directory
    #[error("struct `{type_name}` not found in {}", dir.display())]
    TypeNotFound { type_name: String, dir: PathBuf },

    /// Annotation could not be tokenized
    #[error("invalid annotation on `{field}`: {reason}")]
    InvalidAnnotation { field: String, reason: String },

    /// A `vars` entry did not split into a name and a type
    #[error("invalid syntax of vars has detected on `{field}`: given={entry:?}")]
    MalformedVars { field: String, entry: String },

    /// A declared parameter is not a valid Rust identifier or type
    #[error("invalid parameter `{param}` on `{field}`: {reason}")]
    InvalidParameter {
        field: String,
        param: String,
        reason: String,
    },

    /// A generated item name collides with another or is not a valid identifier
    #[error("generated name `{name}` is unusable: {detail}")]
    InvalidName { name: String, detail: String },

    /// The identifier counter ran past `u32::MAX`
    #[error("identifier counter overflowed at `{field}`")]
    IdOverflow { field: String },

    /// Output file could not be written
    #[error("failed to write generated code to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Check mode found the output missing or different from the rendered artifact
    #[error("generated code at {} is out of date", path.display())]
    Stale { path: PathBuf },
}

impl GenerateError {
    /// Process exit code for this error.
    ///
    /// Configuration problems are reported before the pipeline starts and
    /// get their own code so scripts can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::Config(_) => 2,
            _ => 1,
        }
    }
}

impl From<toml::de::Error> for GenerateError {
    fn from(err: toml::de::Error) -> Self {
        GenerateError::Config(err.to_string())
    }
}
