//! Source scanning
//!
//! Lists the `.rs` files of one directory and parses each of them with
//! [`syn`]. The directory is treated like a package: it is not walked
//! recursively, and files are visited in file-name order so that every later
//! stage sees declarations in a stable order.

use crate::error::{GenerateError, GenerateResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A parsed source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path the file was read from.
    pub path: PathBuf,

    /// Name of the module the file defines.
    pub module_name: String,

    /// Parsed syntax tree.
    pub syntax: syn::File,
}

impl SourceFile {
    /// Parse in-memory source as if it had been read from `path`.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> GenerateResult<Self> {
        let path = path.into();
        let syntax = syn::parse_file(content).map_err(|source| GenerateError::ParseSource {
            path: path.clone(),
            source,
        })?;
        let module_name = module_name_for(&path);

        Ok(Self {
            path,
            module_name,
            syntax,
        })
    }

    /// Read and parse a file from disk.
    pub fn read(path: &Path) -> GenerateResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| GenerateError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &content)
    }
}

/// Parse every `.rs` file in `dir`.
///
/// A single unreadable or unparsable file aborts the scan.
pub fn scan_dir(dir: &Path) -> GenerateResult<Vec<SourceFile>> {
    let read_dir_err = |source| GenerateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| {
            debug!(file = %path.display(), "parsing source file");
            SourceFile::read(path)
        })
        .collect()
}

/// Derive the module name a file defines from its path.
///
/// `foo.rs` defines `foo`, `foo/mod.rs` defines `foo`, and crate roots
/// (`lib.rs`, `main.rs`) define `crate`.
pub fn module_name_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match stem.as_str() {
        "lib" | "main" => "crate".to_string(),
        "mod" => path
            .parent()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "crate".to_string()),
        _ => stem,
    }
}
