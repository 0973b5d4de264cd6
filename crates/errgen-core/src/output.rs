//! Writing generated code to disk

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::naming::default_file_name;
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the output of `config` goes.
///
/// An explicit `output` is used as given; otherwise the file lands next to
/// the scanned sources, named after the type.
pub fn output_path(config: &GeneratorConfig) -> PathBuf {
    match &config.output {
        Some(path) => path.clone(),
        None => config
            .source_dir
            .join(default_file_name(&config.type_name)),
    }
}

/// Replace the file at `path` with `content`.
///
/// The content is written to a temporary file in the same directory and
/// renamed over the target, so readers never observe a partial file. An
/// existing target keeps its permissions; a new one is world-readable
/// (`0o644` on unix).
pub fn write_atomic(path: &Path, content: &str) -> GenerateResult<()> {
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    if let Some(permissions) = target_permissions(path) {
        file.as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Permissions the written file should end up with.
///
/// Temporary files are created owner-only, so they are always replaced.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Verify that `path` holds exactly `content`.
pub fn check_up_to_date(path: &Path, content: &str) -> GenerateResult<()> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == content => Ok(()),
        _ => Err(GenerateError::Stale {
            path: path.to_path_buf(),
        }),
    }
}
