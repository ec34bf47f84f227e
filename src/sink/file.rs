//! Atomic file delivery.
//!
//! Writes go to a temporary sibling first and are published with a rename,
//! so a reader never observes a partially written sitemap and two
//! concurrent exports cannot interleave bytes at the same path.

use std::{fs, io, path::{Path, PathBuf}};
use thiserror::Error;

/// File delivery failure with a human-readable reason.
///
/// Crossing this boundary never panics; callers decide what the failure
/// means for them (status message, exit code).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("target path '{path}' has no file name")]
    InvalidTarget { path: PathBuf },

    #[error("could not create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write '{path}': {source}")]
    WriteTemp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not publish '{path}': {source}")]
    Publish {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Atomically write `bytes` to `path`.
///
/// The bytes land in a temporary file next to the target, then a rename
/// publishes them. On failure the temporary file is removed and the target
/// is left untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ExportError::InvalidTarget {
            path: path.to_path_buf(),
        })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Per-process temp name keeps concurrent exporters off each other's
    // bytes; the rename decides who publishes last
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(format!(".{}.tmp", std::process::id()));
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, bytes).map_err(|source| ExportError::WriteTemp {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        ExportError::Publish {
            path: path.to_path_buf(),
            source,
        }
    })
}
