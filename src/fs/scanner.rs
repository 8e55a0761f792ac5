// src/fs/scanner.rs
//! Template directory scanning.

use std::{fs, io, path::Path};

use tracing::{debug, info};

use crate::{config::Config, error::AppError};

/// Outcome of [`ensure_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// The directory was already there; nothing was touched.
    Existing,
    /// The directory was missing and has been created.
    Created,
}

/// Make sure `dir` exists, creating it and any missing parents.
///
/// Calling this on an existing directory never mutates the filesystem. If
/// another process creates the directory concurrently, that counts as success.
pub fn ensure_dir(dir: &Path) -> Result<DirStatus, AppError> {
    if dir.exists() {
        return Ok(DirStatus::Existing);
    }

    match fs::create_dir_all(dir) {
        Ok(()) => {
            info!(path = %dir.display(), "created template directory");
            Ok(DirStatus::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => {
            Ok(DirStatus::Existing)
        }
        Err(source) => Err(AppError::DirectoryCreationFailed {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// List the spreadsheet files directly inside `dir`, sorted by name.
///
/// Only regular files (following symlinks) whose extension is allowed by
/// `config` are returned. A missing or unreadable directory yields an empty
/// list.
pub fn scan(dir: &Path, config: &Config) -> Vec<String> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "directory not readable, nothing to list");
            return Vec::new();
        }
    };

    let mut files: Vec<String> = read
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| config.is_allowed(name))
        .collect();

    files.sort();
    debug!(path = %dir.display(), count = files.len(), "scanned template directory");
    files
}
