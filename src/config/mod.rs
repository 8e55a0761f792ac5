// src/config/mod.rs
//! Configuration module: where templates are read from and downloads go.
//!
//! A single [`Config`] is built at startup and handed to the scanner and the
//! delivery service, so neither reads process-wide state.

use std::path::{Path, PathBuf};

/// Name of the template directory, relative to the executable.
pub const TEMPLATE_DIR_NAME: &str = "Excel_templates";

/// Extensions offered for download, lowercase and without the dot.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for templates
    pub template_dir: PathBuf,
    /// Directory delivered payloads are saved into
    pub download_dir: PathBuf,
    /// Allowed file extensions (lowercase, no dot)
    pub allowed_extensions: &'static [&'static str],
}

impl Config {
    /// Build a config for an explicit template and download directory.
    pub fn new(template_dir: impl Into<PathBuf>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            download_dir: download_dir.into(),
            allowed_extensions: &ALLOWED_EXTENSIONS,
        }
    }

    /// Default layout: `Excel_templates` next to the running executable,
    /// downloads into the user's download directory.
    pub fn from_exe_dir() -> Self {
        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        Self::new(base.join(TEMPLATE_DIR_NAME), default_download_dir())
    }

    /// Case-insensitive check of a file name's extension against the allowed set.
    pub fn is_allowed(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.allowed_extensions.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }
}

/// The platform download directory, or the current directory when unknown.
fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
