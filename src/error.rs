// src/error.rs
//! Error taxonomy for scanning and delivering templates.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced to the user. None of them terminate the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// The template directory was missing and could not be created.
    /// Halts the current render cycle.
    #[error("Failed to create directory '{}': {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was listed by the last scan but is gone now.
    #[error(
        "Error: File '{file_name}' not found at path '{}'. Please check the directory.",
        .path.display()
    )]
    SelectedFileMissing { file_name: String, path: PathBuf },

    /// Any other failure while reading or saving the selected file.
    #[error("An error occurred while preparing the download: {source}")]
    DeliveryIo {
        file_name: String,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_message_names_file_and_path() {
        let err = AppError::SelectedFileMissing {
            file_name: "budget.xls".into(),
            path: PathBuf::from("/tmp/Excel_templates/budget.xls"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'budget.xls'"));
        assert!(msg.contains("/tmp/Excel_templates/budget.xls"));
    }

    #[test]
    fn io_error_carries_cause() {
        let err = AppError::DeliveryIo {
            file_name: "a.xlsx".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };
        assert!(err.to_string().ends_with("access denied"));
    }

    #[test]
    fn creation_failure_names_directory() {
        let err = AppError::DirectoryCreationFailed {
            path: PathBuf::from("/root/nope"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Failed to create directory '/root/nope'"));
    }
}
