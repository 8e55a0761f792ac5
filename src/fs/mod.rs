// src/fs/mod.rs
//! Filesystem module - handles template scanning and type detection.

pub mod detection;
pub mod scanner;

// Re-export commonly used types
pub use detection::{mime_for, SheetKind, OCTET_STREAM_MIME, XLSX_MIME, XLS_MIME};
pub use scanner::{ensure_dir, scan, DirStatus};
