// src/ui/widgets/mod.rs
//! Custom widgets for the sheetpick UI.

pub mod download_panel;
pub mod file_list;
pub mod header;
pub mod notices;

// Re-export widget rendering functions
pub use download_panel::{render_download_panel, render_help};
pub use file_list::render_file_list;
pub use header::render_header;
pub use notices::render_notices;
