// src/fs/detection.rs
//! Spreadsheet type detection from the file extension.

use std::{fmt, path::Path};

use mime_guess::{mime, Mime};

/// MIME type for Office Open XML workbooks.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// MIME type for legacy binary workbooks.
pub const XLS_MIME: &str = "application/vnd.ms-excel";
/// Fallback for anything that is not a recognised workbook.
pub static OCTET_STREAM_MIME: Mime = mime::APPLICATION_OCTET_STREAM;

/// Spreadsheet formats recognised by extension.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SheetKind {
    Xlsx,
    Xls,
    Other,
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SheetKind::Xlsx => "Excel workbook",
            SheetKind::Xls => "Excel 97-2003 workbook",
            SheetKind::Other => "File",
        };
        write!(f, "{}", s)
    }
}

impl SheetKind {
    /// Classify a file name by its extension, ignoring case.
    pub fn from_name(file_name: &str) -> Self {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("xlsx") => SheetKind::Xlsx,
            Some("xls") => SheetKind::Xls,
            _ => SheetKind::Other,
        }
    }

    /// Content type sent along with a delivered file.
    pub fn mime(self) -> &'static str {
        match self {
            SheetKind::Xlsx => XLSX_MIME,
            SheetKind::Xls => XLS_MIME,
            SheetKind::Other => OCTET_STREAM_MIME.essence_str(),
        }
    }
}

/// MIME type for a file name.
pub fn mime_for(file_name: &str) -> &'static str {
    SheetKind::from_name(file_name).mime()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_spreadsheet_extensions() {
        assert_eq!(mime_for("a.xlsx"), XLSX_MIME);
        assert_eq!(mime_for("a.xls"), XLS_MIME);
        assert_eq!(mime_for("a.XLS"), XLS_MIME);
        assert_eq!(mime_for("a.XlSx"), XLSX_MIME);
    }

    #[test]
    fn anything_else_is_octet_stream() {
        assert_eq!(mime_for("a.csv"), "application/octet-stream");
        assert_eq!(mime_for("no_extension"), "application/octet-stream");
        assert_eq!(mime_for("a.csv"), OCTET_STREAM_MIME.essence_str());
    }

    #[test]
    fn agrees_with_mime_guess_for_spreadsheets() {
        assert_eq!(mime_guess::from_ext("xls").first_raw(), Some(XLS_MIME));
        assert_eq!(mime_guess::from_ext("xlsx").first_raw(), Some(XLSX_MIME));
    }
}
