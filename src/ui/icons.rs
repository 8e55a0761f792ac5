// src/ui/icons.rs
//! Icon mappings for spreadsheets and notices.

use crate::{app::NoticeLevel, fs::SheetKind};

/// Get the appropriate icon for a listed file.
pub fn icon_for_entry(kind: SheetKind) -> &'static str {
    match kind {
        SheetKind::Xlsx | SheetKind::Xls => "\u{f1c3}", // spreadsheet icon
        SheetKind::Other => "\u{f15b}",
    }
}

/// Get the prefix shown in front of a notice.
pub fn icon_for_notice(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "\u{2714}",
        NoticeLevel::Warning => "\u{26a0}",
        NoticeLevel::Error => "\u{2716}",
    }
}
