// src/ui/widgets/header.rs
//! Title and status line.

use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Application title.
pub const TITLE: &str = "Excel Template Selector & Downloader";

/// Render the title block with the directory being searched.
pub fn render_header(f: &mut Frame<'_>, area: Rect, template_dir: &Path) {
    let status = Line::from(vec![
        Span::raw("Searching for Excel files in: "),
        Span::styled(
            template_dir.display().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(
        Paragraph::new(status).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" \u{1f4ca} {TITLE} ")),
        ),
        area,
    );
}
