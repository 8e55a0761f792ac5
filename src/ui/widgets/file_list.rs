// src/ui/widgets/file_list.rs
//! Template selection list widget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::fs::SheetKind;
use crate::ui::icons::icon_for_entry;

/// Shown in the list title while nothing is selected.
pub const PLACEHOLDER: &str = "Choose an option";

/// Render the selection list. The chosen file is marked; the highlight only
/// tracks the cursor.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    entries: &[String],
    selected: Option<&str>,
    state: &mut ListState,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|name| {
            let marker = if selected == Some(name.as_str()) { "\u{25cf}" } else { " " };
            let line = format!(
                "{} {} {:<32} {}",
                marker,
                icon_for_entry(SheetKind::from_name(name)),
                name,
                SheetKind::from_name(name)
            );
            let item = ListItem::new(line);
            if selected == Some(name.as_str()) {
                item.style(Style::default().fg(Color::Cyan))
            } else {
                item
            }
        })
        .collect();

    let title = format!(
        " Select an Excel file to download: {} ",
        selected.unwrap_or(PLACEHOLDER)
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
