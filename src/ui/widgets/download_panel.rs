// src/ui/widgets/download_panel.rs
//! Download action panel and key hints.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::Phase;

/// Render the download action for the selected file.
pub fn render_download_panel(f: &mut Frame<'_>, area: Rect, selected: Option<&str>, phase: &Phase) {
    let Some(name) = selected else {
        return;
    };

    f.render_widget(Block::default().borders(Borders::ALL).title(" Download "), area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let button = Line::from(vec![
        Span::styled(" [d] ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("Download '{name}'"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(button).alignment(Alignment::Left), inner[0]);

    let status = match phase {
        Phase::Ready(payload) => Span::styled(
            format!("{} \u{2022} {} bytes", payload.mime, payload.bytes.len()),
            Style::default().fg(Color::Gray),
        ),
        Phase::Delivered(path) => Span::styled(
            format!("Saved to {}", path.display()),
            Style::default().fg(Color::Green),
        ),
        Phase::DeliveryFailed(msg) => Span::styled(msg.clone(), Style::default().fg(Color::Red)),
        _ => Span::raw(""),
    };
    f.render_widget(Paragraph::new(Line::from(status)).wrap(Wrap { trim: true }), inner[1]);
}

/// Render the key hints on the bottom line.
pub fn render_help(f: &mut Frame<'_>, area: Rect, phase: &Phase) {
    let hints = match phase {
        Phase::DirectoryUnavailable | Phase::NoFilesFound => "r: rescan  q: quit",
        Phase::AwaitingSelection => "\u{2191}/\u{2193}: move  enter: select  r: rescan  q: quit",
        _ => "\u{2191}/\u{2193}: move  enter: select  d: download  esc: clear  r: rescan  q: quit",
    };
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
