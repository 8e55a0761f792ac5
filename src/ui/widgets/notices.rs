// src/ui/widgets/notices.rs
//! Warning, success and error messages for the current cycle.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{Notice, NoticeLevel},
    ui::icons::icon_for_notice,
};

fn color_for(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

/// Render the notices block.
pub fn render_notices(f: &mut Frame<'_>, area: Rect, notices: &[Notice]) {
    let lines: Vec<Line> = notices
        .iter()
        .map(|n| {
            Line::from(Span::styled(
                format!("{} {}", icon_for_notice(n.level), n.text),
                Style::default().fg(color_for(n.level)),
            ))
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
