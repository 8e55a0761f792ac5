// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::App;

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Title and status line
    pub header: Rect,
    /// Warning/success/error notices
    pub notices: Rect,
    /// Selection list (only when files exist)
    pub list: Option<Rect>,
    /// Download action (only once a file is selected)
    pub action: Option<Rect>,
    /// Key hints on the last line
    pub help: Rect,
}

/// Compute the layout for the current cycle.
///
/// Sections that the cycle does not offer get no area at all, so nothing is
/// drawn for them.
pub fn compute_layout(area: Rect, app: &App) -> ComputedLayout {
    let notice_height = app.notices.len() as u16 + 2;

    let mut constraints = vec![Constraint::Length(4), Constraint::Length(notice_height)];
    if app.shows_selection() {
        constraints.push(Constraint::Min(3));
    }
    if app.shows_download() {
        constraints.push(Constraint::Length(4));
    }
    if !app.shows_selection() {
        constraints.push(Constraint::Min(0));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut rest = chunks[2..].iter().copied();
    let list = if app.shows_selection() { rest.next() } else { None };
    let action = if app.shows_download() { rest.next() } else { None };

    ComputedLayout {
        header: chunks[0],
        notices: chunks[1],
        list,
        action,
        help: chunks[chunks.len() - 1],
    }
}
