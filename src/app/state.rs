// src/app/state.rs
//! Application state management.

use std::path::PathBuf;

use ratatui::{widgets::ListState, Frame};
use tracing::{debug, info};

use crate::{
    config::Config,
    delivery::{save_payload, DeliveryService, Payload},
    fs::{ensure_dir, DirStatus},
    ui::{
        keybindings::{key_to_action, NavigationAction},
        layout::compute_layout,
        widgets::{
            render_download_panel, render_file_list, render_header, render_help, render_notices,
        },
    },
};

use crossterm::event::KeyEvent;

/// Severity of a notice shown under the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// One user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Where the current render cycle ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The template directory is missing and could not be created.
    DirectoryUnavailable,
    /// The directory holds no spreadsheets; nothing to select.
    NoFilesFound,
    /// Files are listed, nothing chosen yet.
    AwaitingSelection,
    /// A file was chosen and read; the download action is offered.
    Ready(Payload),
    /// The chosen file was saved to the given path.
    Delivered(PathBuf),
    /// Reading or saving the chosen file failed.
    DeliveryFailed(String),
}

/// Main application state.
pub struct App {
    /// Scans and reads templates
    pub service: DeliveryService,
    /// Spreadsheet names from the last scan
    pub entries: Vec<String>,
    /// List widget state (highlighted row)
    pub state: ListState,
    /// File chosen by the user, if any
    pub selected: Option<String>,
    /// Outcome of the current cycle
    pub phase: Phase,
    /// Messages shown under the status line
    pub notices: Vec<Notice>,
}

impl App {
    /// Create a new application instance and run the first render cycle.
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            service: DeliveryService::new(config),
            entries: Vec::new(),
            state: ListState::default(),
            selected: None,
            phase: Phase::AwaitingSelection,
            notices: Vec::new(),
        };
        app.refresh();
        app
    }

    pub fn template_dir(&self) -> &std::path::Path {
        &self.service.config().template_dir
    }

    /// Start a new render cycle: ensure the directory exists, then re-scan.
    ///
    /// A delivery outcome from the previous action is kept so it stays visible.
    /// A selection whose file is no longer listed is dropped.
    pub fn refresh(&mut self) {
        self.notices.clear();
        let dir = self.template_dir().to_path_buf();
        let failure = match &self.phase {
            Phase::DeliveryFailed(msg) => Some(msg.clone()),
            _ => None,
        };

        match ensure_dir(&dir) {
            Ok(DirStatus::Existing) => {}
            Ok(DirStatus::Created) => {
                self.notices.push(Notice::new(
                    NoticeLevel::Warning,
                    format!("Directory '{}' not found. Creating it for you.", dir.display()),
                ));
                self.notices.push(Notice::new(
                    NoticeLevel::Success,
                    format!(
                        "Directory '{}' created. Please add your Excel files there.",
                        dir.display()
                    ),
                ));
            }
            Err(err) => {
                tracing::error!(error = %err, "template directory unavailable");
                self.notices.push(Notice::new(NoticeLevel::Error, err.to_string()));
                self.entries.clear();
                self.selected = None;
                self.state.select(None);
                self.phase = Phase::DirectoryUnavailable;
                return;
            }
        }

        self.entries = self.service.entries();

        if self.entries.is_empty() {
            self.notices.push(Notice::new(
                NoticeLevel::Warning,
                format!(
                    "No Excel files found in '{}'. Please add some `.xlsx` or `.xls` files.",
                    dir.display()
                ),
            ));
            self.selected = None;
            self.state.select(None);
            self.phase = Phase::NoFilesFound;
            self.push_failure(failure);
            return;
        }

        self.notices.push(Notice::new(
            NoticeLevel::Success,
            format!("Found {} Excel file(s).", self.entries.len()),
        ));

        if let Some(i) = self.state.selected() {
            if i >= self.entries.len() {
                self.state.select(Some(self.entries.len() - 1));
            }
        }
        if let Some(name) = &self.selected {
            if !self.entries.contains(name) {
                debug!(file = %name, "selected file no longer listed");
                self.selected = None;
            }
        }
        if self.selected.is_none() && matches!(self.phase, Phase::Ready(_) | Phase::Delivered(_)) {
            self.phase = Phase::AwaitingSelection;
        }
        if matches!(self.phase, Phase::DirectoryUnavailable | Phase::NoFilesFound) {
            self.phase = Phase::AwaitingSelection;
        }
        self.push_failure(failure);
        debug!(count = self.entries.len(), "render cycle ready");
    }

    /// A failure with no selection left has no download panel to show it in.
    fn push_failure(&mut self, failure: Option<String>) {
        if let (Some(msg), None) = (failure, &self.selected) {
            self.notices.push(Notice::new(NoticeLevel::Error, msg));
        }
    }

    /// Choose `file_name` and prepare its download.
    ///
    /// The selection only sticks when the file could be read.
    pub fn select(&mut self, file_name: &str) {
        info!(file = file_name, "file selected");
        match self.service.deliver(file_name) {
            Ok(payload) => {
                self.selected = Some(file_name.to_string());
                self.phase = Phase::Ready(payload);
            }
            Err(err) => {
                self.selected = None;
                self.phase = Phase::DeliveryFailed(err.to_string());
            }
        }
    }

    /// Re-read the selected file and save it to the download directory.
    ///
    /// Does nothing while no file is selected.
    pub fn download(&mut self) {
        let Some(name) = self.selected.as_deref() else {
            return;
        };

        let result = self
            .service
            .deliver(name)
            .and_then(|payload| save_payload(&payload, &self.service.config().download_dir));

        self.phase = match result {
            Ok(path) => Phase::Delivered(path),
            Err(err) => Phase::DeliveryFailed(err.to_string()),
        };
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        if !matches!(self.phase, Phase::DirectoryUnavailable | Phase::NoFilesFound) {
            self.phase = Phase::AwaitingSelection;
        }
    }

    /// Whether the selection list is offered this cycle.
    pub fn shows_selection(&self) -> bool {
        !matches!(self.phase, Phase::DirectoryUnavailable | Phase::NoFilesFound)
    }

    /// Whether the download action is offered this cycle.
    pub fn shows_download(&self) -> bool {
        self.shows_selection() && self.selected.is_some()
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        let action = key_to_action(&key);

        match action {
            NavigationAction::Quit => return true,
            NavigationAction::None => return false,
            _ => {}
        }

        // A failure without a selection is reported for one cycle only.
        if matches!(self.phase, Phase::DeliveryFailed(_)) && self.selected.is_none() {
            self.phase = Phase::AwaitingSelection;
        }

        if self.shows_selection() {
            match action {
                NavigationAction::Down => {
                    let next = match self.state.selected() {
                        Some(i) if i + 1 < self.entries.len() => i + 1,
                        Some(i) => i,
                        None => 0,
                    };
                    self.state.select(Some(next));
                }
                NavigationAction::Up => {
                    let prev = self.state.selected().map(|i| i.saturating_sub(1)).unwrap_or(0);
                    self.state.select(Some(prev));
                }
                NavigationAction::Select => {
                    let picked = self.state.selected().and_then(|i| self.entries.get(i)).cloned();
                    if let Some(name) = picked {
                        self.select(&name);
                    }
                }
                NavigationAction::Download => self.download(),
                NavigationAction::ClearSelection => self.clear_selection(),
                _ => {}
            }
        }

        // Every interaction starts a fresh cycle.
        self.refresh();
        false
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area(), self);

        render_header(f, layout.header, self.template_dir());
        render_notices(f, layout.notices, &self.notices);

        if let Some(area) = layout.list {
            render_file_list(
                f,
                area,
                &self.entries,
                self.selected.as_deref(),
                &mut self.state,
            );
        }
        if let Some(area) = layout.action {
            render_download_panel(f, area, self.selected.as_deref(), &self.phase);
        }
        render_help(f, layout.help, &self.phase);
    }
}
