// src/lib.rs
//! Sheetpick - a terminal picker for spreadsheet templates.
//!
//! Lists the `.xlsx`/`.xls` files in a template directory and saves the
//! chosen one into the user's download directory.

pub mod app;
pub mod config;
pub mod delivery;
pub mod error;
pub mod fs;
pub mod logging;
pub mod ui;
