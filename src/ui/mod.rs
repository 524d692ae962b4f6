//! UI module for Cosmic Reader
//!
//! Contains all user interface components including:
//! - Header toolbar and its sub-widgets (page selector, zoom control)
//! - Overflow action menu
//! - Find bar
//! - Recent documents view
//! - Main window layout

mod action_menu;
mod find_bar;
mod main_window;
pub mod page_selector;
mod recent_view;
pub mod toolbar;
pub mod zoom_control;

pub use main_window::{view, MainWindowState};
pub use toolbar::{HeaderBar, Toolbar, ToolbarBuilder};
