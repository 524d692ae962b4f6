//! State management module for Cosmic Reader
//!
//! This module contains all application state types organized by concern:
//! - `toolbar_state`: Toolbar mode and child visibility policy
//! - `document_model`: Shared document view model (pages, zoom)
//! - `window_state`: Main window state
//! - `recent_state`: Persistent recent documents list

mod document_model;
mod recent_state;
mod toolbar_state;
mod window_state;

pub use document_model::*;
pub use recent_state::*;
pub use toolbar_state::*;
pub use window_state::*;
