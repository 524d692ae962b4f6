//! Window state
//!
//! State of the main viewer window: the document model, fullscreen and
//! sidebar flags, the find bar and the current width.

use super::document_model::DocumentModel;
use super::toolbar_state::ToolbarMode;
use crate::config::Config;

/// Status line severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// State of the owning window
#[derive(Debug, Clone)]
pub struct WindowState {
    /// Document shown in the window
    pub document: DocumentModel,

    /// Whether the window is fullscreen
    pub fullscreen: bool,

    /// Whether the page sidebar is shown
    pub sidebar_visible: bool,

    /// Whether the find bar is revealed
    pub find_bar_open: bool,

    /// Current find query
    pub find_query: String,

    /// Text in the page selector entry while it is being edited
    pub page_entry: Option<String>,

    /// Current window width in logical pixels
    pub width: f32,

    /// Status message shown under the document area
    pub status: Option<(String, StatusLevel)>,
}

impl WindowState {
    /// Create window state from the user configuration
    pub fn new(config: &Config) -> Self {
        Self {
            document: DocumentModel::new(&config.zoom),
            fullscreen: false,
            sidebar_visible: config.ui.sidebar_visible,
            find_bar_open: false,
            find_query: String::new(),
            page_entry: None,
            width: config.ui.window_width as f32,
            status: None,
        }
    }

    /// Record a new width and report whether the layout is compact
    pub fn resize(&mut self, width: f32, compact_threshold: f32) -> bool {
        self.width = width;
        self.is_compact(compact_threshold)
    }

    pub fn is_compact(&self, compact_threshold: f32) -> bool {
        self.width < compact_threshold
    }

    /// Toolbar mode implied by the window
    pub fn toolbar_mode(&self) -> ToolbarMode {
        if !self.document.has_document() {
            ToolbarMode::RecentView
        } else if self.fullscreen {
            ToolbarMode::Fullscreen
        } else {
            ToolbarMode::Normal
        }
    }

    /// Enter or leave fullscreen, returning whether the flag changed.
    ///
    /// Entering requires a loaded document. Leaving is always allowed.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        if self.fullscreen == fullscreen || (fullscreen && !self.document.has_document()) {
            return false;
        }
        self.fullscreen = fullscreen;
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Reveal or hide the find bar. Hiding clears the query.
    pub fn set_find_bar_open(&mut self, open: bool) {
        self.find_bar_open = open;
        if !open {
            self.find_query.clear();
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status = Some((message.into(), level));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DocumentInfo;
    use std::path::PathBuf;

    fn loaded_window() -> WindowState {
        let mut window = WindowState::new(&Config::default());
        window.document.load(DocumentInfo {
            path: PathBuf::from("/docs/a.pdf"),
            title: None,
            n_pages: 2,
            supports_find: false,
        });
        window
    }

    #[test]
    fn test_mode_without_document_is_recent_view() {
        let mut window = WindowState::new(&Config::default());
        window.fullscreen = true;
        assert_eq!(window.toolbar_mode(), ToolbarMode::RecentView);
    }

    #[test]
    fn test_mode_follows_fullscreen() {
        let mut window = loaded_window();
        assert_eq!(window.toolbar_mode(), ToolbarMode::Normal);
        window.fullscreen = true;
        assert_eq!(window.toolbar_mode(), ToolbarMode::Fullscreen);
    }

    #[test]
    fn test_resize_compact_threshold() {
        let mut window = loaded_window();
        assert!(window.resize(500.0, 720.0));
        assert!(!window.resize(720.0, 720.0));
        assert!(!window.resize(1200.0, 720.0));
    }

    #[test]
    fn test_fullscreen_requires_document() {
        let mut window = WindowState::new(&Config::default());
        assert!(!window.set_fullscreen(true));
        assert!(!window.fullscreen);

        let mut window = loaded_window();
        assert!(window.set_fullscreen(true));
        assert!(!window.set_fullscreen(true));
        assert_eq!(window.toolbar_mode(), ToolbarMode::Fullscreen);
    }

    #[test]
    fn test_leave_fullscreen_after_close() {
        let mut window = loaded_window();
        window.set_fullscreen(true);
        window.document.close();

        assert!(window.set_fullscreen(false));
        assert!(!window.fullscreen);

        window.document.load(DocumentInfo {
            path: PathBuf::from("/docs/b.pdf"),
            title: None,
            n_pages: 1,
            supports_find: true,
        });
        assert_eq!(window.toolbar_mode(), ToolbarMode::Normal);
    }

    #[test]
    fn test_closing_find_bar_clears_query() {
        let mut window = loaded_window();
        window.set_find_bar_open(true);
        window.find_query.push_str("kernel");
        window.set_find_bar_open(false);
        assert!(window.find_query.is_empty());
    }
}
