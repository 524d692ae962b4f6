//! Document view model
//!
//! Shared model the page selector and zoom control bind to. Holds the
//! loaded document's page count, the current page and the zoom scale.

use crate::config::ZoomConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the page is sized in the document area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SizingMode {
    /// Whole page fits in the view
    FitPage,
    /// Page width matches the view width
    FitWidth,
    /// Explicit scale chosen through the zoom control
    Free,
    /// Fit width for narrow pages, fit page otherwise
    #[default]
    Automatic,
}

impl SizingMode {
    pub const ALL: [SizingMode; 4] = [
        SizingMode::Automatic,
        SizingMode::FitPage,
        SizingMode::FitWidth,
        SizingMode::Free,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SizingMode::FitPage => "Fit Page",
            SizingMode::FitWidth => "Fit Width",
            SizingMode::Free => "Custom",
            SizingMode::Automatic => "Automatic",
        }
    }
}

/// Metadata of a loaded document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub path: PathBuf,
    pub title: Option<String>,
    pub n_pages: usize,
    pub supports_find: bool,
}

impl DocumentInfo {
    /// Title if the document declares one, otherwise the file name
    pub fn display_name(&self) -> String {
        if let Some(title) = self.title.as_ref().filter(|t| !t.trim().is_empty()) {
            return title.clone();
        }
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }
}

/// View model of the document shown in the window
#[derive(Debug, Clone)]
pub struct DocumentModel {
    document: Option<DocumentInfo>,
    page: usize,
    scale: f32,
    sizing_mode: SizingMode,
    min_scale: f32,
    max_scale: f32,
    zoom_step: f32,
}

impl Default for DocumentModel {
    fn default() -> Self {
        Self::new(&ZoomConfig::default())
    }
}

impl DocumentModel {
    /// Create an empty model with zoom limits from config
    pub fn new(zoom: &ZoomConfig) -> Self {
        Self {
            document: None,
            page: 0,
            scale: 1.0,
            sizing_mode: zoom.default_sizing_mode,
            min_scale: zoom.min_scale,
            max_scale: zoom.max_scale,
            zoom_step: zoom.step,
        }
    }

    /// Replace the current document
    pub fn load(&mut self, info: DocumentInfo) {
        log::info!(
            "Document loaded: {} ({} pages)",
            info.path.display(),
            info.n_pages
        );
        self.document = Some(info);
        self.page = 0;
        self.scale = 1.0;
    }

    /// Drop the current document
    pub fn close(&mut self) {
        self.document = None;
        self.page = 0;
    }

    pub fn document(&self) -> Option<&DocumentInfo> {
        self.document.as_ref()
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Number of pages, 0 when nothing is loaded
    pub fn n_pages(&self) -> usize {
        self.document.as_ref().map(|d| d.n_pages).unwrap_or(0)
    }

    /// Whether the loaded document can be searched
    pub fn supports_find(&self) -> bool {
        self.document.as_ref().is_some_and(|d| d.supports_find)
    }

    /// Current page (0-based)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Jump to a page. Out-of-range pages are rejected.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page >= self.n_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    pub fn first_page(&mut self) -> bool {
        self.set_page(0)
    }

    pub fn last_page(&mut self) -> bool {
        match self.n_pages().checked_sub(1) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set an explicit scale, clamped to the configured limits
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
        self.sizing_mode = SizingMode::Free;
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale / self.zoom_step);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < self.max_scale
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > self.min_scale
    }

    pub fn reset_zoom(&mut self) {
        self.set_scale(1.0);
    }

    pub fn sizing_mode(&self) -> SizingMode {
        self.sizing_mode
    }

    pub fn set_sizing_mode(&mut self, mode: SizingMode) {
        self.sizing_mode = mode;
    }

    /// 1-based page position, e.g. "3 of 10"
    pub fn page_label(&self) -> String {
        if !self.has_document() {
            return String::new();
        }
        format!("{} of {}", self.page + 1, self.n_pages())
    }

    /// Scale as a percentage, e.g. "120%"
    pub fn scale_label(&self) -> String {
        format!("{:.0}%", self.scale * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(n_pages: usize) -> DocumentInfo {
        DocumentInfo {
            path: PathBuf::from("/docs/manual.pdf"),
            title: None,
            n_pages,
            supports_find: true,
        }
    }

    #[test]
    fn test_empty_model() {
        let model = DocumentModel::default();
        assert!(!model.has_document());
        assert_eq!(model.n_pages(), 0);
        assert!(!model.supports_find());
        assert_eq!(model.page_label(), "");
    }

    #[test]
    fn test_page_navigation_clamps() {
        let mut model = DocumentModel::default();
        model.load(info(3));

        assert!(!model.previous_page());
        assert!(model.next_page());
        assert!(model.next_page());
        assert!(!model.next_page());
        assert_eq!(model.page(), 2);
        assert_eq!(model.page_label(), "3 of 3");

        assert!(!model.set_page(3));
        assert!(model.first_page());
        assert_eq!(model.page(), 0);
        assert!(model.last_page());
        assert_eq!(model.page(), 2);
    }

    #[test]
    fn test_load_resets_page_and_scale() {
        let mut model = DocumentModel::default();
        model.load(info(10));
        model.set_page(5);
        model.zoom_in();

        model.load(info(4));
        assert_eq!(model.page(), 0);
        assert_eq!(model.scale(), 1.0);
    }

    #[test]
    fn test_zoom_clamps_and_switches_to_free() {
        let zoom = ZoomConfig::default();
        let mut model = DocumentModel::new(&zoom);
        assert_eq!(model.sizing_mode(), zoom.default_sizing_mode);

        model.zoom_in();
        assert_eq!(model.sizing_mode(), SizingMode::Free);
        assert_eq!(model.scale_label(), "120%");

        for _ in 0..100 {
            model.zoom_in();
        }
        assert_eq!(model.scale(), zoom.max_scale);
        assert!(!model.can_zoom_in());

        for _ in 0..100 {
            model.zoom_out();
        }
        assert_eq!(model.scale(), zoom.min_scale);
        assert!(!model.can_zoom_out());
    }

    #[test]
    fn test_display_name_prefers_title() {
        let mut doc = info(1);
        assert_eq!(doc.display_name(), "manual.pdf");
        doc.title = Some("User Manual".to_string());
        assert_eq!(doc.display_name(), "User Manual");
        doc.title = Some("  ".to_string());
        assert_eq!(doc.display_name(), "manual.pdf");
    }
}
