//! Header toolbar
//!
//! Composes the sidebar toggle, open button, page selector, annotations
//! toggle, find button, zoom control and overflow menu button into the
//! header bar. Which children are drawn is decided by the toolbar's
//! [`ToolbarModePolicy`].

use crate::error::ToolbarError;
use crate::fl;
use crate::message::{Message, ToolbarMessage};
use crate::state::{ToolbarChild, ToolbarModePolicy, WindowState};
use crate::ui::{page_selector, zoom_control};
use cosmic::iced::window;
use cosmic::widget::{button, icon, text, tooltip, Row};
use cosmic::Element;

/// Icon names used by the toolbar
pub mod icons {
    pub const SIDEBAR: &str = "sidebar-show-symbolic";
    pub const OPEN: &str = "document-open-symbolic";
    pub const ANNOTATIONS: &str = "document-edit-symbolic";
    pub const MENU: &str = "open-menu-symbolic";
}

/// Title area of the header bar, customizable by the owning window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBar {
    pub title: String,
    pub subtitle: Option<String>,
}

impl HeaderBar {
    /// Title and subtitle joined for the window title
    pub fn window_title(&self) -> String {
        match &self.subtitle {
            Some(subtitle) if !subtitle.is_empty() => format!("{} — {}", self.title, subtitle),
            _ => self.title.clone(),
        }
    }
}

/// Builder for [`Toolbar`]
#[derive(Debug, Default)]
pub struct ToolbarBuilder {
    window: Option<window::Id>,
    header_bar: HeaderBar,
}

impl ToolbarBuilder {
    /// Owning window. Required.
    pub fn window(mut self, window: impl Into<Option<window::Id>>) -> Self {
        self.window = window.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.header_bar.title = title.into();
        self
    }

    pub fn build(self) -> Result<Toolbar, ToolbarError> {
        let window = self.window.ok_or(ToolbarError::MissingWindow)?;
        Ok(Toolbar {
            window,
            policy: ToolbarModePolicy::new(),
            header_bar: self.header_bar,
        })
    }
}

/// Document viewer toolbar bound to its owning window
#[derive(Debug, Clone)]
pub struct Toolbar {
    window: window::Id,
    policy: ToolbarModePolicy,
    header_bar: HeaderBar,
}

impl Toolbar {
    pub fn builder() -> ToolbarBuilder {
        ToolbarBuilder::default()
    }

    /// The owning window
    pub fn window(&self) -> window::Id {
        self.window
    }

    pub fn policy(&self) -> &ToolbarModePolicy {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut ToolbarModePolicy {
        &mut self.policy
    }

    pub fn header_bar(&self) -> &HeaderBar {
        &self.header_bar
    }

    pub fn header_bar_mut(&mut self) -> &mut HeaderBar {
        &mut self.header_bar
    }

    /// Set the sidebar toggle state without emitting a message
    pub fn set_sidebar_active(&mut self, active: bool) {
        self.policy.set_sidebar_active(active);
    }

    /// Derive mode, compact layout, find availability, sidebar state and
    /// the header title from the window, returning the window title.
    pub fn sync(
        &mut self,
        window: &WindowState,
        compact_threshold: f32,
        fallback_title: &str,
    ) -> String {
        self.policy.set_mode(window.toolbar_mode());
        self.policy.set_compact(window.is_compact(compact_threshold));
        self.policy.set_find_available(window.document.supports_find());
        self.set_sidebar_active(window.sidebar_visible);

        self.header_bar.title = window
            .document
            .document()
            .map(|doc| doc.display_name())
            .unwrap_or_else(|| fallback_title.to_string());
        self.header_bar.subtitle = Some(window.document.page_label()).filter(|s| !s.is_empty());
        self.header_bar.window_title()
    }

    /// Whether the overflow menu is open and its button is shown
    pub fn overflow_menu_open(&self) -> bool {
        self.policy.overflow_menu_active() && self.policy.is_visible(ToolbarChild::ActionMenu)
    }

    /// Page selector bound to the window's document
    pub fn page_selector<'a>(&self, window: &'a WindowState) -> Element<'a, Message> {
        page_selector::view(&window.document, window.page_entry.as_deref())
    }

    /// Children packed at the start of the header bar
    pub fn header_start<'a>(&'a self, window: &'a WindowState) -> Vec<Element<'a, Message>> {
        let visibility = self.policy.visibility();
        let mut items = Vec::new();

        if visibility.sidebar_toggle {
            items.push(toggle_button(
                icons::SIDEBAR,
                fl!("Toggle sidebar"),
                self.policy.sidebar_active(),
                ToolbarMessage::ToggleSidebar,
            ));
        }

        if visibility.open_button {
            items.push(
                button::text(fl!("Open…"))
                    .leading_icon(icon::from_name(icons::OPEN))
                    .on_press(ToolbarMessage::Open.into())
                    .class(cosmic::theme::Button::Suggested)
                    .into(),
            );
        }

        if visibility.page_annotations_group {
            let group = Row::new()
                .push(self.page_selector(window))
                .push(toggle_button(
                    icons::ANNOTATIONS,
                    fl!("Annotations"),
                    self.policy.annotations_active(),
                    ToolbarMessage::ToggleAnnotations,
                ))
                .spacing(4)
                .align_y(cosmic::iced::Alignment::Center);
            items.push(group.into());
        }

        items
    }

    /// Children packed at the end of the header bar
    pub fn header_end<'a>(&'a self, window: &'a WindowState) -> Vec<Element<'a, Message>> {
        let visibility = self.policy.visibility();
        let mut items = Vec::new();

        if visibility.find_button {
            let find = self.policy.find_presentation();
            let find_button = button::icon(icon::from_name(find.icon))
                .on_press_maybe(find.sensitive.then_some(ToolbarMessage::ToggleFind.into()))
                .class(if window.find_bar_open {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Icon
                });
            items.push(
                tooltip(find_button, text(find.description), tooltip::Position::Bottom).into(),
            );
        }

        if visibility.zoom_control {
            items.push(zoom_control::view(&window.document));
        }

        if visibility.action_menu {
            items.push(toggle_button(
                icons::MENU,
                fl!("Main menu"),
                self.policy.overflow_menu_active(),
                ToolbarMessage::ToggleOverflowMenu,
            ));
        }

        items
    }
}

/// Icon button highlighted while its toggle is active
fn toggle_button<'a>(
    icon_name: &'static str,
    description: &'static str,
    active: bool,
    message: ToolbarMessage,
) -> Element<'a, Message> {
    let button = button::icon(icon::from_name(icon_name))
        .on_press(message.into())
        .class(if active {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Icon
        });
    tooltip(button, text(description), tooltip::Position::Bottom).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::{DocumentInfo, ToolbarMode, FIND_UNSUPPORTED_ICON};
    use std::path::PathBuf;

    fn toolbar() -> Toolbar {
        Toolbar::builder()
            .window(window::Id::unique())
            .title("Cosmic Reader")
            .build()
            .unwrap()
    }

    fn window_with(supports_find: bool) -> WindowState {
        let mut window = WindowState::new(&Config::default());
        window.resize(1000.0, 720.0);
        window.document.load(DocumentInfo {
            path: PathBuf::from("/docs/manual.pdf"),
            title: Some("Field Manual".to_string()),
            n_pages: 9,
            supports_find,
        });
        window
    }

    #[test]
    fn test_build_requires_window() {
        let result = Toolbar::builder().window(None).build();
        assert_eq!(result.err(), Some(ToolbarError::MissingWindow));
    }

    #[test]
    fn test_build_binds_window() {
        let id = window::Id::unique();
        let toolbar = Toolbar::builder()
            .window(id)
            .title("Cosmic Reader")
            .build()
            .unwrap();
        assert_eq!(toolbar.window(), id);
        assert_eq!(toolbar.policy().mode(), ToolbarMode::Normal);
        assert_eq!(toolbar.header_bar().title, "Cosmic Reader");
    }

    #[test]
    fn test_header_bar_window_title() {
        let mut header = HeaderBar {
            title: "manual.pdf".to_string(),
            subtitle: None,
        };
        assert_eq!(header.window_title(), "manual.pdf");
        header.subtitle = Some("2 of 9".to_string());
        assert_eq!(header.window_title(), "manual.pdf — 2 of 9");
    }

    #[test]
    fn test_sidebar_setter_forwards_to_policy() {
        let mut toolbar = toolbar();
        toolbar.set_sidebar_active(true);
        assert!(toolbar.policy().sidebar_active());
    }

    #[test]
    fn test_sync_without_document_shows_recent_view() {
        let mut toolbar = toolbar();
        let window = WindowState::new(&Config::default());

        let title = toolbar.sync(&window, 720.0, "Cosmic Reader");
        assert_eq!(title, "Cosmic Reader");
        assert_eq!(toolbar.policy().mode(), ToolbarMode::RecentView);
        assert!(toolbar.policy().is_visible(ToolbarChild::OpenButton));
        assert!(!toolbar.policy().is_visible(ToolbarChild::FindButton));
    }

    #[test]
    fn test_sync_loaded_document_is_normal() {
        let mut toolbar = toolbar();
        let mut window = window_with(true);
        window.sidebar_visible = true;

        let title = toolbar.sync(&window, 720.0, "Cosmic Reader");
        assert_eq!(title, "Field Manual — 1 of 9");
        assert_eq!(toolbar.policy().mode(), ToolbarMode::Normal);
        assert!(!toolbar.policy().compact());
        assert!(toolbar.policy().is_visible(ToolbarChild::ZoomControl));
        assert!(toolbar.policy().find_presentation().sensitive);
        assert!(toolbar.policy().sidebar_active());

        window.fullscreen = true;
        toolbar.sync(&window, 720.0, "Cosmic Reader");
        assert_eq!(toolbar.policy().mode(), ToolbarMode::Fullscreen);
    }

    #[test]
    fn test_sync_narrow_window_is_compact() {
        let mut toolbar = toolbar();
        let mut window = window_with(true);
        toolbar.policy_mut().set_annotations_active(true);

        window.resize(480.0, 720.0);
        toolbar.sync(&window, 720.0, "Cosmic Reader");
        assert!(toolbar.policy().compact());
        assert!(!toolbar.policy().is_visible(ToolbarChild::ZoomControl));
        assert!(!toolbar.policy().is_visible(ToolbarChild::PageAnnotationsGroup));
        assert!(!toolbar.policy().annotations_active());

        window.resize(900.0, 720.0);
        toolbar.sync(&window, 720.0, "Cosmic Reader");
        assert!(toolbar.policy().is_visible(ToolbarChild::ZoomControl));
        assert!(!toolbar.policy().annotations_active());
    }

    #[test]
    fn test_sync_without_text_layer_disables_find() {
        let mut toolbar = toolbar();
        let window = window_with(false);

        toolbar.sync(&window, 720.0, "Cosmic Reader");
        let find = toolbar.policy().find_presentation();
        assert_eq!(find.icon, FIND_UNSUPPORTED_ICON);
        assert!(!find.sensitive);
        assert!(toolbar.policy().is_visible(ToolbarChild::FindButton));
    }

    #[test]
    fn test_overflow_menu_hidden_in_recent_view() {
        let mut toolbar = toolbar();
        toolbar.sync(&window_with(true), 720.0, "Cosmic Reader");
        toolbar.policy_mut().toggle_overflow_menu();
        assert!(toolbar.overflow_menu_open());

        toolbar.sync(&WindowState::new(&Config::default()), 720.0, "Cosmic Reader");
        assert!(!toolbar.overflow_menu_open());
        assert!(toolbar.policy().overflow_menu_active());
    }
}
