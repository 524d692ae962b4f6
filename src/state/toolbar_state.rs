//! Toolbar layout state
//!
//! Translates the toolbar's display mode and the compact (narrow window)
//! flag into show/hide decisions for the header bar children, and owns the
//! small amount of toggle state the toolbar presents.

use serde::{Deserialize, Serialize};

/// Coarse layout state of the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolbarMode {
    /// Regular windowed document view
    #[default]
    Normal,
    /// Document view with the window in fullscreen
    Fullscreen,
    /// No document shown; the recent documents list is displayed
    RecentView,
}

impl ToolbarMode {
    /// All modes, in declaration order
    pub const ALL: [ToolbarMode; 3] = [
        ToolbarMode::Normal,
        ToolbarMode::Fullscreen,
        ToolbarMode::RecentView,
    ];

    /// Whether this mode shows a document
    pub fn shows_document(self) -> bool {
        !matches!(self, ToolbarMode::RecentView)
    }
}

/// Logical children of the toolbar whose visibility is mode driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarChild {
    SidebarToggle,
    OpenButton,
    ActionMenu,
    ZoomControl,
    FindButton,
    /// Page selector and annotations toggle
    PageAnnotationsGroup,
}

impl ToolbarChild {
    /// All children, in header order
    pub const ALL: [ToolbarChild; 6] = [
        ToolbarChild::SidebarToggle,
        ToolbarChild::OpenButton,
        ToolbarChild::ActionMenu,
        ToolbarChild::ZoomControl,
        ToolbarChild::FindButton,
        ToolbarChild::PageAnnotationsGroup,
    ];

    /// Stable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            ToolbarChild::SidebarToggle => "sidebar_toggle",
            ToolbarChild::OpenButton => "open_button",
            ToolbarChild::ActionMenu => "action_menu",
            ToolbarChild::ZoomControl => "zoom_control",
            ToolbarChild::FindButton => "find_button",
            ToolbarChild::PageAnnotationsGroup => "page_annotations_group",
        }
    }

    /// Children hidden under the compact layout regardless of mode
    fn suppressed_when_compact(self) -> bool {
        matches!(
            self,
            ToolbarChild::ZoomControl | ToolbarChild::PageAnnotationsGroup
        )
    }

    /// Visibility implied by the mode alone
    fn shown_in(self, mode: ToolbarMode) -> bool {
        match self {
            ToolbarChild::OpenButton => mode == ToolbarMode::RecentView,
            _ => mode.shows_document(),
        }
    }
}

/// Shown/hidden state of every toolbar child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChildVisibility {
    pub sidebar_toggle: bool,
    pub open_button: bool,
    pub action_menu: bool,
    pub zoom_control: bool,
    pub find_button: bool,
    pub page_annotations_group: bool,
}

impl ChildVisibility {
    /// Derive visibility from mode and compact flag.
    ///
    /// Compact suppression takes precedence over the mode for the zoom
    /// control and the page annotations group.
    pub fn derive(mode: ToolbarMode, compact: bool) -> Self {
        let shown = |child: ToolbarChild| {
            child.shown_in(mode) && !(compact && child.suppressed_when_compact())
        };

        Self {
            sidebar_toggle: shown(ToolbarChild::SidebarToggle),
            open_button: shown(ToolbarChild::OpenButton),
            action_menu: shown(ToolbarChild::ActionMenu),
            zoom_control: shown(ToolbarChild::ZoomControl),
            find_button: shown(ToolbarChild::FindButton),
            page_annotations_group: shown(ToolbarChild::PageAnnotationsGroup),
        }
    }

    /// Visibility of a single child
    pub fn get(&self, child: ToolbarChild) -> bool {
        match child {
            ToolbarChild::SidebarToggle => self.sidebar_toggle,
            ToolbarChild::OpenButton => self.open_button,
            ToolbarChild::ActionMenu => self.action_menu,
            ToolbarChild::ZoomControl => self.zoom_control,
            ToolbarChild::FindButton => self.find_button,
            ToolbarChild::PageAnnotationsGroup => self.page_annotations_group,
        }
    }
}

/// Icon shown by the find button when search is supported
pub const FIND_ICON: &str = "edit-find-symbolic";

/// Icon shown by the find button when search is not supported
pub const FIND_UNSUPPORTED_ICON: &str = "find-unsupported-symbolic";

/// Description of the find button when search is supported
pub const FIND_DESCRIPTION: &str = "Find a word or phrase in the document";

/// Description of the find button when search is not supported
pub const FIND_UNSUPPORTED_DESCRIPTION: &str = "Search not available for this document";

/// Presentation of the find button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindPresentation {
    pub icon: &'static str,
    pub description: &'static str,
    pub sensitive: bool,
}

impl FindPresentation {
    /// Presentation for the given availability
    pub fn for_availability(available: bool) -> Self {
        if available {
            Self {
                icon: FIND_ICON,
                description: FIND_DESCRIPTION,
                sensitive: true,
            }
        } else {
            Self {
                icon: FIND_UNSUPPORTED_ICON,
                description: FIND_UNSUPPORTED_DESCRIPTION,
                sensitive: false,
            }
        }
    }
}

impl Default for FindPresentation {
    fn default() -> Self {
        Self::for_availability(true)
    }
}

/// Mode-driven visibility policy for the toolbar
#[derive(Debug, Clone)]
pub struct ToolbarModePolicy {
    mode: ToolbarMode,
    compact: bool,
    visibility: ChildVisibility,
    sidebar_active: bool,
    annotations_active: bool,
    overflow_menu_active: bool,
    find: FindPresentation,
}

impl Default for ToolbarModePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolbarModePolicy {
    /// Create a policy in `Normal` mode with the regular layout
    pub fn new() -> Self {
        let mode = ToolbarMode::Normal;
        Self {
            mode,
            compact: false,
            visibility: ChildVisibility::derive(mode, false),
            sidebar_active: false,
            annotations_active: false,
            overflow_menu_active: false,
            find: FindPresentation::default(),
        }
    }

    /// Current mode
    pub fn mode(&self) -> ToolbarMode {
        self.mode
    }

    /// Switch mode and re-apply the full visibility table
    pub fn set_mode(&mut self, mode: ToolbarMode) {
        if mode != self.mode {
            log::debug!("toolbar mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.apply();
    }

    /// Whether the compact layout is active
    pub fn compact(&self) -> bool {
        self.compact
    }

    /// Enter or leave the compact layout.
    ///
    /// Entering deactivates the annotations toggle. Leaving does not
    /// reactivate it.
    pub fn set_compact(&mut self, compact: bool) {
        if compact && self.annotations_active {
            log::debug!("compact layout: deactivating annotations toggle");
            self.annotations_active = false;
        }
        self.compact = compact;
        self.apply();
    }

    /// Current visibility snapshot
    pub fn visibility(&self) -> ChildVisibility {
        self.visibility
    }

    /// Whether a single child is shown
    pub fn is_visible(&self, child: ToolbarChild) -> bool {
        self.visibility.get(child)
    }

    /// Flip the overflow menu activation, returning the new state
    pub fn toggle_overflow_menu(&mut self) -> bool {
        self.overflow_menu_active = !self.overflow_menu_active;
        self.overflow_menu_active
    }

    /// Close the overflow menu
    pub fn close_overflow_menu(&mut self) {
        self.overflow_menu_active = false;
    }

    pub fn overflow_menu_active(&self) -> bool {
        self.overflow_menu_active
    }

    /// Update the find button presentation from the document's search support
    pub fn set_find_available(&mut self, available: bool) {
        self.find = FindPresentation::for_availability(available);
    }

    pub fn find_presentation(&self) -> FindPresentation {
        self.find
    }

    pub fn set_sidebar_active(&mut self, active: bool) {
        self.sidebar_active = active;
    }

    pub fn sidebar_active(&self) -> bool {
        self.sidebar_active
    }

    pub fn set_annotations_active(&mut self, active: bool) {
        self.annotations_active = active;
    }

    /// Flip the annotations toggle, returning the new state
    pub fn toggle_annotations(&mut self) -> bool {
        self.set_annotations_active(!self.annotations_active);
        self.annotations_active
    }

    pub fn annotations_active(&self) -> bool {
        self.annotations_active
    }

    fn apply(&mut self) {
        self.visibility = ChildVisibility::derive(self.mode, self.compact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(child: ToolbarChild, mode: ToolbarMode, compact: bool) -> bool {
        let by_mode = match (child, mode) {
            (ToolbarChild::OpenButton, ToolbarMode::RecentView) => true,
            (ToolbarChild::OpenButton, _) => false,
            (_, ToolbarMode::RecentView) => false,
            _ => true,
        };
        let starred = matches!(
            child,
            ToolbarChild::ZoomControl | ToolbarChild::PageAnnotationsGroup
        );
        by_mode && !(starred && compact)
    }

    #[test]
    fn test_set_mode_then_get() {
        let mut policy = ToolbarModePolicy::new();
        for mode in ToolbarMode::ALL {
            policy.set_mode(mode);
            assert_eq!(policy.mode(), mode);
        }
    }

    #[test]
    fn test_visibility_table() {
        let mut policy = ToolbarModePolicy::new();
        for mode in ToolbarMode::ALL {
            for compact in [false, true] {
                policy.set_mode(mode);
                policy.set_compact(compact);
                for child in ToolbarChild::ALL {
                    assert_eq!(
                        policy.is_visible(child),
                        expected(child, mode, compact),
                        "{} in {:?} (compact: {})",
                        child.name(),
                        mode,
                        compact
                    );
                }
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let policy = ToolbarModePolicy::new();
        assert_eq!(policy.mode(), ToolbarMode::Normal);
        assert!(!policy.compact());
        assert!(!policy.is_visible(ToolbarChild::OpenButton));
        for child in ToolbarChild::ALL {
            if child != ToolbarChild::OpenButton {
                assert!(policy.is_visible(child), "{} hidden", child.name());
            }
        }
    }

    #[test]
    fn test_recent_view_round_trip() {
        let mut policy = ToolbarModePolicy::new();
        let initial = policy.visibility();

        policy.set_mode(ToolbarMode::RecentView);
        assert!(policy.is_visible(ToolbarChild::OpenButton));
        for child in ToolbarChild::ALL {
            if child != ToolbarChild::OpenButton {
                assert!(!policy.is_visible(child), "{} shown", child.name());
            }
        }

        policy.set_mode(ToolbarMode::Normal);
        assert_eq!(policy.visibility(), initial);
    }

    #[test]
    fn test_compact_deactivates_annotations_one_way() {
        let mut policy = ToolbarModePolicy::new();
        policy.set_annotations_active(true);
        assert!(policy.annotations_active());

        policy.set_compact(true);
        assert!(!policy.annotations_active());

        policy.set_compact(false);
        assert!(!policy.annotations_active());
    }

    #[test]
    fn test_annotations_toggle_while_compact() {
        let mut policy = ToolbarModePolicy::new();
        policy.set_compact(true);
        assert!(policy.toggle_annotations());

        policy.set_compact(false);
        assert!(policy.annotations_active());

        policy.set_compact(true);
        assert!(!policy.annotations_active());
    }

    #[test]
    fn test_compact_independent_of_mode() {
        let mut policy = ToolbarModePolicy::new();
        policy.set_compact(true);
        policy.set_mode(ToolbarMode::Fullscreen);
        assert!(policy.compact());
        assert!(!policy.is_visible(ToolbarChild::ZoomControl));
        assert!(policy.is_visible(ToolbarChild::FindButton));
    }

    #[test]
    fn test_toggle_overflow_menu_twice() {
        let mut policy = ToolbarModePolicy::new();
        let original = policy.overflow_menu_active();
        assert_eq!(policy.toggle_overflow_menu(), !original);
        assert_eq!(policy.toggle_overflow_menu(), original);
    }

    #[test]
    fn test_mode_changes_keep_overflow_menu_state() {
        let mut policy = ToolbarModePolicy::new();
        policy.toggle_overflow_menu();

        policy.set_mode(ToolbarMode::RecentView);
        assert!(policy.overflow_menu_active());
        policy.set_mode(ToolbarMode::Normal);
        assert!(policy.overflow_menu_active());

        policy.set_compact(true);
        policy.set_compact(false);
        assert!(policy.overflow_menu_active());

        policy.close_overflow_menu();
        assert!(!policy.overflow_menu_active());
    }

    #[test]
    fn test_find_presentation_swap() {
        let mut policy = ToolbarModePolicy::new();

        policy.set_find_available(false);
        let find = policy.find_presentation();
        assert_eq!(find.icon, FIND_UNSUPPORTED_ICON);
        assert_eq!(find.description, "Search not available for this document");
        assert!(!find.sensitive);

        policy.set_find_available(true);
        let find = policy.find_presentation();
        assert_eq!(find.icon, FIND_ICON);
        assert_eq!(find.description, "Find a word or phrase in the document");
        assert!(find.sensitive);
    }

    #[test]
    fn test_sidebar_setter() {
        let mut policy = ToolbarModePolicy::new();
        policy.set_sidebar_active(true);
        assert!(policy.sidebar_active());
        policy.set_mode(ToolbarMode::RecentView);
        assert!(policy.sidebar_active());
    }
}
