//! Actions and keyboard shortcut handling
//!
//! Defines the viewer actions reachable from the overflow menu and the
//! keyboard, and the subscription that maps key presses to them.

use cosmic::iced::keyboard::{self, key::Named, Key, Modifiers};
use cosmic::iced::{event, Event, Subscription};
use cosmic::iced_futures::event::listen_raw;

use crate::fl;
use crate::message::{DocumentMessage, Message, SystemMessage, ToolbarMessage, ViewMessage};

/// Actions that can be triggered from the overflow menu or keyboard shortcuts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    // Document actions
    OpenFile,
    Reload,
    CloseFile,
    Quit,

    // Navigation
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,

    // View actions
    ToggleSidebar,
    Find,
    ToggleOverflowMenu,
    ToggleFullscreen,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Escape,

    // Help
    About,
}

impl Action {
    /// Convert action to application message
    pub fn to_message(self) -> Message {
        match self {
            Action::OpenFile => Message::Document(DocumentMessage::OpenDialog),
            Action::Reload => Message::Document(DocumentMessage::Reload),
            Action::CloseFile => Message::Document(DocumentMessage::Close),
            Action::Quit => Message::System(SystemMessage::Quit),

            Action::NextPage => Message::Document(DocumentMessage::NextPage),
            Action::PreviousPage => Message::Document(DocumentMessage::PreviousPage),
            Action::FirstPage => Message::Document(DocumentMessage::FirstPage),
            Action::LastPage => Message::Document(DocumentMessage::LastPage),

            Action::ToggleSidebar => Message::View(ViewMessage::ToggleSidebar),
            Action::Find => Message::View(ViewMessage::ToggleFind),
            Action::ToggleOverflowMenu => Message::Toolbar(ToolbarMessage::ToggleOverflowMenu),
            Action::ToggleFullscreen => Message::View(ViewMessage::ToggleFullscreen),
            Action::ZoomIn => Message::View(ViewMessage::ZoomIn),
            Action::ZoomOut => Message::View(ViewMessage::ZoomOut),
            Action::ZoomReset => Message::View(ViewMessage::ZoomReset),
            Action::Escape => Message::View(ViewMessage::Escape),

            Action::About => Message::System(SystemMessage::About),
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Action::OpenFile => fl!("Open…"),
            Action::Reload => fl!("Reload"),
            Action::CloseFile => fl!("Close Document"),
            Action::Quit => fl!("Quit"),
            Action::NextPage => fl!("Next Page"),
            Action::PreviousPage => fl!("Previous Page"),
            Action::FirstPage => fl!("First Page"),
            Action::LastPage => fl!("Last Page"),
            Action::ToggleSidebar => fl!("Sidebar"),
            Action::Find => fl!("Find"),
            Action::ToggleOverflowMenu => fl!("Menu"),
            Action::ToggleFullscreen => fl!("Fullscreen"),
            Action::ZoomIn => fl!("Zoom In"),
            Action::ZoomOut => fl!("Zoom Out"),
            Action::ZoomReset => fl!("Original Size"),
            Action::Escape => fl!("Leave"),
            Action::About => fl!("About Cosmic Reader"),
        }
    }

    /// Shortcut hint shown next to menu entries
    pub fn shortcut(self) -> Option<&'static str> {
        match self {
            Action::OpenFile => Some("Ctrl+O"),
            Action::Reload => Some("Ctrl+R"),
            Action::CloseFile => Some("Ctrl+W"),
            Action::Quit => Some("Ctrl+Q"),
            Action::ToggleFullscreen => Some("F11"),
            Action::ZoomReset => Some("Ctrl+0"),
            _ => None,
        }
    }
}

/// Entries of the overflow action menu; `None` is a divider
pub fn overflow_actions() -> Vec<Option<Action>> {
    vec![
        Some(Action::OpenFile),
        Some(Action::Reload),
        Some(Action::CloseFile),
        None,
        Some(Action::ToggleFullscreen),
        Some(Action::ZoomReset),
        None,
        Some(Action::About),
        Some(Action::Quit),
    ]
}

/// Map a key press to an action
pub fn action_for_key(key: &Key, modifiers: Modifiers) -> Option<Action> {
    if let Key::Character(c) = key {
        if !modifiers.control() || modifiers.alt() || modifiers.shift() {
            return None;
        }
        return match c.to_lowercase().as_str() {
            "o" => Some(Action::OpenFile),
            "r" => Some(Action::Reload),
            "w" => Some(Action::CloseFile),
            "q" => Some(Action::Quit),
            "f" => Some(Action::Find),
            "=" | "+" => Some(Action::ZoomIn),
            "-" => Some(Action::ZoomOut),
            "0" => Some(Action::ZoomReset),
            _ => None,
        };
    }

    if modifiers.control() || modifiers.alt() {
        return None;
    }

    match key {
        Key::Named(Named::F9) => Some(Action::ToggleSidebar),
        Key::Named(Named::F10) => Some(Action::ToggleOverflowMenu),
        Key::Named(Named::F11) => Some(Action::ToggleFullscreen),
        Key::Named(Named::PageDown) => Some(Action::NextPage),
        Key::Named(Named::PageUp) => Some(Action::PreviousPage),
        Key::Named(Named::Home) => Some(Action::FirstPage),
        Key::Named(Named::End) => Some(Action::LastPage),
        Key::Named(Named::Escape) => Some(Action::Escape),
        _ => None,
    }
}

/// Keyboard shortcuts subscription
///
/// Listens for keyboard events that no widget handled and maps them to actions.
pub fn keyboard_shortcuts_subscription() -> Subscription<Message> {
    listen_raw(|event, status, _| {
        if event::Status::Ignored != status {
            return None;
        }

        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                action_for_key(&key, modifiers).map(Action::to_message)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_shortcuts() {
        let ctrl = Modifiers::CTRL;
        assert_eq!(
            action_for_key(&Key::Character("o".into()), ctrl),
            Some(Action::OpenFile)
        );
        assert_eq!(
            action_for_key(&Key::Character("F".into()), ctrl),
            Some(Action::Find)
        );
        assert_eq!(action_for_key(&Key::Character("o".into()), Modifiers::empty()), None);
    }

    #[test]
    fn test_named_shortcuts() {
        let none = Modifiers::empty();
        assert_eq!(
            action_for_key(&Key::Named(Named::F10), none),
            Some(Action::ToggleOverflowMenu)
        );
        assert_eq!(
            action_for_key(&Key::Named(Named::PageDown), none),
            Some(Action::NextPage)
        );
        assert_eq!(action_for_key(&Key::Named(Named::F11), Modifiers::CTRL), None);
    }

    #[test]
    fn test_overflow_menu_actions_route_to_messages() {
        let actions: Vec<_> = overflow_actions().into_iter().flatten().collect();
        assert!(actions.contains(&Action::OpenFile));
        assert!(matches!(
            Action::ToggleFullscreen.to_message(),
            Message::View(ViewMessage::ToggleFullscreen)
        ));
    }
}
