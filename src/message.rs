//! Application message types
//!
//! Defines all messages that can be sent to the application's update function.
//! Messages are organized by category for clear handling and routing.

use crate::state::{DocumentInfo, SizingMode};
use std::path::PathBuf;

/// Main application message enum
#[derive(Debug, Clone)]
pub enum Message {
    /// Toolbar interactions
    Toolbar(ToolbarMessage),

    /// Document loading and navigation
    Document(DocumentMessage),

    /// View operations
    View(ViewMessage),

    /// Recent documents
    Recent(RecentMessage),

    /// System/window events
    System(SystemMessage),

    /// No-op message (for subscriptions that don't need action)
    None,
}

/// Messages emitted by the header toolbar
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    /// Sidebar toggle pressed
    ToggleSidebar,

    /// Open button pressed
    Open,

    /// Annotations toggle pressed
    ToggleAnnotations,

    /// Find button pressed
    ToggleFind,

    /// Overflow action menu button pressed
    ToggleOverflowMenu,

    /// Page selector text edited
    PageInput(String),

    /// Page selector entry submitted
    PageSubmit,

    /// Zoom control buttons
    ZoomIn,
    ZoomOut,

    /// Sizing mode chosen in the zoom control
    SetSizingMode(SizingMode),
}

/// Document messages
#[derive(Debug, Clone)]
pub enum DocumentMessage {
    /// Show the open dialog
    OpenDialog,

    /// Open a specific path
    OpenPath(PathBuf),

    /// Document metadata loaded
    Loaded(DocumentInfo),

    /// Loading failed
    LoadError { path: PathBuf, error: String },

    /// Reload the current document from disk
    Reload,

    /// Close the current document
    Close,

    /// Jump to a page (0-based)
    GoToPage(usize),

    /// Page navigation
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
}

/// View messages
#[derive(Debug, Clone)]
pub enum ViewMessage {
    ToggleFullscreen,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleSidebar,
    ToggleFind,

    /// Find bar query edited
    FindQuery(String),

    CloseFind,

    /// Escape pressed: leave fullscreen, close find bar and menus
    Escape,
}

/// Recent documents messages
#[derive(Debug, Clone)]
pub enum RecentMessage {
    /// Open a recent document
    Open(PathBuf),

    /// Forget a recent document
    Remove(PathBuf),

    /// Forget all recent documents
    Clear,
}

/// System messages
#[derive(Debug, Clone)]
pub enum SystemMessage {
    /// Window resized
    WindowResized { width: f32, height: f32 },

    /// Show the about text in the status line
    About,

    /// Application quit requested
    Quit,
}

impl From<ToolbarMessage> for Message {
    fn from(msg: ToolbarMessage) -> Self {
        Message::Toolbar(msg)
    }
}

impl From<DocumentMessage> for Message {
    fn from(msg: DocumentMessage) -> Self {
        Message::Document(msg)
    }
}

impl From<ViewMessage> for Message {
    fn from(msg: ViewMessage) -> Self {
        Message::View(msg)
    }
}

impl From<RecentMessage> for Message {
    fn from(msg: RecentMessage) -> Self {
        Message::Recent(msg)
    }
}

impl From<SystemMessage> for Message {
    fn from(msg: SystemMessage) -> Self {
        Message::System(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_conversion() {
        let msg: Message = ToolbarMessage::ToggleFind.into();
        assert!(matches!(msg, Message::Toolbar(ToolbarMessage::ToggleFind)));

        let msg: Message = ViewMessage::Escape.into();
        assert!(matches!(msg, Message::View(ViewMessage::Escape)));
    }
}
