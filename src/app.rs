//! Main application module implementing the Cosmic Application trait
//!
//! This is the central hub of the application, implementing libCosmic's
//! Application trait for window management and message routing. After every
//! change to the window or document it pushes the derived mode, compact flag
//! and find availability into the toolbar.

use crate::config::{Config, APP_ID};
use crate::error::{AppResult, ToolbarError};
use crate::file_handler::{load_document_info, DOCUMENT_EXTENSIONS};
use crate::menu::keyboard_shortcuts_subscription;
use crate::message::{
    DocumentMessage, Message, RecentMessage, SystemMessage, ToolbarMessage, ViewMessage,
};
use crate::state::{RecentDocuments, StatusLevel, ToolbarMode, WindowState};
use crate::ui::{self, page_selector, MainWindowState, Toolbar};

use cosmic::app::{Core, Task};
use cosmic::iced::{event, window, Event};
use cosmic::{Application, ApplicationExt, Element};
use std::path::PathBuf;

/// Default window title
const APP_TITLE: &str = "Cosmic Reader";

/// Cosmic Reader Application
pub struct CosmicReader {
    /// libCosmic core reference
    core: Core,

    /// Main window state
    pub window: WindowState,

    /// Header toolbar, absent if it could not be bound to a window
    toolbar: Option<Toolbar>,

    /// User configuration
    pub config: Config,

    /// Recently opened documents
    pub recent: RecentDocuments,
}

/// Application flags passed during initialization
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Document to open on startup
    pub file: Option<PathBuf>,
}

impl Application for CosmicReader {
    /// Executor for async tasks
    type Executor = cosmic::executor::Default;

    /// Application flags
    type Flags = Flags;

    /// Application message type
    type Message = Message;

    /// Application ID following reverse-DNS convention
    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Initialize the application
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let config = Config::load().unwrap_or_else(|e| {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        });

        let recent = RecentDocuments::load(config.recent.max_entries).unwrap_or_else(|e| {
            log::warn!("Could not load recent documents: {}", e);
            RecentDocuments::new(config.recent.max_entries)
        });

        let toolbar = match Toolbar::builder()
            .window(core.main_window_id())
            .title(APP_TITLE)
            .build()
        {
            Ok(toolbar) => Some(toolbar),
            Err(e) => {
                log::error!("Toolbar unavailable: {}", e);
                None
            }
        };

        let mut app = Self {
            core,
            window: WindowState::new(&config),
            toolbar,
            config,
            recent,
        };

        app.sync_toolbar();

        let task = match flags.file {
            Some(path) => Task::done(Self::app_message(Message::Document(
                DocumentMessage::OpenPath(path),
            ))),
            None => Task::none(),
        };

        (app, task)
    }

    /// Handle incoming messages
    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        let task = match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::Document(msg) => self.handle_document_message(msg),
            Message::View(msg) => self.handle_view_message(msg),
            Message::Recent(msg) => self.handle_recent_message(msg),
            Message::System(msg) => self.handle_system_message(msg),
            Message::None => Task::none(),
        };
        self.sync_toolbar();
        task
    }

    /// Render the application view
    fn view(&self) -> Element<'_, Self::Message> {
        let recent = if self.config.recent.hide_missing {
            self.recent.existing()
        } else {
            self.recent.entries().iter().collect()
        };

        ui::view(MainWindowState {
            window: &self.window,
            mode: self.toolbar_mode(),
            overflow_menu_open: self
                .toolbar
                .as_ref()
                .is_some_and(Toolbar::overflow_menu_open),
            recent,
            sidebar_width: self.config.ui.sidebar_width,
        })
    }

    /// Handle subscription events
    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        cosmic::iced::Subscription::batch(vec![
            keyboard_shortcuts_subscription(),
            event::listen_with(|event, _status, _id| match event {
                Event::Window(window::Event::Resized(size)) => {
                    Some(Message::System(SystemMessage::WindowResized {
                        width: size.width,
                        height: size.height,
                    }))
                }
                _ => None,
            }),
        ])
    }

    /// Elements to show at the start of the header bar
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        match &self.toolbar {
            Some(toolbar) => toolbar.header_start(&self.window),
            None => Vec::new(),
        }
    }

    /// Elements to show at the end of the header bar
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        match &self.toolbar {
            Some(toolbar) => toolbar.header_end(&self.window),
            None => Vec::new(),
        }
    }
}

impl CosmicReader {
    /// Current toolbar mode, `Normal` if the toolbar is unavailable
    pub fn toolbar_mode(&self) -> ToolbarMode {
        match self.toolbar_checked() {
            Ok(toolbar) => toolbar.policy().mode(),
            Err(_) => ToolbarMode::default(),
        }
    }

    fn toolbar_checked(&self) -> Result<&Toolbar, ToolbarError> {
        self.toolbar.as_ref().ok_or(ToolbarError::NotInitialized)
    }

    fn toolbar_checked_mut(&mut self) -> Result<&mut Toolbar, ToolbarError> {
        self.toolbar.as_mut().ok_or(ToolbarError::NotInitialized)
    }

    /// Push window and document state into the toolbar
    fn sync_toolbar(&mut self) {
        if !self.window.document.supports_find() && self.window.find_bar_open {
            self.window.set_find_bar_open(false);
        }

        let compact_width = self.config.ui.compact_width as f32;
        let window_title = match self.toolbar.as_mut() {
            Some(toolbar) => toolbar.sync(&self.window, compact_width, APP_TITLE),
            None => {
                log::debug!("Skipping toolbar update: {}", ToolbarError::NotInitialized);
                APP_TITLE.to_string()
            }
        };

        self.set_header_title(window_title);
    }

    /// Helper to wrap message in cosmic Action
    fn app_message(msg: Message) -> cosmic::Action<Message> {
        cosmic::Action::App(msg)
    }

    /// Open the native file chooser
    fn open_dialog() -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .add_filter("PDF documents", DOCUMENT_EXTENSIONS)
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            |path| match path {
                Some(path) => Self::app_message(Message::Document(DocumentMessage::OpenPath(path))),
                None => Self::app_message(Message::None),
            },
        )
    }

    /// Load a document asynchronously
    fn open_path(path: PathBuf) -> Task<Message> {
        Task::perform(
            async move {
                match load_document_info(&path).await {
                    Ok(info) => DocumentMessage::Loaded(info),
                    Err(e) => {
                        log::error!("Failed to load {}: {}", path.display(), e);
                        DocumentMessage::LoadError {
                            path,
                            error: e.user_message(),
                        }
                    }
                }
            },
            |msg| Self::app_message(Message::Document(msg)),
        )
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Task<Message> {
        let id = match self.toolbar_checked() {
            Ok(toolbar) => toolbar.window(),
            Err(e) => {
                log::warn!("Cannot change fullscreen: {}", e);
                return Task::none();
            }
        };

        if !self.window.set_fullscreen(fullscreen) {
            return Task::none();
        }
        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::change_mode(id, mode)
    }

    /// Save configuration and recent documents
    fn persist(&self) -> AppResult<()> {
        self.config.save()?;
        self.recent.save()?;
        Ok(())
    }

    fn save_recent(&self) {
        if let Err(e) = self.recent.save() {
            log::error!("Failed to save recent documents: {}", e);
        }
    }

    /// Handle toolbar messages
    fn handle_toolbar_message(&mut self, msg: ToolbarMessage) -> Task<Message> {
        match msg {
            ToolbarMessage::ToggleSidebar => self.window.toggle_sidebar(),

            ToolbarMessage::Open => return Self::open_dialog(),

            ToolbarMessage::ToggleAnnotations => {
                if let Ok(toolbar) = self.toolbar_checked_mut() {
                    let active = toolbar.policy_mut().toggle_annotations();
                    log::debug!("Annotations toggle: {}", active);
                }
            }

            ToolbarMessage::ToggleFind => return self.handle_view_message(ViewMessage::ToggleFind),

            ToolbarMessage::ToggleOverflowMenu => {
                if let Ok(toolbar) = self.toolbar_checked_mut() {
                    toolbar.policy_mut().toggle_overflow_menu();
                }
            }

            ToolbarMessage::PageInput(entry) => self.window.page_entry = Some(entry),

            ToolbarMessage::PageSubmit => {
                if let Some(entry) = self.window.page_entry.take() {
                    let n_pages = self.window.document.n_pages();
                    match page_selector::parse_page_entry(&entry, n_pages) {
                        Some(page) => {
                            self.window.document.set_page(page);
                        }
                        None => log::debug!("Ignoring page entry {:?}", entry),
                    }
                }
            }

            ToolbarMessage::ZoomIn => self.window.document.zoom_in(),

            ToolbarMessage::ZoomOut => self.window.document.zoom_out(),

            ToolbarMessage::SetSizingMode(mode) => self.window.document.set_sizing_mode(mode),
        }
        Task::none()
    }

    /// Handle document messages
    fn handle_document_message(&mut self, msg: DocumentMessage) -> Task<Message> {
        match msg {
            DocumentMessage::OpenDialog => return Self::open_dialog(),

            DocumentMessage::OpenPath(path) => {
                self.window.set_status(
                    format!("Opening {}…", path.display()),
                    StatusLevel::Info,
                );
                return Self::open_path(path);
            }

            DocumentMessage::Loaded(info) => {
                self.recent.add(info.path.clone(), info.n_pages);
                self.save_recent();
                self.window.document.load(info);
                self.window.page_entry = None;
                self.window.sidebar_visible = self.config.ui.sidebar_visible;
                self.window.clear_status();
            }

            DocumentMessage::LoadError { path, error } => {
                self.window.set_status(
                    format!("Failed to open {}: {}", path.display(), error),
                    StatusLevel::Error,
                );
            }

            DocumentMessage::Reload => {
                if let Some(path) = self.window.document.document().map(|d| d.path.clone()) {
                    return Self::open_path(path);
                }
            }

            DocumentMessage::Close => {
                let task = self.set_fullscreen(false);
                self.window.document.close();
                self.window.set_find_bar_open(false);
                self.window.page_entry = None;
                return task;
            }

            DocumentMessage::GoToPage(page) => {
                self.window.document.set_page(page);
            }

            DocumentMessage::NextPage => {
                self.window.document.next_page();
            }

            DocumentMessage::PreviousPage => {
                self.window.document.previous_page();
            }

            DocumentMessage::FirstPage => {
                self.window.document.first_page();
            }

            DocumentMessage::LastPage => {
                self.window.document.last_page();
            }
        }
        Task::none()
    }

    /// Handle view messages
    fn handle_view_message(&mut self, msg: ViewMessage) -> Task<Message> {
        match msg {
            ViewMessage::ToggleFullscreen => {
                let fullscreen = !self.window.fullscreen;
                return self.set_fullscreen(fullscreen);
            }

            ViewMessage::ZoomIn => self.window.document.zoom_in(),

            ViewMessage::ZoomOut => self.window.document.zoom_out(),

            ViewMessage::ZoomReset => self.window.document.reset_zoom(),

            ViewMessage::ToggleSidebar => self.window.toggle_sidebar(),

            ViewMessage::ToggleFind => {
                if self.window.document.supports_find() {
                    let open = !self.window.find_bar_open;
                    self.window.set_find_bar_open(open);
                }
            }

            ViewMessage::FindQuery(query) => self.window.find_query = query,

            ViewMessage::CloseFind => self.window.set_find_bar_open(false),

            ViewMessage::Escape => {
                self.window.set_find_bar_open(false);
                if let Ok(toolbar) = self.toolbar_checked_mut() {
                    toolbar.policy_mut().close_overflow_menu();
                }
                return self.set_fullscreen(false);
            }
        }
        Task::none()
    }

    /// Handle recent documents messages
    fn handle_recent_message(&mut self, msg: RecentMessage) -> Task<Message> {
        match msg {
            RecentMessage::Open(path) => {
                return Task::done(Self::app_message(Message::Document(
                    DocumentMessage::OpenPath(path),
                )));
            }

            RecentMessage::Remove(path) => {
                self.recent.remove(&path);
                self.save_recent();
            }

            RecentMessage::Clear => {
                self.recent.clear();
                self.save_recent();
            }
        }
        Task::none()
    }

    /// Handle system messages
    fn handle_system_message(&mut self, msg: SystemMessage) -> Task<Message> {
        match msg {
            SystemMessage::WindowResized { width, .. } => {
                let compact = self
                    .window
                    .resize(width, self.config.ui.compact_width as f32);
                log::trace!("Window width {} (compact: {})", width, compact);
            }

            SystemMessage::About => {
                self.window.set_status(
                    format!("{} {}", APP_TITLE, env!("CARGO_PKG_VERSION")),
                    StatusLevel::Info,
                );
            }

            SystemMessage::Quit => {
                if let Err(e) = self.persist() {
                    log::error!("Failed to save state: {}", e);
                }
                std::process::exit(0);
            }
        }
        Task::none()
    }
}
