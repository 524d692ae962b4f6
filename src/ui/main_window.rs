//! Main window layout and composition
//!
//! Handles the overall window structure below the header bar: the overflow
//! menu, the find bar, the page sidebar, the document area and the status
//! line, or the recent documents list when no document is open.

use crate::message::{DocumentMessage, Message};
use crate::state::{RecentDocument, StatusLevel, ToolbarMode, WindowState};
use crate::ui::find_bar::build_find_bar;
use crate::ui::{action_menu, recent_view};
use cosmic::iced::Length;
use cosmic::widget::{button, container, divider, scrollable, text, Column, Row};
use cosmic::Element;

/// Everything the main window content depends on
pub struct MainWindowState<'a> {
    pub window: &'a WindowState,
    pub mode: ToolbarMode,
    pub overflow_menu_open: bool,
    pub recent: Vec<&'a RecentDocument>,
    pub sidebar_width: u32,
}

/// Build the main window view
pub fn view<'a>(state: MainWindowState<'a>) -> Element<'a, Message> {
    let mut column = Column::new();

    if state.overflow_menu_open {
        column = column.push(action_menu::view());
    }

    let body = match state.mode {
        ToolbarMode::RecentView => recent_view::view(state.recent),
        ToolbarMode::Normal | ToolbarMode::Fullscreen => {
            view_document(state.window, state.sidebar_width)
        }
    };
    column = column.push(body);

    if let Some((message, level)) = &state.window.status {
        let label = match level {
            StatusLevel::Info => message.clone(),
            StatusLevel::Error => format!("⚠ {}", message),
        };
        column = column.push(
            container(text(label).size(12))
                .width(Length::Fill)
                .padding([4, 12]),
        );
    }

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Document area with optional find bar and page sidebar
fn view_document(window: &WindowState, sidebar_width: u32) -> Element<'_, Message> {
    let mut column = Column::new();

    if window.find_bar_open {
        column = column.push(build_find_bar(&window.find_query));
    }

    let mut main_row = Row::new();

    if window.sidebar_visible && !window.fullscreen {
        main_row = main_row
            .push(
                container(build_page_sidebar(window))
                    .width(Length::Fixed(sidebar_width as f32))
                    .height(Length::Fill),
            )
            .push(divider::vertical::default());
    }

    main_row = main_row.push(build_page_area(window));
    column = column.push(main_row);

    column.into()
}

/// Sidebar listing the document pages
fn build_page_sidebar(window: &WindowState) -> Element<'_, Message> {
    let model = &window.document;
    let mut pages = Column::new().spacing(2).padding(8);

    for index in 0..model.n_pages() {
        let label = text(format!("Page {}", index + 1)).size(13);
        let class = if index == model.page() {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::MenuItem
        };
        pages = pages.push(
            button::custom(label)
                .on_press(Message::Document(DocumentMessage::GoToPage(index)))
                .width(Length::Fill)
                .padding([4, 8])
                .class(class),
        );
    }

    scrollable(pages).height(Length::Fill).into()
}

/// Page placeholder with the current position and scale
fn build_page_area(window: &WindowState) -> Element<'_, Message> {
    let model = &window.document;

    let title = model
        .document()
        .map(|doc| doc.display_name())
        .unwrap_or_default();

    let page = Column::new()
        .push(text(title).size(18))
        .push(text(format!("Page {}", model.page_label())).size(14))
        .push(
            text(format!(
                "{} · {}",
                model.scale_label(),
                model.sizing_mode().label()
            ))
            .size(12),
        )
        .spacing(8)
        .align_x(cosmic::iced::Alignment::Center);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
