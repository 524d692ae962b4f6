//! Overflow action menu
//!
//! Drawn under the header bar while the toolbar's action menu is active.

use crate::menu::{overflow_actions, Action};
use crate::message::Message;
use cosmic::iced::Length;
use cosmic::widget::{button, container, divider, horizontal_space, text, Column, Row};
use cosmic::Element;

/// Build the overflow menu, right aligned
pub fn view<'a>() -> Element<'a, Message> {
    let mut entries = Column::new().spacing(2).padding(6);

    for entry in overflow_actions() {
        entries = match entry {
            Some(action) => entries.push(menu_entry(action)),
            None => entries.push(divider::horizontal::default()),
        };
    }

    let menu = container(entries)
        .width(Length::Fixed(240.0))
        .class(cosmic::theme::Container::Card);

    Row::new()
        .push(horizontal_space())
        .push(menu)
        .padding([0, 8])
        .into()
}

fn menu_entry<'a>(action: Action) -> Element<'a, Message> {
    let mut content = Row::new()
        .push(text(action.label()))
        .push(horizontal_space())
        .align_y(cosmic::iced::Alignment::Center);

    if let Some(shortcut) = action.shortcut() {
        content = content.push(text(shortcut).size(11));
    }

    button::custom(content)
        .on_press(action.to_message())
        .width(Length::Fill)
        .padding([6, 10])
        .class(cosmic::theme::Button::MenuItem)
        .into()
}
