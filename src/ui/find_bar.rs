//! Find bar component
//!
//! Search entry revealed under the header bar by the find button.

use crate::message::{Message, ViewMessage};
use cosmic::iced::Length;
use cosmic::widget::{button, container, icon, text_input, Row};
use cosmic::Element;

/// Build the find bar widget for the current query
pub fn build_find_bar(query: &str) -> Element<'_, Message> {
    let find_input = text_input("Find in document…", query)
        .on_input(|s| Message::View(ViewMessage::FindQuery(s)))
        .width(Length::Fixed(280.0));

    let close_button = button::icon(icon::from_name("window-close-symbolic"))
        .on_press(Message::View(ViewMessage::CloseFind))
        .padding(4);

    let row = Row::new()
        .push(find_input)
        .push(container(Row::new()).width(Length::Fill)) // Flex spacer
        .push(close_button)
        .spacing(4)
        .align_y(cosmic::iced::Alignment::Center);

    container(row)
        .width(Length::Fill)
        .padding(8)
        .class(cosmic::theme::Container::Card)
        .into()
}
