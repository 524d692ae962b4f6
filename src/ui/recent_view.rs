//! Recent documents view
//!
//! Shown in place of the document when nothing is open.

use crate::fl;
use crate::message::{Message, RecentMessage, ToolbarMessage};
use crate::state::RecentDocument;
use cosmic::iced::Length;
use cosmic::widget::{button, container, horizontal_space, icon, scrollable, text, Column, Row};
use cosmic::Element;

/// Build the recent documents list
pub fn view<'a>(entries: Vec<&'a RecentDocument>) -> Element<'a, Message> {
    if entries.is_empty() {
        let empty = Column::new()
            .push(text(fl!("No Recent Documents")).size(24))
            .push(text(fl!("Open a PDF to start reading")))
            .push(
                button::text(fl!("Open…"))
                    .on_press(Message::Toolbar(ToolbarMessage::Open))
                    .class(cosmic::theme::Button::Suggested),
            )
            .spacing(12)
            .align_x(cosmic::iced::Alignment::Center);

        return container(empty)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let mut list = Column::new().spacing(4);
    for entry in entries {
        list = list.push(recent_row(entry));
    }

    let content = Column::new()
        .push(
            Row::new()
                .push(text(fl!("Recent Documents")).size(20))
                .push(horizontal_space())
                .push(
                    button::text(fl!("Clear"))
                        .on_press(Message::Recent(RecentMessage::Clear)),
                )
                .align_y(cosmic::iced::Alignment::Center),
        )
        .push(scrollable(list))
        .spacing(12)
        .max_width(720.0);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(24)
        .into()
}

fn recent_row(entry: &RecentDocument) -> Element<'_, Message> {
    let details = Column::new()
        .push(text(entry.display_name()).size(14))
        .push(
            text(format!(
                "{} pages · {}",
                entry.n_pages,
                entry.relative_time()
            ))
            .size(11),
        )
        .spacing(2);

    let open = button::custom(details)
        .on_press(Message::Recent(RecentMessage::Open(entry.path.clone())))
        .width(Length::Fill)
        .padding([6, 10])
        .class(cosmic::theme::Button::MenuItem);

    let remove = button::icon(icon::from_name("edit-delete-symbolic"))
        .on_press(Message::Recent(RecentMessage::Remove(entry.path.clone())))
        .padding(4);

    container(
        Row::new()
            .push(open)
            .push(remove)
            .spacing(4)
            .align_y(cosmic::iced::Alignment::Center),
    )
    .class(cosmic::theme::Container::Card)
    .into()
}
