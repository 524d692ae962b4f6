//! Page selector bound to the document model

use crate::message::{Message, ToolbarMessage};
use crate::state::DocumentModel;
use cosmic::iced::Length;
use cosmic::widget::{text, text_input, Row};
use cosmic::Element;

/// Build the page selector: an editable page number followed by the page count
pub fn view<'a>(model: &'a DocumentModel, entry: Option<&'a str>) -> Element<'a, Message> {
    let value = match entry {
        Some(entry) => entry.to_string(),
        None if model.has_document() => (model.page() + 1).to_string(),
        None => String::new(),
    };

    let input = text_input("", value)
        .on_input(|s| Message::Toolbar(ToolbarMessage::PageInput(s)))
        .on_submit(|_| Message::Toolbar(ToolbarMessage::PageSubmit))
        .width(Length::Fixed(56.0));

    Row::new()
        .push(input)
        .push(text(format!("of {}", model.n_pages())).size(12))
        .spacing(4)
        .align_y(cosmic::iced::Alignment::Center)
        .into()
}

/// Parse a 1-based page entry into a 0-based page index
pub fn parse_page_entry(entry: &str, n_pages: usize) -> Option<usize> {
    let page: usize = entry.trim().parse().ok()?;
    (1..=n_pages).contains(&page).then(|| page - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_entry() {
        assert_eq!(parse_page_entry("1", 10), Some(0));
        assert_eq!(parse_page_entry(" 10 ", 10), Some(9));
        assert_eq!(parse_page_entry("0", 10), None);
        assert_eq!(parse_page_entry("11", 10), None);
        assert_eq!(parse_page_entry("abc", 10), None);
        assert_eq!(parse_page_entry("1", 0), None);
    }
}
