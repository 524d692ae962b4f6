//! Zoom control bound to the document model
//!
//! Zoom out / zoom in buttons around a label showing the current scale.
//! Pressing the label cycles through the sizing modes.

use crate::message::{Message, ToolbarMessage};
use crate::state::{DocumentModel, SizingMode};
use cosmic::widget::{button, icon, Row};
use cosmic::Element;

/// Build the zoom control
pub fn view(model: &DocumentModel) -> Element<'_, Message> {
    let zoom_out = button::icon(icon::from_name("zoom-out-symbolic"))
        .on_press_maybe(
            model
                .can_zoom_out()
                .then_some(Message::Toolbar(ToolbarMessage::ZoomOut)),
        )
        .padding(4);

    let zoom_in = button::icon(icon::from_name("zoom-in-symbolic"))
        .on_press_maybe(
            model
                .can_zoom_in()
                .then_some(Message::Toolbar(ToolbarMessage::ZoomIn)),
        )
        .padding(4);

    let label = button::text(scale_text(model))
        .on_press(Message::Toolbar(ToolbarMessage::SetSizingMode(
            next_sizing_mode(model.sizing_mode()),
        )))
        .padding([4, 8]);

    Row::new()
        .push(zoom_out)
        .push(label)
        .push(zoom_in)
        .spacing(2)
        .align_y(cosmic::iced::Alignment::Center)
        .into()
}

/// Label for the current scale: the sizing mode unless the scale is explicit
fn scale_text(model: &DocumentModel) -> String {
    match model.sizing_mode() {
        SizingMode::Free => model.scale_label(),
        mode => mode.label().to_string(),
    }
}

/// Sizing mode following `mode` in cycling order
pub fn next_sizing_mode(mode: SizingMode) -> SizingMode {
    let all = SizingMode::ALL;
    let index = all.iter().position(|m| *m == mode).unwrap_or(0);
    all[(index + 1) % all.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sizing_mode_cycles() {
        let mut mode = SizingMode::Automatic;
        let mut seen = Vec::new();
        for _ in 0..SizingMode::ALL.len() {
            mode = next_sizing_mode(mode);
            seen.push(mode);
        }
        assert_eq!(mode, SizingMode::Automatic);
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_scale_text() {
        let mut model = DocumentModel::default();
        model.set_sizing_mode(SizingMode::FitWidth);
        assert_eq!(scale_text(&model), "Fit Width");
        model.zoom_in();
        assert_eq!(scale_text(&model), "120%");
    }
}
