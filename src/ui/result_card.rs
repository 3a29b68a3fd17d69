//! Result card: hieroglyphs, translation, transliteration and context

use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Font, Length};

use crate::state::data::TranslationResult;
use crate::ui::style;
use crate::Message;

/// Render `result` as a card
pub fn view(result: &TranslationResult) -> Element<'_, Message> {
    let header = row![
        text("RÉSULTAT DE L'ANALYSE").size(12).color(style::MUTED),
        horizontal_space(),
        button(text(copy_label(result)).size(12))
            .on_press(Message::CopyResult)
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let mut body = Column::new()
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    if let Some(glyphs) = &result.hieroglyphs {
        body = body.push(text(glyphs).size(64).color(style::INK));
    }

    body = body.push(
        column![
            text("TRADUCTION").size(11).color(style::AMBER_DARK),
            text(&result.translation).size(22).color(style::INK),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    );

    if let Some(reading) = &result.transliteration {
        body = body.push(
            container(
                text(format!("/{}/", reading))
                    .size(14)
                    .font(Font::MONOSPACE)
                    .color(style::MUTED),
            )
            .padding([8, 16])
            .style(style::transliteration_pill),
        );
    }

    if let Some(context) = &result.historical_context {
        body = body.push(
            container(
                column![
                    text("CONTEXTE HISTORIQUE").size(12).color(style::AMBER),
                    text(context).size(14).color(style::MUTED),
                ]
                .spacing(8),
            )
            .padding(20)
            .width(Length::Fill)
            .style(style::context_box),
        );
    }

    container(column![header, body].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .style(style::glass_card)
        .into()
}

/// Text put on the clipboard by the copy button
///
/// Hieroglyphs when there are any, the translation otherwise.
pub fn clipboard_text(result: &TranslationResult) -> String {
    result
        .hieroglyphs
        .clone()
        .filter(|glyphs| !glyphs.is_empty())
        .unwrap_or_else(|| result.translation.clone())
}

fn copy_label(result: &TranslationResult) -> &'static str {
    match result.hieroglyphs.as_deref() {
        Some(glyphs) if !glyphs.is_empty() => "Copier les hiéroglyphes",
        _ => "Copier la traduction",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_prefers_hieroglyphs() {
        let result = TranslationResult {
            hieroglyphs: Some("𓇳".to_string()),
            translation: "Soleil".to_string(),
            ..Default::default()
        };
        assert_eq!(clipboard_text(&result), "𓇳");
        assert_eq!(copy_label(&result), "Copier les hiéroglyphes");
    }

    #[test]
    fn test_clipboard_falls_back_to_translation() {
        let decoded = TranslationResult {
            transliteration: Some("rꜥ".to_string()),
            translation: "Râ".to_string(),
            ..Default::default()
        };
        assert_eq!(clipboard_text(&decoded), "Râ");

        let blank_glyphs = TranslationResult {
            hieroglyphs: Some(String::new()),
            ..decoded
        };
        assert_eq!(clipboard_text(&blank_glyphs), "Râ");
        assert_eq!(copy_label(&blank_glyphs), "Copier la traduction");
    }
}
