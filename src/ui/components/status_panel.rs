// SPDX-License-Identifier: MPL-2.0
//! Centered panel for sections that have nothing to list.
//!
//! Used for the loading, empty and failed states of the list sections and
//! the admin dashboard.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::status_panel::{StatusPanel, Tone};
//!
//! StatusPanel::new(Tone::Error)
//!     .title(i18n.tr("admin-load-failed"))
//!     .message(i18n.tr("error-network"))
//!     .action(i18n.tr("section-retry"), Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Drives the accent color and the leading glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Neutral, used while loading and for empty results.
    #[default]
    Neutral,
    Error,
}

impl Tone {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Tone::Neutral => palette::GRAY_400,
            Tone::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Tone::Neutral => "∅",
            Tone::Error => "!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusPanel<Message> {
    tone: Tone,
    show_glyph: bool,
    title: Option<String>,
    message: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> StatusPanel<Message> {
    pub fn new(tone: Tone) -> Self {
        Self {
            tone,
            show_glyph: true,
            title: None,
            message: None,
            action: None,
        }
    }

    /// A glyph-less panel with a single line, for the loading state.
    pub fn loading(label: impl Into<String>) -> Self {
        Self {
            show_glyph: false,
            ..Self::new(Tone::Neutral).title(label)
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.tone.color();

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if self.show_glyph {
            content = content.push(
                Text::new(self.tone.glyph())
                    .size(sizing::ICON_XL)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );
        }

        if let Some(title) = self.title {
            let tone = self.tone;
            content = content.push(Text::new(title).size(typography::TITLE_MD).style(
                move |theme: &Theme| text::Style {
                    color: Some(match tone {
                        Tone::Error => accent,
                        Tone::Neutral => theme.palette().text,
                    }),
                },
            ));
        }

        if let Some(message) = self.message {
            content = content.push(
                Text::new(message)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                button(Text::new(label))
                    .on_press(message)
                    .padding([spacing::XS, spacing::MD])
                    .style(button_styles::primary),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn tones_have_distinct_colors() {
        assert_ne!(Tone::Neutral.color(), Tone::Error.color());
    }

    #[test]
    fn loading_panel_hides_glyph() {
        let panel: StatusPanel<TestMessage> = StatusPanel::loading("Loading...");
        assert!(!panel.show_glyph);
        assert_eq!(panel.title.as_deref(), Some("Loading..."));
    }

    #[test]
    fn builder_collects_fields() {
        let panel = StatusPanel::new(Tone::Error)
            .title("Could not load")
            .message("network error")
            .action("Retry", TestMessage::Retry);
        assert_eq!(panel.tone, Tone::Error);
        assert_eq!(panel.message.as_deref(), Some("network error"));
        assert!(matches!(panel.action, Some((_, TestMessage::Retry))));
        let _element = panel.view();
    }
}
