// SPDX-License-Identifier: MPL-2.0
//! Small widgets describing storage providers and their usage.

use crate::domain::provider::{Provider, ProviderSelection};
use crate::domain::usage::StorageUsage;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// "used GB / total GB" as shown in the drawer and the section headers.
#[must_use]
pub fn usage_label(usage: &StorageUsage) -> String {
    format!("{} GB / {} GB", usage.used_gb, usage.total_gb)
}

/// A pill with the selection's usage, colored by how full it is.
pub fn chip<'a, Message: 'a>(selection: ProviderSelection) -> Element<'a, Message> {
    let usage = StorageUsage::for_selection(selection);
    let color = container_styles::usage_color(usage.level());

    Container::new(
        Text::new(usage_label(&usage))
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            }),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(container_styles::badge(color))
    .into()
}

/// A colored dot followed by the provider label.
pub fn provider_badge<'a, Message: 'a>(provider: Provider) -> Element<'a, Message> {
    let color = palette::from_hex(provider.color());
    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(""))
                .width(Length::Fixed(spacing::XS))
                .height(Length::Fixed(spacing::XS))
                .style(container_styles::badge(color)),
        )
        .push(Text::new(provider.label()).size(typography::CAPTION))
        .into()
}

/// Percentage bar plus "n%" caption used in the drawer rows.
pub fn meter<'a, Message: 'a>(usage: StorageUsage) -> Element<'a, Message> {
    let color = container_styles::usage_color(usage.level());
    let percent = usage.percent();

    Column::new()
        .spacing(spacing::XXS)
        .push(
            progress_bar(0.0..=100.0, percent.min(100) as f32)
                .girth(sizing::BAR_HEIGHT)
                .style(move |theme: &Theme| progress_bar::Style {
                    background: theme.extended_palette().background.weak.color.into(),
                    bar: color.into(),
                    border: iced::Border::default(),
                }),
        )
        .push(
            Container::new(Text::new(format!("{percent}%")).size(typography::CAPTION))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .style(|theme: &Theme| container::Style {
                    text_color: Some(theme.extended_palette().background.strong.text),
                    ..Default::default()
                }),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_label_uses_source_figures() {
        let usage = StorageUsage::for_provider(Provider::GoogleDrive);
        assert_eq!(usage_label(&usage), "8.5 GB / 15 GB");
    }

    #[test]
    fn wildcard_usage_label() {
        let usage = StorageUsage::for_selection(ProviderSelection::All);
        assert_eq!(usage_label(&usage), "22.5 GB / 130 GB");
    }
}
