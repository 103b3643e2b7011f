// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::usage::UsageLevel;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the drawer, forms and dashboard cards.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Navigation bar strip; follows the theme background, slightly translucent.
pub fn toolbar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Floating dialog or menu card.
pub fn dialog(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dimmed layer behind a modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Pill-shaped tag filled with `color`, e.g. a provider badge.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Color of a storage usage indicator.
#[must_use]
pub fn usage_color(level: UsageLevel) -> Color {
    match level {
        UsageLevel::Normal => palette::SUCCESS_500,
        UsageLevel::Warning => palette::WARNING_500,
        UsageLevel::Critical => palette::ERROR_500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_levels_have_distinct_colors() {
        let normal = usage_color(UsageLevel::Normal);
        let warning = usage_color(UsageLevel::Warning);
        let critical = usage_color(UsageLevel::Critical);
        assert_ne!(normal, warning);
        assert_ne!(warning, critical);
    }

    #[test]
    fn badge_uses_given_color() {
        let style = badge(palette::INFO_500)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::INFO_500)));
    }
}
