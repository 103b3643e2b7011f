// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every signed-in screen.
//!
//! The hamburger menu lists the destinations; the bar itself carries the
//! theme toggle and the logout button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Signed-in screens reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Browser,
    Dashboard,
    Inventory,
    Admin,
    Settings,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Browser,
        Destination::Dashboard,
        Destination::Inventory,
        Destination::Admin,
        Destination::Settings,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Destination::Browser => "menu-browser",
            Destination::Dashboard => "menu-dashboard",
            Destination::Inventory => "menu-inventory",
            Destination::Admin => "menu-admin",
            Destination::Settings => "menu-settings",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub active: Destination,
    pub is_dark_theme: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Open(Destination),
    ToggleTheme,
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Open(Destination),
    ToggleTheme,
    Logout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Open(destination) => {
            *menu_open = false;
            Event::Open(destination)
        }
        Message::ToggleTheme => Event::ToggleTheme,
        Message::Logout => {
            *menu_open = false;
            Event::Logout
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));
    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }
    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(Text::new("☰").size(typography::TITLE_SM))
        .on_press(Message::ToggleMenu)
        .padding([spacing::XXS, spacing::XS])
        .style(if ctx.menu_open {
            styles::button::selected
        } else {
            styles::button::unselected
        });

    // Sun in dark mode, moon in light mode: the glyph shows the target.
    let theme_glyph = if ctx.is_dark_theme { "☀" } else { "☾" };
    let theme_button = button(Text::new(theme_glyph))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected);

    let logout_button = button(Text::new(ctx.i18n.tr("navbar-logout")))
        .on_press(Message::Logout)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::danger);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(Text::new(ctx.i18n.tr(ctx.active.i18n_key())).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(theme_button)
        .push(logout_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = Destination::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, destination| {
            column.push(build_menu_item(
                ctx.i18n.tr(destination.i18n_key()),
                destination,
                destination == ctx.active,
            ))
        });

    Container::new(items)
        .padding(spacing::XS)
        .width(Length::Fixed(220.0))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn build_menu_item<'a>(label: String, destination: Destination, active: bool) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(Message::Open(destination))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(move |theme: &Theme, status| menu_item_style(theme, status, active))
        .into()
}

fn menu_item_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let palette = theme.extended_palette();
    let rounded = Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Active if active => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.weak.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_with_and_without_menu() {
        let i18n = I18n::default();
        for menu_open in [false, true] {
            let _element = view(ViewContext {
                i18n: &i18n,
                menu_open,
                active: Destination::Browser,
                is_dark_theme: true,
            });
        }
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn open_closes_menu_and_emits_destination() {
        let mut menu_open = true;
        let event = update(Message::Open(Destination::Admin), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::Open(Destination::Admin));
    }

    #[test]
    fn theme_toggle_keeps_menu_state() {
        let mut menu_open = true;
        assert_eq!(update(Message::ToggleTheme, &mut menu_open), Event::ToggleTheme);
        assert!(menu_open);
    }

    #[test]
    fn active_item_is_highlighted() {
        let active = menu_item_style(&Theme::Dark, button::Status::Active, true);
        let idle = menu_item_style(&Theme::Dark, button::Status::Active, false);
        assert!(active.background.is_some());
        assert!(idle.background.is_none());
    }
}
