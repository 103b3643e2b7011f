// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen under the navbar and stacks the toast overlay
//! on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::admin;
use crate::ui::browser;
use crate::ui::dashboard::{self, ViewContext as DashboardViewContext};
use crate::ui::inventory;
use crate::ui::login::{self, ViewContext as LoginViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub session: &'a Session,
    pub theme_mode: ThemeMode,
    pub browser: &'a browser::State,
    pub login: &'a login::State,
    pub inventory: &'a inventory::State,
    pub admin: &'a admin::State,
    pub menu_open: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // Render-time guard: a logged-out session never sees a protected screen.
    let screen = ctx.screen.guarded(ctx.session.is_logged_in());
    let i18n = ctx.i18n;

    let current_view: Element<'_, Message> = match screen {
        Screen::Login => login::view(LoginViewContext {
            i18n,
            state: ctx.login,
        })
        .map(Message::Login),
        Screen::Browser => ctx.browser.view(i18n).map(Message::Browser),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n,
            session: ctx.session,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
        Screen::Dashboard => dashboard::view(DashboardViewContext { i18n }).map(Message::Dashboard),
        Screen::Inventory => ctx.inventory.view(i18n).map(Message::Inventory),
        Screen::Admin => ctx.admin.view(i18n).map(Message::Admin),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if screen.is_protected() {
        column = column.push(
            navbar::view(NavbarViewContext {
                i18n,
                menu_open: ctx.menu_open,
                active: screen.destination(),
                is_dark_theme: ctx.theme_mode.is_dark(),
            })
            .map(Message::Navbar),
        );
    }
    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Stack::new()
        .push(column)
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
