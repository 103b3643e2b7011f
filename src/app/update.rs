// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each screen's `update` returns an event; the handlers here turn those
//! events into session writes, navigation, notifications and tasks.

use super::config::Config;
use super::{persistence, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::services::Services;
use crate::session::Session;
use crate::ui::admin::{self, Event as AdminEvent};
use crate::ui::browser::{self, Event as BrowserEvent};
use crate::ui::dashboard::{self, Event as DashboardEvent};
use crate::ui::inventory;
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub theme_mode: &'a mut ThemeMode,
    pub session: &'a mut Session,
    pub services: &'a Services,
    pub browser: &'a mut browser::State,
    pub login: &'a mut login::State,
    pub inventory: &'a mut inventory::State,
    pub admin: &'a mut admin::State,
    pub menu_open: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
}

/// Navigates to `target`, redirecting to login when the session is logged
/// out, and starts the fetches the new screen needs.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let target = target.guarded(ctx.session.is_logged_in());
    let previous = std::mem::replace(ctx.screen, target);
    *ctx.menu_open = false;
    if previous != target {
        log::debug!("route {} -> {}", previous.route(), target.route());
    }

    match target {
        Screen::Browser if previous != Screen::Browser => ctx
            .browser
            .refresh_all(ctx.services)
            .map(Message::Browser),
        Screen::Admin => fetch_admin(ctx),
        _ => Task::none(),
    }
}

fn fetch_admin(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let request = ctx.admin.refresh();
    Task::perform(ctx.services.catalog.admin_dashboard(), move |result| {
        Message::Admin(admin::Message::Loaded { request, result })
    })
}

pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match login::update(ctx.login, message) {
        LoginEvent::None => Task::none(),
        LoginEvent::SignIn { email } => match ctx.session.sign_in_with_email(&email) {
            Ok(()) => {
                ctx.login.reset();
                handle_screen_switch(ctx, Screen::Browser)
            }
            Err(error) => {
                log::warn!("cannot store sign-in: {error}");
                ctx.notifications
                    .push(Notification::error("notification-session-error"));
                Task::none()
            }
        },
        LoginEvent::GoogleSignIn => match ctx.session.sign_in_with_google() {
            Ok(()) => {
                ctx.notifications
                    .push(Notification::success("notification-google-login-success"));
                let delay = ctx.config.actions.google_redirect_delay();
                Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    |()| Message::GoogleRedirect,
                )
            }
            Err(error) => {
                log::warn!("cannot store Google sign-in: {error}");
                ctx.login.reset();
                ctx.notifications
                    .push(Notification::error("notification-session-error"));
                Task::none()
            }
        },
    }
}

/// Finishes the Google sign-in once the redirect delay has elapsed.
pub fn handle_google_redirect(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.login.is_redirecting() {
        return Task::none();
    }
    ctx.login.reset();
    handle_screen_switch(ctx, Screen::Browser)
}

pub fn handle_browser_message(
    ctx: &mut UpdateContext<'_>,
    message: browser::Message,
) -> Task<Message> {
    let (event, task) = ctx.browser.update(message, ctx.services);
    match event {
        BrowserEvent::None => {}
        BrowserEvent::Notify(notification) => ctx.notifications.push(notification),
        BrowserEvent::Loaded(kind) => ctx
            .notifications
            .clear_matching(&format!("notification-fetch-error-{}", kind.endpoint())),
    }
    task.map(Message::Browser)
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::ToggleSetting { setting, enabled } => {
            let notification = match ctx.session.set_setting(setting, enabled) {
                Ok(()) if enabled => Notification::success("settings-toggle-enabled"),
                Ok(()) => Notification::success("settings-toggle-disabled"),
                Err(error) => {
                    log::warn!("cannot store {}: {error}", setting.key());
                    Notification::error("settings-toggle-failed")
                }
            };
            ctx.notifications
                .push(notification.with_arg("setting", setting.key()));
            Task::none()
        }
        SettingsEvent::ThemeChanged(mode) => persistence::apply_theme_change(
            ctx.config,
            ctx.theme_mode,
            mode,
            ctx.config_dir.clone(),
            ctx.notifications,
        ),
        SettingsEvent::LanguageChanged(locale) => persistence::apply_language_change(
            ctx.i18n,
            ctx.config,
            locale,
            ctx.config_dir.clone(),
            ctx.notifications,
        ),
    }
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match dashboard::update(message) {
        DashboardEvent::OpenInventory => handle_screen_switch(ctx, Screen::Inventory),
        DashboardEvent::OpenSettings => handle_screen_switch(ctx, Screen::Settings),
    }
}

pub fn handle_admin_message(ctx: &mut UpdateContext<'_>, message: admin::Message) -> Task<Message> {
    match ctx.admin.update(message) {
        AdminEvent::None => Task::none(),
        AdminEvent::Refresh => fetch_admin(ctx),
        AdminEvent::LoadFailed(_) => {
            ctx.notifications
                .push(Notification::error("notification-admin-fetch-error"));
            Task::none()
        }
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Open(destination) => handle_screen_switch(ctx, destination.into()),
        NavbarEvent::ToggleTheme => {
            let mode = ctx.theme_mode.toggled();
            persistence::apply_theme_change(
                ctx.config,
                ctx.theme_mode,
                mode,
                ctx.config_dir.clone(),
                ctx.notifications,
            )
        }
        NavbarEvent::Logout => {
            if let Err(error) = ctx.session.sign_out() {
                log::warn!("sign-out incomplete: {error}");
                ctx.notifications
                    .push(Notification::error("notification-session-error"));
            }
            ctx.login.reset();
            handle_screen_switch(ctx, Screen::Login)
        }
    }
}
