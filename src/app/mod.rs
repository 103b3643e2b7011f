// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns the session, the backend services and every screen
//! state, and translates screen events into side effects like session
//! writes, config persistence, fetches and navigation.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::services::Services;
use crate::session::{FileStore, Session};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{admin, browser, inventory, login};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Config directory override; `None` follows the normal resolution.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    session: Session,
    services: Services,
    browser: browser::State,
    login: login::State,
    inventory: inventory::State,
    admin: admin::State,
    /// Whether the navbar menu is open.
    menu_open: bool,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 750;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 700;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Assembles the application from already-built parts.
    ///
    /// Starts on the login screen; send [`Message::SwitchScreen`] to enter
    /// the app, which redirects back to login when the session is logged out.
    pub fn with_parts(
        session: Session,
        services: Services,
        config: Config,
        config_dir: Option<PathBuf>,
        i18n: I18n,
    ) -> Self {
        Self {
            i18n,
            screen: Screen::Login,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            session,
            services,
            browser: browser::State::default(),
            login: login::State::default(),
            inventory: inventory::State::default(),
            admin: admin::State::default(),
            menu_open: false,
            notifications: notifications::Manager::new(),
        }
    }

    /// Initializes application state from the CLI flags, the config file and
    /// the session store, then opens the storage browser.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        // The CLI URL applies to this run only and never reaches settings.toml.
        let services_config = match flags.api_url {
            Some(url) => {
                let mut overridden = config.clone();
                overridden.api.base_url = Some(url);
                overridden
            }
            None => config.clone(),
        };
        let (services, services_warning) = Services::from_config(&services_config);
        let (store, store_warning) = FileStore::open();
        log::debug!("session store at {}", store.path().display());

        let mut app = Self::with_parts(Session::new(store), services, config, None, i18n);

        for key in [config_warning, store_warning, services_warning]
            .into_iter()
            .flatten()
        {
            app.notifications.push(Notification::warning(key));
        }

        let task = app.update(Message::SwitchScreen(Screen::Browser));
        (app, task)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn browser(&self) -> &browser::State {
        &self.browser
    }

    #[must_use]
    pub fn admin(&self) -> &admin::State {
        &self.admin
    }

    #[must_use]
    pub fn login(&self) -> &login::State {
        &self.login
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen = self.screen.guarded(self.session.is_logged_in());
        if screen.is_protected() {
            let page = self.i18n.tr(screen.destination().i18n_key());
            format!("{page} - {app_name}")
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            config_dir: &self.config_dir,
            theme_mode: &mut self.theme_mode,
            session: &mut self.session,
            services: &self.services,
            browser: &mut self.browser,
            login: &mut self.login,
            inventory: &mut self.inventory,
            admin: &mut self.admin,
            menu_open: &mut self.menu_open,
            notifications: &mut self.notifications,
        };

        match message {
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Login(message) => update::handle_login_message(&mut ctx, message),
            Message::GoogleRedirect => update::handle_google_redirect(&mut ctx),
            Message::Browser(message) => update::handle_browser_message(&mut ctx, message),
            Message::Settings(message) => update::handle_settings_message(&mut ctx, message),
            Message::Dashboard(message) => update::handle_dashboard_message(&mut ctx, message),
            Message::Inventory(message) => {
                ctx.inventory.update(message);
                Task::none()
            }
            Message::Admin(message) => update::handle_admin_message(&mut ctx, message),
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            session: &self.session,
            theme_mode: self.theme_mode,
            browser: &self.browser,
            login: &self.login,
            inventory: &self.inventory,
            admin: &self.admin,
            menu_open: self.menu_open,
            notifications: &self.notifications,
        })
    }
}
