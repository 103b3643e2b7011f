// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::admin;
use crate::ui::browser;
use crate::ui::dashboard;
use crate::ui::inventory;
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Login(login::Message),
    Browser(browser::Message),
    Settings(settings::Message),
    Dashboard(dashboard::Message),
    Inventory(inventory::Message),
    Admin(admin::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// The Google sign-in delay elapsed.
    GoogleRedirect,
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the session store).
    /// Takes precedence over `STOREIT_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STOREIT_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Catalog backend base URL; replaces `[api] base_url` for this run.
    pub api_url: Option<String>,
}
