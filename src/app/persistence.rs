// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Theme and language changes are applied to the in-memory [`Config`] and
//! written back to `settings.toml` right away.

use super::config::{self, Config};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

pub struct PreferencesContext<'a> {
    pub config: &'a Config,
    /// Directory override; `None` uses the normal path resolution.
    pub config_dir: Option<PathBuf>,
    pub notifications: &'a mut notifications::Manager,
}

/// Saves the configuration, reporting a failure as a warning toast.
pub fn persist_preferences(ctx: PreferencesContext<'_>) -> Task<Message> {
    if let Err(error) = config::save_with_override(ctx.config, ctx.config_dir) {
        log::warn!("failed to save config: {error}");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
    Task::none()
}

pub fn apply_theme_change(
    config: &mut Config,
    theme_mode: &mut ThemeMode,
    mode: ThemeMode,
    config_dir: Option<PathBuf>,
    notifications: &mut notifications::Manager,
) -> Task<Message> {
    *theme_mode = mode;
    config.general.theme_mode = mode;
    persist_preferences(PreferencesContext {
        config,
        config_dir,
        notifications,
    })
}

/// Switches the UI language and persists it.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
    config_dir: Option<PathBuf>,
    notifications: &mut notifications::Manager,
) -> Task<Message> {
    i18n.set_locale(locale);
    config.general.language = Some(i18n.current_locale().to_string());
    persist_preferences(PreferencesContext {
        config,
        config_dir,
        notifications,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use unic_langid::langid;

    #[test]
    fn language_change_is_written_to_settings_file() {
        let dir = tempdir().expect("temp dir");
        let mut i18n = I18n::default();
        let mut config = Config::default();
        let mut notifications = notifications::Manager::new();

        let _ = apply_language_change(
            &mut i18n,
            &mut config,
            langid!("fr"),
            Some(dir.path().to_path_buf()),
            &mut notifications,
        );

        assert_eq!(i18n.current_locale(), &langid!("fr"));
        let contents = fs::read_to_string(dir.path().join("settings.toml")).unwrap();
        assert!(contents.contains("language = \"fr\""));
        assert!(!notifications.has_notifications());
    }

    #[test]
    fn save_failure_shows_warning() {
        let dir = tempdir().expect("temp dir");
        // A directory where the file should be makes the write fail.
        fs::create_dir_all(dir.path().join("settings.toml")).unwrap();
        let mut config = Config::default();
        let mut theme_mode = ThemeMode::System;
        let mut notifications = notifications::Manager::new();

        let _ = apply_theme_change(
            &mut config,
            &mut theme_mode,
            ThemeMode::Dark,
            Some(dir.path().to_path_buf()),
            &mut notifications,
        );

        assert_eq!(theme_mode, ThemeMode::Dark);
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(notifications.has_notifications());
    }
}
