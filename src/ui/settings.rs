// SPDX-License-Identifier: MPL-2.0
//! Settings screen: the stored user toggles plus theme and language.
//!
//! The toggles live in the session store; theme and language are written to
//! `settings.toml` by the application when it receives the matching
//! [`Event`].

use crate::i18n::fluent::I18n;
use crate::session::{Session, Setting};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{pick_list, scrollable, toggler, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use std::fmt;
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle(Setting, bool),
    ThemeSelected(ThemeOption),
    LanguageSelected(LanguageOption),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleSetting { setting: Setting, enabled: bool },
    ThemeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

/// Pick-list entry for a theme mode, carrying its translated label.
#[derive(Debug, Clone)]
pub struct ThemeOption {
    pub mode: ThemeMode,
    label: String,
}

impl PartialEq for ThemeOption {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
    }
}

impl fmt::Display for ThemeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Pick-list entry for a UI language.
#[derive(Debug, Clone)]
pub struct LanguageOption {
    pub locale: LanguageIdentifier,
    label: String,
}

impl PartialEq for LanguageOption {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn theme_option(mode: ThemeMode, i18n: &I18n) -> ThemeOption {
    ThemeOption {
        mode,
        label: i18n.tr(mode.i18n_key()),
    }
}

/// "Français (fr)", or the bare tag when the name is not translated.
fn language_option(locale: &LanguageIdentifier, i18n: &I18n) -> LanguageOption {
    let tag = locale.to_string();
    let name = i18n.tr(&format!("language-name-{tag}"));
    let label = if name.starts_with("MISSING:") {
        tag
    } else {
        format!("{name} ({tag})")
    };
    LanguageOption {
        locale: locale.clone(),
        label,
    }
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Toggle(setting, enabled) => Event::ToggleSetting { setting, enabled },
        Message::ThemeSelected(option) => Event::ThemeChanged(option.mode),
        Message::LanguageSelected(option) => Event::LanguageChanged(option.locale),
    }
}

fn labeled_row<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY_LG))
        .push(Space::new().width(Length::Fill))
        .push(control)
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let toggles = Setting::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |column, setting| {
            let enabled = ctx.session.setting(setting);
            column.push(labeled_row(
                i18n.tr(setting_label_key(setting)),
                toggler(enabled)
                    .on_toggle(move |value| Message::Toggle(setting, value))
                    .size(20.0)
                    .into(),
            ))
        });

    let themes: Vec<ThemeOption> = ThemeMode::ALL
        .into_iter()
        .map(|mode| theme_option(mode, i18n))
        .collect();
    let theme = pick_list(
        themes,
        Some(theme_option(ctx.theme_mode, i18n)),
        Message::ThemeSelected,
    );

    let languages: Vec<LanguageOption> = i18n
        .available_locales
        .iter()
        .map(|locale| language_option(locale, i18n))
        .collect();
    let language = pick_list(
        languages,
        Some(language_option(i18n.current_locale(), i18n)),
        Message::LanguageSelected,
    );

    let account = match ctx.session.user_email() {
        Some(email) => i18n.tr_with_args("settings-signed-in-as", &[("email", email.as_str())]),
        None if ctx.session.is_google_auth() => i18n.tr("settings-signed-in-google"),
        None => String::new(),
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG))
        .push(Text::new(account).size(typography::BODY_SM))
        .push(section(i18n.tr("settings-section-preferences"), toggles.into()))
        .push(section(
            i18n.tr("settings-section-appearance"),
            Column::new()
                .spacing(spacing::SM)
                .push(labeled_row(i18n.tr("settings-theme-label"), theme.into()))
                .push(labeled_row(i18n.tr("settings-language-label"), language.into()))
                .into(),
        ));

    Container::new(scrollable(
        Container::new(content)
            .max_width(sizing::FORM_WIDTH * 1.5)
            .padding(spacing::LG),
    ))
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(body),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn setting_label_key(setting: Setting) -> &'static str {
    match setting {
        Setting::Notifications => "settings-notifications-label",
        Setting::AutoSave => "settings-auto-save-label",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{keys, MemoryStore};
    use unic_langid::langid;

    #[test]
    fn toggle_message_becomes_event() {
        assert_eq!(
            update(Message::Toggle(Setting::AutoSave, true)),
            Event::ToggleSetting {
                setting: Setting::AutoSave,
                enabled: true
            }
        );
    }

    #[test]
    fn theme_options_compare_by_mode() {
        let i18n = I18n::default();
        let a = theme_option(ThemeMode::Dark, &i18n);
        let b = ThemeOption {
            mode: ThemeMode::Dark,
            label: "other".into(),
        };
        assert_eq!(a, b);
        assert_eq!(update(Message::ThemeSelected(a)), Event::ThemeChanged(ThemeMode::Dark));
    }

    #[test]
    fn language_option_labels_translated_names() {
        let i18n = I18n::default();
        let french = language_option(&langid!("fr"), &i18n);
        assert_eq!(french.to_string(), "Français (fr)");

        let unknown = language_option(&langid!("de"), &i18n);
        assert_eq!(unknown.to_string(), "de");
    }

    #[test]
    fn view_renders_with_stored_toggles() {
        let i18n = I18n::default();
        let session = Session::new(MemoryStore::with_entries([
            (keys::NOTIFICATIONS, "true"),
            (keys::USER_EMAIL, "ana@example.com"),
        ]));
        let _element = view(ViewContext {
            i18n: &i18n,
            session: &session,
            theme_mode: ThemeMode::System,
        });
    }
}
