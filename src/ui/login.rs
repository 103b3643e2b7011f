// SPDX-License-Identifier: MPL-2.0
//! Login screen: email/password form and the simulated Google sign-in.
//!
//! The screen only validates input. Writing the session and navigating are
//! left to the application, which receives an [`Event`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Shown when either field is blank.
pub const MISSING_FIELDS_KEY: &str = "login-missing-fields";

#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    error: Option<&'static str>,
    /// Google sign-in accepted, waiting for the redirect.
    redirecting: bool,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    GoogleSignIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SignIn { email: String },
    GoogleSignIn,
}

impl State {
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    #[must_use]
    pub fn is_redirecting(&self) -> bool {
        self.redirecting
    }

    /// Clears the form, e.g. after logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(email) => {
            state.email = email;
            state.error = None;
            Event::None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            state.error = None;
            Event::None
        }
        Message::Submit => {
            if state.email.is_empty() || state.password.is_empty() {
                state.error = Some(MISSING_FIELDS_KEY);
                return Event::None;
            }
            state.error = None;
            state.password.clear();
            Event::SignIn {
                email: state.email.clone(),
            }
        }
        Message::GoogleSignIn => {
            if state.redirecting {
                return Event::None;
            }
            state.redirecting = true;
            state.error = None;
            Event::GoogleSignIn
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let i18n = ctx.i18n;

    let email = text_input(&i18n.tr("login-email-placeholder"), &state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS);

    let password = text_input(&i18n.tr("login-password-placeholder"), &state.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .secure(true)
        .padding(spacing::XS);

    let submit = button(
        Container::new(Text::new(i18n.tr("login-submit")))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::Submit)
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::button::primary);

    let mut google = button(
        Container::new(Text::new(i18n.tr("login-google")))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::button::unselected);
    if !state.redirecting {
        google = google.on_press(Message::GoogleSignIn);
    }

    let mut form = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("login-subtitle")).size(typography::BODY))
        .push(email)
        .push(password);

    if let Some(key) = state.error {
        form = form.push(
            Text::new(i18n.tr(key))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    form = form
        .push(submit)
        .push(Text::new(i18n.tr("login-or")).size(typography::CAPTION))
        .push(google);

    Container::new(
        Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::dialog),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str) -> State {
        let mut state = State::default();
        update(&mut state, Message::EmailChanged(email.into()));
        update(&mut state, Message::PasswordChanged(password.into()));
        state
    }

    #[test]
    fn both_fields_are_required() {
        for (email, password) in [("", ""), ("ana@example.com", ""), ("", "secret")] {
            let mut state = filled(email, password);
            assert_eq!(update(&mut state, Message::Submit), Event::None);
            assert_eq!(state.error(), Some(MISSING_FIELDS_KEY));
        }
    }

    #[test]
    fn valid_form_signs_in_with_email() {
        let mut state = filled("ana@example.com", "secret");
        let event = update(&mut state, Message::Submit);
        assert_eq!(
            event,
            Event::SignIn {
                email: "ana@example.com".into()
            }
        );
        assert!(state.error().is_none());
    }

    #[test]
    fn editing_clears_error() {
        let mut state = State::default();
        update(&mut state, Message::Submit);
        assert!(state.error().is_some());
        update(&mut state, Message::EmailChanged("a".into()));
        assert!(state.error().is_none());
    }

    #[test]
    fn google_sign_in_fires_once() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::GoogleSignIn), Event::GoogleSignIn);
        assert!(state.is_redirecting());
        assert_eq!(update(&mut state, Message::GoogleSignIn), Event::None);
        state.reset();
        assert!(!state.is_redirecting());
    }

    #[test]
    fn view_renders_with_error() {
        let i18n = I18n::default();
        let mut state = State::default();
        update(&mut state, Message::Submit);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
