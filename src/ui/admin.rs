// SPDX-License-Identifier: MPL-2.0
//! Admin dashboard: users, regions and users per provider, fetched from the
//! catalog source on every visit.

use crate::domain::dashboard::AdminDashboard;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::components::status_panel::{StatusPanel, Tone};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready(AdminDashboard),
    Failed(Error),
}

#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    request: u64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            request: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        request: u64,
        result: Result<AdminDashboard>,
    },
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Start a new fetch.
    Refresh,
    LoadFailed(Error),
}

impl State {
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Starts a new fetch generation and returns its id.
    pub fn refresh(&mut self) -> u64 {
        self.request += 1;
        self.phase = Phase::Loading;
        self.request
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded { request, result } => {
                if request != self.request {
                    return Event::None;
                }
                match result {
                    Ok(dashboard) => {
                        self.phase = Phase::Ready(dashboard);
                        Event::None
                    }
                    Err(error) => {
                        log::warn!("admin dashboard fetch failed: {error}");
                        self.phase = Phase::Failed(error.clone());
                        Event::LoadFailed(error)
                    }
                }
            }
            Message::Retry => Event::Refresh,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let body: Element<'a, Message> = match &self.phase {
            Phase::Loading => StatusPanel::loading(i18n.tr("section-loading")).view(),
            Phase::Failed(error) => StatusPanel::new(Tone::Error)
                .title(i18n.tr("admin-load-failed"))
                .message(i18n.tr(error.i18n_key()))
                .action(i18n.tr("section-retry"), Message::Retry)
                .view(),
            Phase::Ready(dashboard) => populated(dashboard, i18n),
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(Text::new(i18n.tr("admin-title")).size(typography::TITLE_LG))
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn populated<'a>(dashboard: &'a AdminDashboard, i18n: &'a I18n) -> Element<'a, Message> {
    let total = dashboard.total_users.to_string();

    let regions = dashboard
        .regions
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, region| {
            column.push(Text::new(region.as_str()).size(typography::BODY))
        });

    let usage = dashboard
        .storage_usage
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, entry| {
            let users = entry.users.to_string();
            column.push(
                Row::new()
                    .push(Text::new(entry.provider.as_str()).size(typography::BODY))
                    .push(Space::new().width(Length::Fill))
                    .push(
                        Text::new(i18n.tr_with_args("admin-users-count", &[("count", &users)]))
                            .size(typography::BODY),
                    ),
            )
        });

    let panel = |title: String, body: Element<'a, Message>| {
        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(title).size(typography::TITLE_SM))
                .push(body),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
    };

    scrollable(
        Column::new()
            .spacing(spacing::MD)
            .push(panel(
                i18n.tr("admin-total-users"),
                Text::new(total).size(typography::TITLE_LG).into(),
            ))
            .push(panel(i18n.tr("admin-regions"), regions.into()))
            .push(panel(i18n.tr("admin-storage-usage"), usage.into())),
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_latest_request() {
        let mut state = State::default();
        let stale = state.refresh();
        let current = state.refresh();

        state.update(Message::Loaded {
            request: stale,
            result: Ok(AdminDashboard::sample()),
        });
        assert_eq!(state.phase(), &Phase::Loading);

        state.update(Message::Loaded {
            request: current,
            result: Ok(AdminDashboard::sample()),
        });
        assert!(matches!(state.phase(), Phase::Ready(d) if d.total_users == 100));
    }

    #[test]
    fn failure_is_reported() {
        let mut state = State::default();
        let request = state.refresh();
        let event = state.update(Message::Loaded {
            request,
            result: Err(Error::Decode("bad json".into())),
        });
        assert!(matches!(event, Event::LoadFailed(Error::Decode(_))));
        assert!(matches!(state.phase(), Phase::Failed(_)));
        assert_eq!(state.update(Message::Retry), Event::Refresh);
    }

    #[test]
    fn view_renders_every_phase() {
        let i18n = I18n::default();
        let mut state = State::default();
        let _ = state.view(&i18n);
        let request = state.refresh();
        state.update(Message::Loaded {
            request,
            result: Ok(AdminDashboard::sample()),
        });
        let _ready = state.view(&i18n);
    }
}
