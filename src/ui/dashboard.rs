// SPDX-License-Identifier: MPL-2.0
//! Inventory dashboard: statistics, category breakdown, weekly and recent
//! activity, and shortcuts to the other screens.

use crate::domain::dashboard::{
    category_percentages, peak_activity, statistics, RECENT_ACTIVITY, WEEKLY_ACTIVITY,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, progress_bar, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    AddItem,
    ViewInventory,
    UpdateSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenInventory,
    OpenSettings,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::AddItem | Message::ViewInventory => Event::OpenInventory,
        Message::UpdateSettings => Event::OpenSettings,
    }
}

/// Bar length for a daily count, relative to the busiest day.
fn activity_ratio(count: u32, peak: u32) -> f32 {
    if peak == 0 {
        0.0
    } else {
        count as f32 / peak as f32
    }
}

fn card<'a>(title: String, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
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

fn bar<'a>(label: String, value: f32, caption: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(Text::new(label).size(typography::BODY)).width(Length::Fixed(110.0)))
        .push(
            progress_bar(0.0..=1.0, value)
                .girth(sizing::BAR_HEIGHT)
                .style(|theme: &Theme| progress_bar::Style {
                    background: theme.extended_palette().background.strong.color.into(),
                    bar: palette::PRIMARY_500.into(),
                    border: iced::Border::default(),
                }),
        )
        .push(
            Container::new(Text::new(caption).size(typography::CAPTION))
                .width(Length::Fixed(40.0)),
        )
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let stats = statistics();

    let stat = |label: String, value: String| {
        Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(value).size(typography::TITLE_LG))
                .push(Text::new(label).size(typography::BODY_SM)),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
    };

    let statistics_row = Row::new()
        .spacing(spacing::SM)
        .push(stat(i18n.tr("dashboard-total-items"), stats.total_items.to_string()))
        .push(stat(i18n.tr("dashboard-categories"), stats.categories.to_string()))
        .push(stat(i18n.tr("dashboard-locations"), stats.locations.to_string()))
        .push(stat(i18n.tr("dashboard-last-update"), stats.last_update_label()));

    let categories = category_percentages().into_iter().fold(
        Column::new().spacing(spacing::XS),
        |column, (name, percent)| {
            column.push(bar(
                name.to_string(),
                percent as f32 / 100.0,
                format!("{percent}%"),
            ))
        },
    );

    let peak = peak_activity();
    let weekly = WEEKLY_ACTIVITY
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, day| {
            column.push(bar(
                day.day.to_string(),
                activity_ratio(day.count, peak),
                day.count.to_string(),
            ))
        });

    let recent = RECENT_ACTIVITY
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, entry| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(i18n.tr_with_args(
                            "dashboard-activity-entry",
                            &[
                                ("action", entry.action),
                                ("item", entry.item),
                                ("user", entry.user),
                            ],
                        ))
                        .size(typography::BODY),
                    )
                    .push(Space::new().width(Length::Fill))
                    .push(Text::new(entry.time).size(typography::CAPTION)),
            )
        });

    let action = |label: String, message: Message| {
        button(Text::new(label))
            .on_press(message)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
    };
    let quick_actions = Row::new()
        .spacing(spacing::SM)
        .push(action(i18n.tr("dashboard-action-add"), Message::AddItem))
        .push(action(i18n.tr("dashboard-action-view"), Message::ViewInventory))
        .push(action(i18n.tr("dashboard-action-settings"), Message::UpdateSettings));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr("dashboard-title")).size(typography::TITLE_LG))
        .push(statistics_row)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(card(i18n.tr("dashboard-category-breakdown"), categories))
                .push(card(i18n.tr("dashboard-weekly-activity"), weekly)),
        )
        .push(card(i18n.tr("dashboard-recent-activity"), recent))
        .push(card(i18n.tr("dashboard-quick-actions"), quick_actions));

    scrollable(content).height(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_actions_navigate() {
        assert_eq!(update(Message::AddItem), Event::OpenInventory);
        assert_eq!(update(Message::ViewInventory), Event::OpenInventory);
        assert_eq!(update(Message::UpdateSettings), Event::OpenSettings);
    }

    #[test]
    fn activity_ratio_scales_to_peak() {
        assert_eq!(activity_ratio(7, 7), 1.0);
        assert_eq!(activity_ratio(0, 7), 0.0);
        assert_eq!(activity_ratio(3, 0), 0.0);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
