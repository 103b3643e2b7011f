// SPDX-License-Identifier: MPL-2.0
//! Device backup dialog.

use super::sections::modal;
use super::Message;
use crate::domain::provider::Provider;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::backup::{self, BackupState};
use crate::ui::styles;
use iced::widget::{button, pick_list, Column, Container, Row, Space, Text};
use iced::{Element, Length};

pub(super) fn view<'a>(state: &'a BackupState, i18n: &'a I18n) -> Element<'a, Message> {
    let running = state.in_progress();

    let target = pick_list(
        Provider::BACKUP_TARGETS,
        Some(state.target()),
        |provider| Message::Backup(backup::Message::SelectTarget(provider)),
    )
    .width(Length::Fill);

    let target_row = if running {
        // No way to change the destination mid-backup.
        Row::new().push(Text::new(state.target().label()).size(typography::BODY_LG))
    } else {
        Row::new().push(target)
    };

    let start = if running {
        button(Text::new(i18n.tr("backup-in-progress"))).style(styles::button::unselected)
    } else {
        button(Text::new(i18n.tr("backup-start")))
            .on_press(Message::Backup(backup::Message::Start))
            .style(styles::button::primary)
    };

    let close = if running {
        button(Text::new(i18n.tr("backup-close"))).style(styles::button::unselected)
    } else {
        button(Text::new(i18n.tr("backup-close")))
            .on_press(Message::Backup(backup::Message::Close))
            .style(styles::button::unselected)
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("backup-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("backup-description")).size(typography::BODY))
        .push(Text::new(i18n.tr("backup-target-label")).size(typography::BODY_SM))
        .push(target_row)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(Space::new().width(Length::Fill))
                .push(close)
                .push(start),
        );

    let dialog = Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog);

    modal(dialog.into(), Message::Backup(backup::Message::Close))
}
