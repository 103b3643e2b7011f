// SPDX-License-Identifier: MPL-2.0
//! Provider drawer: every storage location with its usage.

use super::Message;
use crate::domain::provider::ProviderSelection;
use crate::domain::usage::StorageUsage;
use crate::i18n::fluent::I18n;
use crate::ui::components::usage;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

pub(super) fn view<'a>(active: ProviderSelection, i18n: &'a I18n) -> Element<'a, Message> {
    let header = Text::new(i18n.tr("drawer-title")).size(typography::TITLE_SM);

    let entries = ProviderSelection::options()
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, selection| {
            column.push(entry(selection, selection == active))
        });

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(scrollable(entries).height(Length::Fill)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn entry<'a>(selection: ProviderSelection, is_active: bool) -> Element<'a, Message> {
    let figures = StorageUsage::for_selection(selection);
    let dot_color = palette::from_hex(selection.color());

    let title = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(""))
                .width(Length::Fixed(spacing::SM))
                .height(Length::Fixed(spacing::SM))
                .style(styles::container::badge(dot_color)),
        )
        .push(Text::new(selection.label()).size(typography::BODY_LG))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(usage::usage_label(&figures)).size(typography::CAPTION));

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(usage::meter(figures));

    button(content)
        .on_press(Message::SelectProvider(selection))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(if is_active {
            styles::button::selected
        } else {
            styles::button::row
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::Provider;

    #[test]
    fn drawer_renders_for_every_selection() {
        let i18n = I18n::default();
        for selection in ProviderSelection::options() {
            let _element = view(selection, &i18n);
        }
        let _element = view(Provider::JioCloud.into(), &i18n);
    }
}
