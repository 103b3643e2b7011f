// SPDX-License-Identifier: MPL-2.0
//! List views shared by the file, photo and video sections.

use super::{Message, State};
use crate::domain::item::{FileItem, FileKind, PhotoItem, SectionKind, VideoItem};
use crate::domain::provider::ProviderSelection;
use crate::i18n::fluent::I18n;
use crate::services::Fetch;
use crate::ui::components::status_panel::{StatusPanel, Tone};
use crate::ui::components::usage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::section::{self, SectionState, Status};
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Ties an item type to its browser section and its presentation.
pub trait BrowserItem: Fetch {
    fn wrap(message: section::Message<Self>) -> Message;
    fn section_mut(state: &mut State) -> &mut SectionState<Self>;

    /// Single-character icon.
    fn glyph(&self) -> &'static str;
    /// Secondary line under the title.
    fn caption(&self) -> String;
    /// Label/value pairs for the detail dialog.
    fn details(&self, i18n: &I18n) -> Vec<(String, String)>;
}

impl BrowserItem for FileItem {
    fn wrap(message: section::Message<Self>) -> Message {
        Message::Files(message)
    }

    fn section_mut(state: &mut State) -> &mut SectionState<Self> {
        &mut state.files
    }

    fn glyph(&self) -> &'static str {
        file_glyph(self.kind())
    }

    fn caption(&self) -> String {
        [self.size.as_deref(), self.date.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ")
    }

    fn details(&self, i18n: &I18n) -> Vec<(String, String)> {
        let mut rows = vec![(i18n.tr("detail-name"), self.name.clone())];
        if let Some(file_type) = &self.file_type {
            rows.push((i18n.tr("detail-type"), file_type.clone()));
        }
        if let Some(size) = &self.size {
            rows.push((i18n.tr("detail-size"), size.clone()));
        }
        if let Some(date) = &self.date {
            rows.push((i18n.tr("detail-date"), date.clone()));
        }
        rows.push((i18n.tr("detail-provider"), self.provider.label().to_string()));
        rows
    }
}

impl BrowserItem for PhotoItem {
    fn wrap(message: section::Message<Self>) -> Message {
        Message::Photos(message)
    }

    fn section_mut(state: &mut State) -> &mut SectionState<Self> {
        &mut state.photos
    }

    fn glyph(&self) -> &'static str {
        "▣"
    }

    fn caption(&self) -> String {
        self.date.clone()
    }

    fn details(&self, i18n: &I18n) -> Vec<(String, String)> {
        vec![
            (i18n.tr("detail-title"), self.title.clone()),
            (i18n.tr("detail-date"), self.date.clone()),
            (i18n.tr("detail-provider"), self.provider.label().to_string()),
            (i18n.tr("detail-source"), self.url.clone()),
        ]
    }
}

impl BrowserItem for VideoItem {
    fn wrap(message: section::Message<Self>) -> Message {
        Message::Videos(message)
    }

    fn section_mut(state: &mut State) -> &mut SectionState<Self> {
        &mut state.videos
    }

    fn glyph(&self) -> &'static str {
        "▶"
    }

    fn caption(&self) -> String {
        format!("{} · {}", self.duration, self.date)
    }

    fn details(&self, i18n: &I18n) -> Vec<(String, String)> {
        vec![
            (i18n.tr("detail-title"), self.title.clone()),
            (i18n.tr("detail-duration"), self.duration.clone()),
            (i18n.tr("detail-date"), self.date.clone()),
            (i18n.tr("detail-provider"), self.provider.label().to_string()),
        ]
    }
}

fn file_glyph(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Pdf => "📕",
        FileKind::Spreadsheet => "▦",
        FileKind::Document => "📝",
        FileKind::Text => "≡",
        FileKind::Code => "</>",
        FileKind::Generic => "📄",
    }
}

fn kind_key(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Files => "kind-files",
        SectionKind::Photos => "kind-photos",
        SectionKind::Videos => "kind-videos",
    }
}

fn header_key(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Files => "section-header-files",
        SectionKind::Photos => "section-header-photos",
        SectionKind::Videos => "section-header-videos",
    }
}

/// Empty-state title and hint for a selection.
pub(super) fn empty_copy(
    kind: SectionKind,
    selection: ProviderSelection,
    i18n: &I18n,
) -> (String, String) {
    let noun = i18n.tr(kind_key(kind));
    match selection {
        ProviderSelection::All => (
            i18n.tr_with_args("section-empty-all", &[("kind", noun.as_str())]),
            i18n.tr("section-empty-all-hint"),
        ),
        ProviderSelection::Only(provider) => (
            i18n.tr_with_args(
                "section-empty-provider",
                &[("kind", noun.as_str()), ("provider", provider.label())],
            ),
            i18n.tr("section-empty-provider-hint"),
        ),
    }
}

pub(super) fn view<'a, T: BrowserItem>(
    section: &'a SectionState<T>,
    selection: ProviderSelection,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match section.status(selection) {
        Status::Loading => StatusPanel::loading(i18n.tr("section-loading")).view(),
        Status::Failed(error) => {
            let noun = i18n.tr(kind_key(T::KIND));
            StatusPanel::new(Tone::Error)
                .title(i18n.tr_with_args("section-load-failed", &[("kind", noun.as_str())]))
                .message(i18n.tr(error.i18n_key()))
                .action(i18n.tr("section-retry"), Message::Retry(T::KIND))
                .view()
        }
        Status::Empty => {
            let (title, hint) = empty_copy(T::KIND, selection, i18n);
            StatusPanel::new(Tone::Neutral).title(title).message(hint).view()
        }
        Status::Populated(_) => {
            let items = section.visible(selection);
            let listing: Element<'a, Message> = match T::KIND {
                SectionKind::Files => list(&items, section, i18n),
                SectionKind::Photos | SectionKind::Videos => grid(&items, section, i18n),
            };
            scrollable(listing).height(Length::Fill).into()
        }
    };

    let count = match section.status(selection) {
        Status::Populated(n) => n,
        _ => 0,
    };
    let count_label = count.to_string();
    let header = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr_with_args(header_key(T::KIND), &[("count", count_label.as_str())]))
                .size(typography::TITLE_MD),
        )
        .push(Space::new().width(Length::Fill))
        .push(usage::chip(selection));

    Column::new()
        .push(header)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn list<'a, T: BrowserItem>(
    items: &[&'a T],
    section: &'a SectionState<T>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    items
        .iter()
        .fold(
            Column::new().spacing(spacing::XXS).padding(spacing::SM),
            |column, item| {
                let text = Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(item.title()).size(typography::BODY_LG))
                    .push(Text::new(item.caption()).size(typography::CAPTION));

                let mut row = Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(Text::new(item.glyph()).size(sizing::ICON_MD))
                    .push(Container::new(text).width(Length::Fill))
                    .push(usage::provider_badge(item.provider()));

                if section.is_in_progress(item.id()) {
                    row = row.push(Text::new(i18n.tr("item-downloading")).size(typography::CAPTION));
                }

                column.push(
                    button(row)
                        .on_press(T::wrap(section::Message::Select(item.id().clone())))
                        .width(Length::Fill)
                        .padding([spacing::XS, spacing::SM])
                        .style(styles::button::row),
                )
            },
        )
        .into()
}

fn grid<'a, T: BrowserItem>(
    items: &[&'a T],
    section: &'a SectionState<T>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let tiles = items.iter().map(|item| {
        let mut tile = Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(item.glyph()).size(sizing::ICON_XL))
            .push(Text::new(item.title()).size(typography::BODY))
            .push(Text::new(item.caption()).size(typography::CAPTION))
            .push(usage::provider_badge(item.provider()));

        if section.is_in_progress(item.id()) {
            tile = tile.push(Text::new(i18n.tr("item-downloading")).size(typography::CAPTION));
        }

        button(
            Container::new(tile)
                .width(Length::Fixed(sizing::TILE_WIDTH))
                .height(Length::Fixed(sizing::TILE_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::panel),
        )
        .on_press(T::wrap(section::Message::Select(item.id().clone())))
        .padding(0.0)
        .style(styles::button::row)
        .into()
    });

    Row::with_children(tiles)
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .wrap()
        .into()
}

/// Modal with the open item's details and its actions, if any.
pub(super) fn detail<'a, T: BrowserItem>(
    section: &'a SectionState<T>,
    i18n: &'a I18n,
) -> Option<Element<'a, Message>> {
    let item = section.detail()?;
    let id = item.id().clone();
    let downloading = section.is_in_progress(&id);

    let rows = item.details(i18n).into_iter().fold(
        Column::new().spacing(spacing::XS),
        |column, (label, value)| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Container::new(Text::new(label).size(typography::BODY_SM))
                            .width(Length::FillPortion(1)),
                    )
                    .push(
                        Container::new(Text::new(value).size(typography::BODY))
                            .width(Length::FillPortion(2)),
                    ),
            )
        },
    );

    let download = if downloading {
        button(Text::new(i18n.tr("item-downloading"))).style(styles::button::unselected)
    } else {
        button(Text::new(i18n.tr("item-download")))
            .on_press(T::wrap(section::Message::Download(id.clone())))
            .style(styles::button::primary)
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(download)
        .push(
            button(Text::new(i18n.tr("item-share")))
                .on_press(T::wrap(section::Message::Share(id.clone())))
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(i18n.tr("item-delete")))
                .on_press(T::wrap(section::Message::Delete(id)))
                .style(styles::button::danger),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("item-close")))
                .on_press(T::wrap(section::Message::CloseDetail))
                .style(styles::button::unselected),
        );

    let dialog = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(Text::new(item.glyph()).size(sizing::ICON_LG))
                    .push(Text::new(item.title()).size(typography::TITLE_SM)),
            )
            .push(rows)
            .push(actions),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::dialog);

    Some(modal(dialog.into(), T::wrap(section::Message::CloseDetail)))
}

/// Centers `content` over a dimmed backdrop; clicking the backdrop emits
/// `on_dismiss`.
pub(super) fn modal<'a>(content: Element<'a, Message>, on_dismiss: Message) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(
            Container::new(opaque(content))
                .width(Length::Shrink)
                .height(Length::Shrink),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop),
    )
    .on_press(on_dismiss);

    opaque(backdrop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::ItemId;
    use crate::domain::provider::Provider;

    #[test]
    fn empty_copy_depends_on_selection() {
        let i18n = I18n::default();
        let (title, hint) = empty_copy(SectionKind::Photos, ProviderSelection::All, &i18n);
        assert_eq!(title, "No photos found");
        assert_eq!(hint, "Try selecting a specific provider");

        let (title, hint) = empty_copy(SectionKind::Files, Provider::Dropbox.into(), &i18n);
        assert_eq!(title, "No files found in Dropbox");
        assert_eq!(hint, "Upload files or select a different provider");
    }

    #[test]
    fn file_caption_skips_missing_fields() {
        let file = FileItem {
            id: ItemId::from(1),
            name: "report.pdf".into(),
            provider: Provider::Device,
            file_type: Some("application/pdf".into()),
            size: Some("2.4 MB".into()),
            date: None,
        };
        assert_eq!(file.caption(), "2.4 MB");
        assert_eq!(file.glyph(), file_glyph(FileKind::Pdf));
    }

    #[test]
    fn file_details_list_optional_fields_only_when_present() {
        let i18n = I18n::default();
        let file = FileItem {
            id: ItemId::from(2),
            name: "notes".into(),
            provider: Provider::OneDrive,
            file_type: None,
            size: None,
            date: None,
        };
        let details = file.details(&i18n);
        assert_eq!(details.len(), 2);
        assert_eq!(details[1].1, "OneDrive");
    }

    #[test]
    fn every_file_kind_has_a_glyph() {
        for kind in [
            FileKind::Pdf,
            FileKind::Spreadsheet,
            FileKind::Document,
            FileKind::Text,
            FileKind::Code,
            FileKind::Generic,
        ] {
            assert!(!file_glyph(kind).is_empty());
        }
    }
}
