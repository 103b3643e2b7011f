// SPDX-License-Identifier: MPL-2.0
//! Storage browser: the provider drawer, the file/photo/video sections and
//! the device backup dialog.
//!
//! The browser owns the [`ProviderSelector`] and the three section states.
//! It starts fetches and transfers itself through the injected
//! [`Services`]; anything the rest of the app must react to comes back as an
//! [`Event`].

mod backup_dialog;
mod drawer;
mod sections;

pub use sections::BrowserItem;

use crate::domain::item::{FileItem, PhotoItem, SectionKind, VideoItem};
use crate::domain::provider::ProviderSelection;
use crate::i18n::fluent::I18n;
use crate::services::Services;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::state::backup::{self, BackupState};
use crate::ui::state::section::{self, SectionState};
use crate::ui::state::{Change, ProviderSelector};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment::Vertical, Element, Length, Task};
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    SelectProvider(ProviderSelection),
    SelectTab(SectionKind),
    Retry(SectionKind),
    Files(section::Message<FileItem>),
    Photos(section::Message<PhotoItem>),
    Videos(section::Message<VideoItem>),
    Backup(backup::Message),
}

/// Outcomes the application has to act on.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
    /// A section loaded successfully; earlier failure toasts are stale.
    Loaded(SectionKind),
}

#[derive(Debug)]
pub struct State {
    selector: ProviderSelector,
    /// Observes the selector; a change seen here refetches every section.
    selection_watch: watch::Receiver<ProviderSelection>,
    drawer_open: bool,
    tab: SectionKind,
    files: SectionState<FileItem>,
    photos: SectionState<PhotoItem>,
    videos: SectionState<VideoItem>,
    backup: BackupState,
}

impl Default for State {
    fn default() -> Self {
        let selector = ProviderSelector::default();
        let selection_watch = selector.subscribe();
        Self {
            selector,
            selection_watch,
            drawer_open: false,
            tab: SectionKind::default(),
            files: SectionState::default(),
            photos: SectionState::default(),
            videos: SectionState::default(),
            backup: BackupState::default(),
        }
    }
}

impl State {
    #[must_use]
    pub fn selection(&self) -> ProviderSelection {
        self.selector.current()
    }

    #[must_use]
    pub fn selector(&self) -> &ProviderSelector {
        &self.selector
    }

    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn active_tab(&self) -> SectionKind {
        self.tab
    }

    #[must_use]
    pub fn files(&self) -> &SectionState<FileItem> {
        &self.files
    }

    #[must_use]
    pub fn photos(&self) -> &SectionState<PhotoItem> {
        &self.photos
    }

    #[must_use]
    pub fn videos(&self) -> &SectionState<VideoItem> {
        &self.videos
    }

    #[must_use]
    pub fn backup(&self) -> &BackupState {
        &self.backup
    }

    /// Re-fetches one section, dropping any response still in flight.
    pub fn refresh<T: BrowserItem>(&mut self, services: &Services) -> Task<Message> {
        let request = T::section_mut(self).refresh();
        Task::perform(T::fetch(services.catalog.as_ref()), move |result| {
            T::wrap(section::Message::Loaded { request, result })
        })
    }

    /// Re-fetches the three sections concurrently.
    pub fn refresh_all(&mut self, services: &Services) -> Task<Message> {
        Task::batch([
            self.refresh::<FileItem>(services),
            self.refresh::<PhotoItem>(services),
            self.refresh::<VideoItem>(services),
        ])
    }

    pub fn update(&mut self, message: Message, services: &Services) -> (Event, Task<Message>) {
        let (event, task) = self.dispatch(message, services);
        let refetch = self.follow_selection(services);
        (event, Task::batch([task, refetch]))
    }

    /// Refetches the three sections when the selection moved since the last
    /// look, whoever wrote it.
    fn follow_selection(&mut self, services: &Services) -> Task<Message> {
        if !self.selection_watch.has_changed().unwrap_or(false) {
            return Task::none();
        }
        let selection = *self.selection_watch.borrow_and_update();
        log::debug!("refetching sections for {}", selection.id());
        self.refresh_all(services)
    }

    fn dispatch(&mut self, message: Message, services: &Services) -> (Event, Task<Message>) {
        match message {
            Message::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
                (Event::None, Task::none())
            }
            Message::SelectProvider(selection) => {
                self.drawer_open = false;
                if self.selector.select(selection) == Change::Unchanged {
                    log::debug!("{} is already selected", selection.id());
                }
                (Event::None, Task::none())
            }
            Message::SelectTab(kind) => {
                self.tab = kind;
                (Event::None, Task::none())
            }
            Message::Retry(kind) => {
                let task = match kind {
                    SectionKind::Files => self.refresh::<FileItem>(services),
                    SectionKind::Photos => self.refresh::<PhotoItem>(services),
                    SectionKind::Videos => self.refresh::<VideoItem>(services),
                };
                (Event::None, task)
            }
            Message::Files(message) => self.update_section(message, services),
            Message::Photos(message) => self.update_section(message, services),
            Message::Videos(message) => self.update_section(message, services),
            Message::Backup(message) => self.update_backup(message, services),
        }
    }

    fn update_section<T: BrowserItem>(
        &mut self,
        message: section::Message<T>,
        services: &Services,
    ) -> (Event, Task<Message>) {
        let kind = T::KIND;
        match T::section_mut(self).update(message) {
            section::Event::None => (Event::None, Task::none()),
            section::Event::Loaded => (Event::Loaded(kind), Task::none()),
            section::Event::LoadFailed(_) => (
                Event::Notify(Notification::error(format!(
                    "notification-fetch-error-{}",
                    kind.endpoint()
                ))),
                Task::none(),
            ),
            section::Event::StartDownload(id) => {
                let task = Task::perform(
                    services.transfer.download(kind, id.clone()),
                    move |result| T::wrap(section::Message::DownloadFinished { id, result }),
                );
                (Event::None, task)
            }
            section::Event::Downloaded { title } => (
                Event::Notify(
                    Notification::success("notification-download-complete")
                        .with_arg("title", title),
                ),
                Task::none(),
            ),
            section::Event::DownloadFailed { title, error } => {
                log::warn!("download of {title} failed: {error}");
                (
                    Event::Notify(
                        Notification::error("notification-download-failed")
                            .with_arg("title", title),
                    ),
                    Task::none(),
                )
            }
            section::Event::Shared { title } => (
                Event::Notify(Notification::info("notification-shared").with_arg("title", title)),
                Task::none(),
            ),
            section::Event::Deleted { title } => (
                Event::Notify(Notification::info("notification-deleted").with_arg("title", title)),
                Task::none(),
            ),
            section::Event::DuplicateRejected(id) => (
                Event::Notify(
                    Notification::warning("notification-duplicate-item")
                        .with_arg("id", id.to_string()),
                ),
                Task::none(),
            ),
        }
    }

    fn update_backup(
        &mut self,
        message: backup::Message,
        services: &Services,
    ) -> (Event, Task<Message>) {
        match self.backup.update(message) {
            backup::Event::None => (Event::None, Task::none()),
            backup::Event::Start(target) => (
                Event::None,
                Task::perform(services.transfer.backup(target), |result| {
                    Message::Backup(backup::Message::Finished(result))
                }),
            ),
            backup::Event::Completed(target) => (
                Event::Notify(
                    Notification::success("notification-backup-complete")
                        .with_arg("provider", target.label()),
                ),
                Task::none(),
            ),
            backup::Event::Failed(_) => (
                Event::Notify(Notification::error("notification-backup-failed")),
                Task::none(),
            ),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let selection = self.selection();

        let drawer_toggle = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new("☰"))
                .push(Text::new(selection.label())),
        )
        .on_press(Message::ToggleDrawer)
        .padding([spacing::XS, spacing::SM])
        .style(if self.drawer_open {
            styles::button::selected
        } else {
            styles::button::unselected
        });

        let backup_button = button(Text::new(i18n.tr("browser-backup-button")))
            .on_press(Message::Backup(backup::Message::Open))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::primary);

        let toolbar = Row::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .align_y(Vertical::Center)
            .push(drawer_toggle)
            .push(Space::new().width(Length::Fill))
            .push(backup_button);

        let tabs = SectionKind::ALL.into_iter().fold(
            Row::new().spacing(spacing::XS).padding([0.0, spacing::SM]),
            |row, kind| {
                let style = if self.tab == kind {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };
                row.push(
                    button(Text::new(i18n.tr(tab_key(kind))).size(typography::BODY))
                        .on_press(Message::SelectTab(kind))
                        .padding([spacing::XS, spacing::MD])
                        .style(style),
                )
            },
        );

        let section = match self.tab {
            SectionKind::Files => sections::view(&self.files, selection, i18n),
            SectionKind::Photos => sections::view(&self.photos, selection, i18n),
            SectionKind::Videos => sections::view(&self.videos, selection, i18n),
        };

        let mut body = Row::new().height(Length::Fill);
        if self.drawer_open {
            body = body.push(
                Container::new(drawer::view(selection, i18n))
                    .width(Length::Fixed(sizing::DRAWER_WIDTH))
                    .height(Length::Fill),
            );
        }
        body = body.push(Container::new(section).width(Length::Fill).height(Length::Fill));

        let base = Column::new()
            .push(toolbar)
            .push(tabs)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill);

        let overlay = if self.backup.is_open() {
            Some(backup_dialog::view(&self.backup, i18n))
        } else {
            match self.tab {
                SectionKind::Files => sections::detail(&self.files, i18n),
                SectionKind::Photos => sections::detail(&self.photos, i18n),
                SectionKind::Videos => sections::detail(&self.videos, i18n),
            }
        };

        match overlay {
            Some(overlay) => Stack::new().push(base).push(overlay).into(),
            None => base.into(),
        }
    }
}

fn tab_key(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Files => "tab-files",
        SectionKind::Photos => "tab-photos",
        SectionKind::Videos => "tab-videos",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::ItemId;
    use crate::domain::provider::Provider;
    use crate::services::{SampleCatalog, SimulatedTransfer};
    use crate::ui::state::Status;
    use std::time::Duration;

    fn services() -> Services {
        Services::new(
            SampleCatalog::new(Duration::ZERO),
            SimulatedTransfer::new(Duration::ZERO, Duration::ZERO),
        )
    }

    fn loaded(state: &mut State, files: Vec<FileItem>) {
        let services = services();
        let request = state.files.refresh();
        state.update(
            Message::Files(section::Message::Loaded {
                request,
                result: Ok(files),
            }),
            &services,
        );
    }

    fn file(id: u64, provider: Provider) -> FileItem {
        FileItem {
            id: ItemId::from(id),
            name: format!("file-{id}"),
            provider,
            file_type: None,
            size: None,
            date: None,
        }
    }

    #[test]
    fn provider_change_sends_every_section_back_to_loading() {
        let services = services();
        let mut state = State::default();
        loaded(&mut state, vec![file(1, Provider::Device)]);
        assert_eq!(
            state.files().status(ProviderSelection::All),
            Status::Populated(1)
        );

        state.update(Message::ToggleDrawer, &services);
        assert!(state.drawer_open());
        let _ = state.update(
            Message::SelectProvider(Provider::Dropbox.into()),
            &services,
        );

        assert!(!state.drawer_open());
        assert_eq!(state.selection(), ProviderSelection::Only(Provider::Dropbox));
        assert_eq!(state.files().status(state.selection()), Status::Loading);
        assert_eq!(state.photos().status(state.selection()), Status::Loading);
        assert_eq!(state.videos().status(state.selection()), Status::Loading);
    }

    #[test]
    fn reselecting_active_provider_keeps_sections() {
        let services = services();
        let mut state = State::default();
        loaded(&mut state, vec![file(1, Provider::Device)]);

        let _ = state.update(Message::SelectProvider(ProviderSelection::All), &services);
        assert_eq!(
            state.files().status(ProviderSelection::All),
            Status::Populated(1)
        );
    }

    #[test]
    fn selection_written_elsewhere_is_observed_on_next_update() {
        let services = services();
        let mut state = State::default();
        loaded(&mut state, vec![file(1, Provider::Device)]);

        state.selector().select(Provider::ICloud.into());
        assert_eq!(
            state.files().status(ProviderSelection::All),
            Status::Populated(1)
        );

        let _ = state.update(Message::SelectTab(SectionKind::Photos), &services);
        assert_eq!(state.files().status(state.selection()), Status::Loading);
        assert_eq!(state.videos().status(state.selection()), Status::Loading);

        loaded(&mut state, vec![file(2, Provider::ICloud)]);
        assert_eq!(
            state.files().status(state.selection()),
            Status::Populated(1)
        );
    }

    #[test]
    fn failed_fetch_raises_error_toast() {
        let services = services();
        let mut state = State::default();
        let request = state.files.refresh();
        let (event, _) = state.update(
            Message::Files(section::Message::Loaded {
                request,
                result: Err(crate::error::Error::Network("timeout".into())),
            }),
            &services,
        );
        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-fetch-error-files");
            }
            other => panic!("expected a notification, got {other:?}"),
        }
    }

    #[test]
    fn backup_completion_notifies_with_target() {
        let services = services();
        let mut state = State::default();
        state.update(Message::Backup(backup::Message::Open), &services);
        let _ = state.update(Message::Backup(backup::Message::Start), &services);
        assert!(state.backup().in_progress());

        let (event, _) = state.update(
            Message::Backup(backup::Message::Finished(Ok(()))),
            &services,
        );
        assert!(!state.backup().in_progress());
        assert!(state.backup().is_open());
        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.message_key(), "notification-backup-complete");
                assert_eq!(
                    notification.message_args(),
                    &[("provider".to_string(), "Google Drive".to_string())]
                );
            }
            other => panic!("expected a notification, got {other:?}"),
        }
    }

    #[test]
    fn tabs_switch_sections() {
        let services = services();
        let mut state = State::default();
        assert_eq!(state.active_tab(), SectionKind::Files);
        state.update(Message::SelectTab(SectionKind::Videos), &services);
        assert_eq!(state.active_tab(), SectionKind::Videos);
    }

    #[test]
    fn view_renders_with_drawer_and_dialog() {
        let services = services();
        let i18n = I18n::default();
        let mut state = State::default();
        loaded(&mut state, vec![file(1, Provider::Device)]);
        state.update(Message::ToggleDrawer, &services);
        state.update(Message::Backup(backup::Message::Open), &services);
        let _element = state.view(&i18n);
    }
}
