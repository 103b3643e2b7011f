// SPDX-License-Identifier: MPL-2.0
//! State machine shared by the file, photo and video sections.
//!
//! A section owns its full item list; what it shows is that list filtered by
//! the active provider selection. Every fetch carries a request generation so
//! only the response to the latest trigger is applied.

use crate::domain::filter::{filter_by_provider, remove_by_id};
use crate::domain::item::{CatalogItem, ItemId};
use crate::domain::provider::ProviderSelection;
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// Where the section is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed(Error),
}

/// What the section shows for a given selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    Loading,
    /// Loaded, but nothing passes the selection.
    Empty,
    Populated(usize),
    Failed(&'a Error),
}

#[derive(Debug, Clone)]
pub enum Message<T> {
    Loaded { request: u64, result: Result<Vec<T>> },
    Select(ItemId),
    CloseDetail,
    Delete(ItemId),
    Download(ItemId),
    DownloadFinished { id: ItemId, result: Result<()> },
    Share(ItemId),
    Add(T),
}

/// Outcomes the browser turns into tasks or notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Loaded,
    LoadFailed(Error),
    /// Run the transfer for this item and report back with `DownloadFinished`.
    StartDownload(ItemId),
    Downloaded { title: String },
    DownloadFailed { title: String, error: Error },
    Shared { title: String },
    Deleted { title: String },
    /// An item with the same id is already listed.
    DuplicateRejected(ItemId),
}

#[derive(Debug, Clone)]
pub struct SectionState<T> {
    items: Vec<T>,
    phase: Phase,
    request: u64,
    detail: Option<ItemId>,
    in_progress: BTreeSet<ItemId>,
}

impl<T: CatalogItem> Default for SectionState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogItem> SectionState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Loading,
            request: 0,
            detail: None,
            in_progress: BTreeSet::new(),
        }
    }

    /// A section already loaded with `items`.
    #[must_use]
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            phase: Phase::Ready,
            ..Self::new()
        }
    }

    /// Starts a new fetch generation and returns its id.
    ///
    /// Responses for earlier generations are ignored from now on.
    pub fn refresh(&mut self) -> u64 {
        self.request += 1;
        self.phase = Phase::Loading;
        log::debug!("{:?} fetch #{} started", T::KIND, self.request);
        self.request
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn visible(&self, selection: ProviderSelection) -> Vec<&T> {
        filter_by_provider(&self.items, selection)
    }

    #[must_use]
    pub fn status(&self, selection: ProviderSelection) -> Status<'_> {
        match &self.phase {
            Phase::Loading => Status::Loading,
            Phase::Failed(error) => Status::Failed(error),
            Phase::Ready => match self.visible(selection).len() {
                0 => Status::Empty,
                n => Status::Populated(n),
            },
        }
    }

    fn find(&self, id: &ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The item open in the detail view.
    #[must_use]
    pub fn detail(&self) -> Option<&T> {
        self.detail.as_ref().and_then(|id| self.find(id))
    }

    #[must_use]
    pub fn is_in_progress(&self, id: &ItemId) -> bool {
        self.in_progress.contains(id)
    }

    pub fn update(&mut self, message: Message<T>) -> Event {
        match message {
            Message::Loaded { request, result } => self.apply_response(request, result),
            Message::Select(id) => {
                if self.find(&id).is_some() {
                    self.detail = Some(id);
                }
                Event::None
            }
            Message::CloseDetail => {
                self.detail = None;
                Event::None
            }
            Message::Delete(id) => match remove_by_id(&mut self.items, &id) {
                Some(removed) => {
                    if self.detail.as_ref() == Some(&id) {
                        self.detail = None;
                    }
                    self.in_progress.remove(&id);
                    Event::Deleted {
                        title: removed.title().to_string(),
                    }
                }
                None => Event::None,
            },
            Message::Download(id) => {
                if self.find(&id).is_none() || !self.in_progress.insert(id.clone()) {
                    return Event::None;
                }
                Event::StartDownload(id)
            }
            Message::DownloadFinished { id, result } => {
                if !self.in_progress.remove(&id) {
                    // Deleted while downloading.
                    return Event::None;
                }
                let title = self
                    .find(&id)
                    .map(|item| item.title().to_string())
                    .unwrap_or_else(|| id.to_string());
                match result {
                    Ok(()) => Event::Downloaded { title },
                    Err(error) => Event::DownloadFailed { title, error },
                }
            }
            Message::Share(id) => match self.find(&id) {
                Some(item) => Event::Shared {
                    title: item.title().to_string(),
                },
                None => Event::None,
            },
            Message::Add(item) => {
                if self.find(item.id()).is_some() {
                    return Event::DuplicateRejected(item.id().clone());
                }
                self.items.push(item);
                Event::None
            }
        }
    }

    fn apply_response(&mut self, request: u64, result: Result<Vec<T>>) -> Event {
        if request != self.request {
            log::debug!(
                "{:?} dropped stale response #{request} (current #{})",
                T::KIND,
                self.request
            );
            return Event::None;
        }

        self.detail = None;
        self.in_progress.clear();
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = Phase::Ready;
                Event::Loaded
            }
            Err(error) => {
                log::warn!("{:?} fetch failed: {error}", T::KIND);
                self.items.clear();
                self.phase = Phase::Failed(error.clone());
                Event::LoadFailed(error)
            }
        }
    }
}
