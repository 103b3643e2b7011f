// SPDX-License-Identifier: MPL-2.0
//! The active storage provider, shared by every list section.
//!
//! The storage browser owns one [`ProviderSelector`] and keeps a
//! [`subscribe`](ProviderSelector::subscribe)d receiver on it: every change
//! seen there refetches the file, photo and video sections.

use crate::domain::provider::ProviderSelection;
use crate::error::Result;
use tokio::sync::watch;

/// Outcome of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Changed,
    /// The value was already active; subscribers were not notified.
    Unchanged,
}

#[derive(Debug)]
pub struct ProviderSelector {
    sender: watch::Sender<ProviderSelection>,
}

impl Default for ProviderSelector {
    fn default() -> Self {
        Self::new(ProviderSelection::default())
    }
}

impl ProviderSelector {
    #[must_use]
    pub fn new(initial: ProviderSelection) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    #[must_use]
    pub fn current(&self) -> ProviderSelection {
        *self.sender.borrow()
    }

    /// A receiver that observes every change from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ProviderSelection> {
        self.sender.subscribe()
    }

    pub fn select(&self, selection: ProviderSelection) -> Change {
        let changed = self.sender.send_if_modified(|current| {
            if *current == selection {
                return false;
            }
            *current = selection;
            true
        });

        if changed {
            log::debug!("provider selection is now {}", selection.id());
            Change::Changed
        } else {
            Change::Unchanged
        }
    }

    /// Parses a wire identifier (`"all"`, `"dropbox"`, ...) and selects it.
    ///
    /// Unknown identifiers are rejected and leave the selection untouched.
    pub fn select_id(&self, id: &str) -> Result<Change> {
        let selection = id.parse::<ProviderSelection>()?;
        Ok(self.select(selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::Provider;
    use crate::error::Error;

    #[test]
    fn starts_on_all() {
        assert_eq!(ProviderSelector::default().current(), ProviderSelection::All);
    }

    #[test]
    fn selecting_active_value_is_a_silent_no_op() {
        let selector = ProviderSelector::default();
        let mut receiver = selector.subscribe();

        assert_eq!(selector.select(ProviderSelection::All), Change::Unchanged);
        assert!(!receiver.has_changed().unwrap());

        assert_eq!(
            selector.select(Provider::Dropbox.into()),
            Change::Changed
        );
        assert!(receiver.has_changed().unwrap());
        assert_eq!(
            *receiver.borrow_and_update(),
            ProviderSelection::Only(Provider::Dropbox)
        );
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let selector = ProviderSelector::new(Provider::Device.into());
        let result = selector.select_id("floppy-disk");
        assert!(matches!(result, Err(Error::InvalidProvider(_))));
        assert_eq!(selector.current(), ProviderSelection::Only(Provider::Device));
    }

    #[test]
    fn identifiers_select_providers_and_wildcard() {
        let selector = ProviderSelector::default();
        assert_eq!(selector.select_id("icloud").unwrap(), Change::Changed);
        assert_eq!(selector.current(), ProviderSelection::Only(Provider::ICloud));
        assert_eq!(selector.select_id("all").unwrap(), Change::Changed);
        assert_eq!(selector.current(), ProviderSelection::All);
    }
}
