// SPDX-License-Identifier: MPL-2.0
//! Device backup dialog state.

use crate::domain::provider::Provider;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupState {
    open: bool,
    target: Provider,
    in_progress: bool,
}

impl Default for BackupState {
    fn default() -> Self {
        Self {
            open: false,
            target: Provider::GoogleDrive,
            in_progress: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Open,
    Close,
    SelectTarget(Provider),
    Start,
    Finished(Result<()>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Run the backup to this target and report back with `Finished`.
    Start(Provider),
    Completed(Provider),
    Failed(crate::error::Error),
}

impl BackupState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn target(&self) -> Provider {
        self.target
    }

    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Open => {
                self.open = true;
                Event::None
            }
            Message::Close => {
                if !self.in_progress {
                    self.open = false;
                }
                Event::None
            }
            Message::SelectTarget(target) => {
                if !self.in_progress && target.is_cloud() {
                    self.target = target;
                }
                Event::None
            }
            Message::Start => {
                if self.in_progress {
                    return Event::None;
                }
                self.in_progress = true;
                Event::Start(self.target)
            }
            Message::Finished(result) => {
                if !self.in_progress {
                    return Event::None;
                }
                self.in_progress = false;
                match result {
                    Ok(()) => Event::Completed(self.target),
                    Err(error) => {
                        log::warn!("backup to {} failed: {error}", self.target.id());
                        Event::Failed(error)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn started() -> BackupState {
        let mut state = BackupState::default();
        state.update(Message::Open);
        state.update(Message::SelectTarget(Provider::Dropbox));
        assert_eq!(state.update(Message::Start), Event::Start(Provider::Dropbox));
        state
    }

    #[test]
    fn defaults_to_google_drive_and_closed() {
        let state = BackupState::default();
        assert_eq!(state.target(), Provider::GoogleDrive);
        assert!(!state.is_open());
        assert!(!state.in_progress());
    }

    #[test]
    fn start_sets_in_progress_immediately() {
        let state = started();
        assert!(state.in_progress());
    }

    #[test]
    fn completion_only_clears_in_progress() {
        let mut state = started();
        let before = BackupState {
            in_progress: false,
            ..state.clone()
        };

        let event = state.update(Message::Finished(Ok(())));
        assert_eq!(event, Event::Completed(Provider::Dropbox));
        assert_eq!(state, before);
    }

    #[test]
    fn running_backup_locks_dialog() {
        let mut state = started();

        state.update(Message::Close);
        assert!(state.is_open());

        state.update(Message::SelectTarget(Provider::OneDrive));
        assert_eq!(state.target(), Provider::Dropbox);

        assert_eq!(state.update(Message::Start), Event::None);
    }

    #[test]
    fn device_is_not_a_backup_target() {
        let mut state = BackupState::default();
        state.update(Message::SelectTarget(Provider::Device));
        assert_eq!(state.target(), Provider::GoogleDrive);
    }

    #[test]
    fn failure_is_reported_and_unlocks() {
        let mut state = started();
        let event = state.update(Message::Finished(Err(Error::Network("down".into()))));
        assert!(matches!(event, Event::Failed(Error::Network(_))));
        assert!(!state.in_progress());
        state.update(Message::Close);
        assert!(!state.is_open());
    }
}
