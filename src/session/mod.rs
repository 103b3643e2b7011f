// SPDX-License-Identifier: MPL-2.0
//! Login state and user toggles kept in a flat key-value store.
//!
//! The [`Session`] is created once at startup and handed to the application,
//! so tests can inject a [`MemoryStore`] instead of touching disk.
//!
//! Values are strings. A flag is on only when its value is exactly `"true"`;
//! a missing or malformed value reads as off.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::error::Result;
use std::fmt;

/// Store keys. The layout is flat and carries no schema version.
pub mod keys {
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const USER_EMAIL: &str = "userEmail";
    pub const GOOGLE_AUTH: &str = "googleAuth";
    pub const USER_ROLE: &str = "userRole";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const AUTO_SAVE: &str = "autoSave";
}

const TRUE: &str = "true";
const FALSE: &str = "false";

/// A user toggle persisted as `"true"` / `"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Notifications,
    AutoSave,
}

impl Setting {
    pub const ALL: [Setting; 2] = [Setting::Notifications, Setting::AutoSave];

    /// The store key, also used as the setting's display name.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Setting::Notifications => keys::NOTIFICATIONS,
            Setting::AutoSave => keys::AUTO_SAVE,
        }
    }
}

pub struct Session {
    store: Box<dyn KeyValueStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl Session {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// A session over an empty [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    fn flag(&self, key: &str) -> bool {
        self.store.get(key).is_some_and(|value| value == TRUE)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.flag(keys::IS_LOGGED_IN)
    }

    #[must_use]
    pub fn user_email(&self) -> Option<String> {
        self.store.get(keys::USER_EMAIL)
    }

    #[must_use]
    pub fn is_google_auth(&self) -> bool {
        self.flag(keys::GOOGLE_AUTH)
    }

    #[must_use]
    pub fn user_role(&self) -> Option<String> {
        self.store.get(keys::USER_ROLE).filter(|role| !role.is_empty())
    }

    /// Marks the session as signed in with an email address.
    ///
    /// The logged-in flag is written last and a failed sign-in removes the
    /// address again.
    pub fn sign_in_with_email(&mut self, email: &str) -> Result<()> {
        self.store.set(keys::USER_EMAIL, email)?;
        self.mark_logged_in(keys::USER_EMAIL)?;
        log::info!("signed in as {email}");
        Ok(())
    }

    /// Marks the session as signed in through the simulated Google flow.
    pub fn sign_in_with_google(&mut self) -> Result<()> {
        self.store.set(keys::GOOGLE_AUTH, TRUE)?;
        self.mark_logged_in(keys::GOOGLE_AUTH)?;
        log::info!("signed in with Google");
        Ok(())
    }

    fn mark_logged_in(&mut self, detail_key: &str) -> Result<()> {
        self.store.set(keys::IS_LOGGED_IN, TRUE).inspect_err(|_| {
            if let Err(err) = self.store.remove(detail_key) {
                log::warn!("cannot roll back {detail_key}: {err}");
            }
        })
    }

    /// Clears the login keys. Settings toggles and the role are kept.
    pub fn sign_out(&mut self) -> Result<()> {
        self.store.remove(keys::IS_LOGGED_IN)?;
        self.store.remove(keys::USER_EMAIL)?;
        self.store.remove(keys::GOOGLE_AUTH)?;
        log::info!("signed out");
        Ok(())
    }

    #[must_use]
    pub fn setting(&self, setting: Setting) -> bool {
        self.flag(setting.key())
    }

    pub fn set_setting(&mut self, setting: Setting, enabled: bool) -> Result<()> {
        self.store
            .set(setting.key(), if enabled { TRUE } else { FALSE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Store whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Store("read-only".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(Error::Store("read-only".to_string()))
        }
    }

    #[test]
    fn absent_flag_means_logged_out() {
        assert!(!Session::in_memory().is_logged_in());
    }

    #[test]
    fn only_literal_true_means_logged_in() {
        for value in ["TRUE", "1", "yes", "true ", ""] {
            let session = Session::new(MemoryStore::with_entries([(keys::IS_LOGGED_IN, value)]));
            assert!(!session.is_logged_in(), "{value:?} must read as logged out");
        }
        let session = Session::new(MemoryStore::with_entries([(keys::IS_LOGGED_IN, "true")]));
        assert!(session.is_logged_in());
    }

    #[test]
    fn email_sign_in_stores_flag_and_address() {
        let mut session = Session::in_memory();
        session.sign_in_with_email("ana@example.com").unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.user_email().as_deref(), Some("ana@example.com"));
        assert!(!session.is_google_auth());
    }

    #[test]
    fn sign_out_keeps_settings() {
        let mut session = Session::in_memory();
        session.sign_in_with_google().unwrap();
        session.set_setting(Setting::AutoSave, true).unwrap();

        session.sign_out().unwrap();

        assert!(!session.is_logged_in());
        assert!(!session.is_google_auth());
        assert!(session.setting(Setting::AutoSave));
    }

    #[test]
    fn malformed_setting_reads_as_disabled() {
        let session = Session::new(MemoryStore::with_entries([(keys::NOTIFICATIONS, "on")]));
        assert!(!session.setting(Setting::Notifications));
    }

    #[test]
    fn failed_write_is_reported() {
        let mut session = Session::new(ReadOnlyStore(MemoryStore::new()));
        assert!(session.set_setting(Setting::Notifications, true).is_err());
        assert!(session.sign_in_with_email("a@b.c").is_err());
        assert!(!session.is_logged_in());
    }

    /// Store whose first write succeeds and every later one fails.
    struct FailsAfterFirstWrite {
        inner: MemoryStore,
        writes: usize,
    }

    impl KeyValueStore for FailsAfterFirstWrite {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.writes += 1;
            if self.writes > 1 {
                return Err(Error::Store("disk full".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    fn fails_after_first_write() -> Session {
        Session::new(FailsAfterFirstWrite {
            inner: MemoryStore::new(),
            writes: 0,
        })
    }

    #[test]
    fn interrupted_email_sign_in_stays_logged_out() {
        let mut session = fails_after_first_write();
        assert!(session.sign_in_with_email("a@b.c").is_err());
        assert!(!session.is_logged_in());
        assert!(session.user_email().is_none());
    }

    #[test]
    fn interrupted_google_sign_in_stays_logged_out() {
        let mut session = fails_after_first_write();
        assert!(session.sign_in_with_google().is_err());
        assert!(!session.is_logged_in());
        assert!(!session.is_google_auth());
    }

    #[test]
    fn role_is_read_when_present() {
        let session = Session::new(MemoryStore::with_entries([(keys::USER_ROLE, "admin")]));
        assert_eq!(session.user_role().as_deref(), Some("admin"));
        assert!(Session::in_memory().user_role().is_none());
    }
}
