// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! Notifications are kept in arrival order. The first [`MAX_VISIBLE`] are on
//! screen; the rest wait and move up as earlier ones are dismissed.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

/// Maximum number of toasts on screen at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Checks auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `notification`. Warnings and errors are also logged.
    pub fn push(&mut self, notification: Notification) {
        let key = notification.message_key();
        match notification.severity() {
            Severity::Warning => log::warn!("notified: {key}"),
            Severity::Error => log::error!("notified: {key}"),
            Severity::Success | Severity::Info => log::debug!("notified: {key}"),
        }
        self.entries.push_back(notification);
    }

    /// Removes the notification with `id`, shown or waiting.
    ///
    /// Returns `false` when no such notification exists.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(position) = self.entries.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.entries.remove(position);
        true
    }

    /// Drops shown notifications whose display time ran out.
    ///
    /// Waiting notifications are never expired.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();
        if !expired.is_empty() {
            self.entries.retain(|n| !expired.contains(&n.id()));
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Notifications currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Drops every notification whose key starts with `prefix`.
    pub fn clear_matching(&mut self, prefix: &str) {
        self.entries
            .retain(|n| !n.message_key().starts_with(prefix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn keys(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message_key).collect()
    }

    #[test]
    fn only_the_first_three_are_shown() {
        let mut manager = Manager::new();
        assert!(!manager.has_notifications());
        for key in ["a", "b", "c", "d"] {
            manager.push(Notification::success(key));
        }
        assert_eq!(keys(&manager), ["a", "b", "c"]);
    }

    #[test]
    fn dismissing_a_shown_toast_reveals_the_next_one() {
        let mut manager = Manager::new();
        let first = Notification::info("a");
        let first_id = first.id();
        manager.push(first);
        for key in ["b", "c", "d"] {
            manager.push(Notification::info(key));
        }

        assert!(manager.dismiss(first_id));
        assert_eq!(keys(&manager), ["b", "c", "d"]);
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn waiting_toast_can_be_dismissed() {
        let mut manager = Manager::new();
        for key in ["a", "b", "c"] {
            manager.push(Notification::info(key));
        }
        let waiting = Notification::info("d");
        let id = waiting.id();
        manager.push(waiting);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(keys(&manager), ["a", "b", "c"]);
    }

    #[test]
    fn errors_stay_until_dismissed() {
        let mut manager = Manager::new();
        manager.push(Notification::error("boom"));
        manager.tick();
        assert_eq!(keys(&manager), ["boom"]);
    }

    #[test]
    fn fresh_success_survives_a_tick() {
        let mut manager = Manager::new();
        manager.push(Notification::success("fresh"));
        manager.tick();
        assert!(manager.has_notifications());
    }

    #[test]
    fn expired_toasts_go_on_tick_but_waiting_ones_stay() {
        let mut manager = Manager::new();
        for key in ["a", "b", "c", "d"] {
            manager.push(Notification::info(key).auto_dismiss(Duration::ZERO));
        }
        manager.handle_message(&Message::Tick);
        assert_eq!(keys(&manager), ["d"]);
    }

    #[test]
    fn clear_matching_keeps_other_keys_in_order() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-fetch-error-files"));
        manager.push(Notification::success("notification-backup-complete"));
        manager.push(Notification::error("notification-fetch-error-photos"));
        manager.push(Notification::error("notification-store-write-error"));

        manager.clear_matching("notification-fetch-error-");

        assert_eq!(
            keys(&manager),
            ["notification-backup-complete", "notification-store-write-error"]
        );
    }
}
