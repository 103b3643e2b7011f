// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Destination;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    /// Storage browser, the root route.
    Browser,
    Settings,
    Dashboard,
    /// Inventory table, the `storage` route.
    Inventory,
    Admin,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Login,
        Screen::Browser,
        Screen::Settings,
        Screen::Dashboard,
        Screen::Inventory,
        Screen::Admin,
    ];

    /// Route name, as accepted by [`Screen::from_route`].
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Browser => "root",
            Screen::Settings => "settings",
            Screen::Dashboard => "dashboard",
            Screen::Inventory => "storage",
            Screen::Admin => "admin",
        }
    }

    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.route() == route)
    }

    /// Every screen except login requires the logged-in flag.
    #[must_use]
    pub fn is_protected(self) -> bool {
        self != Screen::Login
    }

    /// The screen actually shown when `self` is requested.
    #[must_use]
    pub fn guarded(self, logged_in: bool) -> Self {
        if self.is_protected() && !logged_in {
            Screen::Login
        } else {
            self
        }
    }

    /// Menu entry highlighted while this screen is shown.
    #[must_use]
    pub fn destination(self) -> Destination {
        match self {
            Screen::Login | Screen::Browser => Destination::Browser,
            Screen::Settings => Destination::Settings,
            Screen::Dashboard => Destination::Dashboard,
            Screen::Inventory => Destination::Inventory,
            Screen::Admin => Destination::Admin,
        }
    }
}

impl From<Destination> for Screen {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Browser => Screen::Browser,
            Destination::Dashboard => Screen::Dashboard,
            Destination::Inventory => Screen::Inventory,
            Destination::Admin => Screen::Admin,
            Destination::Settings => Screen::Settings,
        }
    }
}
