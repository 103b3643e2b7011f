// SPDX-License-Identifier: MPL-2.0
//! Storage providers and the provider selection.
//!
//! [`Provider`] is the closed set of places an item can live. The wildcard
//! `all` only exists on [`ProviderSelection`], so a list item can never be
//! tagged with it.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire identifier of the wildcard selection.
pub const ALL_ID: &str = "all";

/// A storage location an item can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    Device,
    GoogleDrive,
    OneDrive,
    Dropbox,
    ICloud,
    JioCloud,
}

impl Provider {
    /// Every provider, in drawer order.
    pub const ALL: [Provider; 6] = [
        Provider::Device,
        Provider::GoogleDrive,
        Provider::OneDrive,
        Provider::Dropbox,
        Provider::ICloud,
        Provider::JioCloud,
    ];

    /// Providers that can receive a device backup.
    pub const BACKUP_TARGETS: [Provider; 5] = [
        Provider::GoogleDrive,
        Provider::OneDrive,
        Provider::Dropbox,
        Provider::ICloud,
        Provider::JioCloud,
    ];

    /// Kebab-case identifier used on the wire and in the key-value store.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Provider::Device => "device",
            Provider::GoogleDrive => "google-drive",
            Provider::OneDrive => "onedrive",
            Provider::Dropbox => "dropbox",
            Provider::ICloud => "icloud",
            Provider::JioCloud => "jio-cloud",
        }
    }

    /// Brand name shown to the user. Product names are not translated.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Provider::Device => "This Device",
            Provider::GoogleDrive => "Google Drive",
            Provider::OneDrive => "OneDrive",
            Provider::Dropbox => "Dropbox",
            Provider::ICloud => "iCloud",
            Provider::JioCloud => "Jio Cloud",
        }
    }

    /// Brand colour as `0xRRGGBB`.
    #[must_use]
    pub fn color(self) -> u32 {
        match self {
            Provider::Device => 0x4caf50,
            Provider::GoogleDrive => 0x4285f4,
            Provider::OneDrive => 0x0078d4,
            Provider::Dropbox => 0x0061ff,
            Provider::ICloud => 0xa2aaad,
            Provider::JioCloud => 0x8ec928,
        }
    }

    #[must_use]
    pub fn is_cloud(self) -> bool {
        !matches!(self, Provider::Device)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|provider| provider.id() == s)
            .ok_or_else(|| Error::InvalidProvider(s.to_string()))
    }
}

impl Serialize for Provider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The active provider filter: everything, or exactly one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderSelection {
    #[default]
    All,
    Only(Provider),
}

impl ProviderSelection {
    /// Every selection, wildcard first. This is the drawer's list.
    #[must_use]
    pub fn options() -> Vec<ProviderSelection> {
        std::iter::once(ProviderSelection::All)
            .chain(Provider::ALL.into_iter().map(ProviderSelection::Only))
            .collect()
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ProviderSelection::All => ALL_ID,
            ProviderSelection::Only(provider) => provider.id(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProviderSelection::All => "All Storage",
            ProviderSelection::Only(provider) => provider.label(),
        }
    }

    #[must_use]
    pub fn color(self) -> u32 {
        match self {
            ProviderSelection::All => 0x607d8b,
            ProviderSelection::Only(provider) => provider.color(),
        }
    }

    /// Returns `true` if an item tagged with `provider` passes this selection.
    #[must_use]
    pub fn matches(self, provider: Provider) -> bool {
        match self {
            ProviderSelection::All => true,
            ProviderSelection::Only(selected) => selected == provider,
        }
    }

    /// Returns `true` if this selection narrows the list (not `All`).
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, ProviderSelection::All)
    }
}

impl From<Provider> for ProviderSelection {
    fn from(provider: Provider) -> Self {
        ProviderSelection::Only(provider)
    }
}

impl fmt::Display for ProviderSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProviderSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_ID {
            Ok(ProviderSelection::All)
        } else {
            s.parse().map(ProviderSelection::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_ids_round_trip_through_from_str() {
        for provider in Provider::ALL {
            assert_eq!(provider.id().parse::<Provider>(), Ok(provider));
        }
    }

    #[test]
    fn wildcard_is_not_a_provider() {
        assert_eq!(
            "all".parse::<Provider>(),
            Err(Error::InvalidProvider("all".to_string()))
        );
    }

    #[test]
    fn selection_parses_wildcard_and_providers() {
        assert_eq!("all".parse(), Ok(ProviderSelection::All));
        assert_eq!(
            "jio-cloud".parse(),
            Ok(ProviderSelection::Only(Provider::JioCloud))
        );
        assert!("mega".parse::<ProviderSelection>().is_err());
    }

    #[test]
    fn backup_targets_exclude_device() {
        assert!(!Provider::BACKUP_TARGETS.contains(&Provider::Device));
        assert!(Provider::BACKUP_TARGETS.iter().all(|p| p.is_cloud()));
    }

    #[test]
    fn options_list_wildcard_first() {
        let options = ProviderSelection::options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], ProviderSelection::All);
        assert_eq!(options[1].label(), "This Device");
    }

    #[test]
    fn all_matches_every_provider() {
        assert!(Provider::ALL
            .into_iter()
            .all(|p| ProviderSelection::All.matches(p)));
        assert!(!ProviderSelection::Only(Provider::Dropbox).matches(Provider::Device));
    }

    #[test]
    fn provider_deserializes_from_kebab_case() {
        let provider: Provider = serde_json::from_str("\"google-drive\"").unwrap();
        assert_eq!(provider, Provider::GoogleDrive);
        assert!(serde_json::from_str::<Provider>("\"all\"").is_err());
    }
}
