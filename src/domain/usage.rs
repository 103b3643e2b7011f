// SPDX-License-Identifier: MPL-2.0
//! Storage usage figures per provider selection.

use super::provider::{Provider, ProviderSelection};

/// Usage above this percentage is reported as [`UsageLevel::Warning`].
pub const WARNING_THRESHOLD_PERCENT: u32 = 70;

/// Usage above this percentage is reported as [`UsageLevel::Critical`].
pub const CRITICAL_THRESHOLD_PERCENT: u32 = 90;

/// How full a storage location is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    Warning,
    Critical,
}

/// Used and total capacity (in GB) plus the number of stored items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageUsage {
    pub used_gb: f64,
    pub total_gb: f64,
    pub items: u32,
}

impl StorageUsage {
    const fn new(used_gb: f64, total_gb: f64, items: u32) -> Self {
        Self {
            used_gb,
            total_gb,
            items,
        }
    }

    /// Looks up the usage record for a selection.
    #[must_use]
    pub fn for_selection(selection: ProviderSelection) -> Self {
        match selection {
            ProviderSelection::All => Self::new(22.5, 130.0, 65),
            ProviderSelection::Only(provider) => Self::for_provider(provider),
        }
    }

    #[must_use]
    pub fn for_provider(provider: Provider) -> Self {
        match provider {
            Provider::Device => Self::new(10.2, 32.0, 42),
            Provider::GoogleDrive => Self::new(8.5, 15.0, 12),
            Provider::OneDrive => Self::new(2.4, 5.0, 8),
            Provider::Dropbox => Self::new(1.4, 2.0, 3),
            Provider::ICloud => Self::new(0.0, 5.0, 0),
            Provider::JioCloud => Self::new(0.0, 10.0, 0),
        }
    }

    /// Rounded share of used capacity. A zero total reads as 0 %.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total_gb <= 0.0 {
            return 0;
        }
        let ratio = (self.used_gb / self.total_gb * 100.0).round();
        ratio.clamp(0.0, f64::from(u32::MAX)) as u32
    }

    #[must_use]
    pub fn level(&self) -> UsageLevel {
        let percent = self.percent();
        if percent > CRITICAL_THRESHOLD_PERCENT {
            UsageLevel::Critical
        } else if percent > WARNING_THRESHOLD_PERCENT {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_storage_totals_match_table() {
        let usage = StorageUsage::for_selection(ProviderSelection::All);
        assert_eq!(usage.items, 65);
        assert_eq!(usage.percent(), 17);
        assert_eq!(usage.level(), UsageLevel::Normal);
    }

    #[test]
    fn google_drive_is_normal_at_57_percent() {
        let usage = StorageUsage::for_provider(Provider::GoogleDrive);
        assert_eq!(usage.percent(), 57);
        assert_eq!(usage.level(), UsageLevel::Normal);
    }

    #[test]
    fn dropbox_is_warning_at_70_percent_boundary() {
        // 1.4 / 2 = 70 %, which is not *above* the warning threshold.
        let usage = StorageUsage::for_provider(Provider::Dropbox);
        assert_eq!(usage.percent(), 70);
        assert_eq!(usage.level(), UsageLevel::Normal);
    }

    #[test]
    fn levels_follow_thresholds() {
        assert_eq!(StorageUsage::new(7.1, 10.0, 0).level(), UsageLevel::Warning);
        assert_eq!(StorageUsage::new(9.0, 10.0, 0).level(), UsageLevel::Warning);
        assert_eq!(
            StorageUsage::new(9.5, 10.0, 0).level(),
            UsageLevel::Critical
        );
    }

    #[test]
    fn zero_total_reads_as_empty() {
        let usage = StorageUsage::new(3.0, 0.0, 1);
        assert_eq!(usage.percent(), 0);
        assert_eq!(usage.level(), UsageLevel::Normal);
    }

    #[test]
    fn empty_cloud_accounts_report_zero() {
        assert_eq!(StorageUsage::for_provider(Provider::ICloud).percent(), 0);
        assert_eq!(StorageUsage::for_provider(Provider::JioCloud).items, 0);
    }
}
