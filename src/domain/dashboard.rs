// SPDX-License-Identifier: MPL-2.0
//! Figures shown on the inventory dashboard and the admin dashboard.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One slice of the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryShare {
    pub name: &'static str,
    pub value: u32,
}

/// Number of inventory changes on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyActivity {
    pub day: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    pub action: &'static str,
    pub item: &'static str,
    pub user: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_items: u32,
    pub categories: u32,
    pub locations: u32,
    /// Time of day of the last inventory update (today).
    pub last_update: NaiveTime,
}

impl Statistics {
    /// `10:45 AM` style rendering of [`Statistics::last_update`].
    #[must_use]
    pub fn last_update_label(&self) -> String {
        self.last_update.format("%-I:%M %p").to_string()
    }
}

pub const CATEGORY_BREAKDOWN: [CategoryShare; 4] = [
    CategoryShare { name: "Electronics", value: 35 },
    CategoryShare { name: "Furniture", value: 25 },
    CategoryShare { name: "Stationery", value: 20 },
    CategoryShare { name: "Other", value: 20 },
];

pub const WEEKLY_ACTIVITY: [DailyActivity; 7] = [
    DailyActivity { day: "Mon", count: 4 },
    DailyActivity { day: "Tue", count: 3 },
    DailyActivity { day: "Wed", count: 7 },
    DailyActivity { day: "Thu", count: 2 },
    DailyActivity { day: "Fri", count: 5 },
    DailyActivity { day: "Sat", count: 1 },
    DailyActivity { day: "Sun", count: 0 },
];

pub const RECENT_ACTIVITY: [ActivityEntry; 3] = [
    ActivityEntry { action: "Added", item: "Laptop", user: "John", time: "10 min ago" },
    ActivityEntry { action: "Updated", item: "Desk Chair", user: "Sarah", time: "2 hours ago" },
    ActivityEntry { action: "Removed", item: "Printer", user: "Mike", time: "1 day ago" },
];

#[must_use]
pub fn statistics() -> Statistics {
    Statistics {
        total_items: 143,
        categories: 4,
        locations: 5,
        last_update: NaiveTime::from_hms_opt(10, 45, 0).unwrap_or_default(),
    }
}

/// Rounded share of each category in the breakdown, in breakdown order.
#[must_use]
pub fn category_percentages() -> Vec<(&'static str, u32)> {
    let total: u32 = CATEGORY_BREAKDOWN.iter().map(|share| share.value).sum();
    CATEGORY_BREAKDOWN
        .iter()
        .map(|share| {
            let percent = if total == 0 {
                0
            } else {
                (f64::from(share.value) * 100.0 / f64::from(total)).round() as u32
            };
            (share.name, percent)
        })
        .collect()
}

/// Highest daily count, used to scale the activity bars.
#[must_use]
pub fn peak_activity() -> u32 {
    WEEKLY_ACTIVITY.iter().map(|day| day.count).max().unwrap_or(0)
}

/// Users per provider in the admin payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderUsers {
    pub provider: String,
    pub users: u32,
}

/// Aggregate numbers served at `/admin/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_users: u32,
    pub regions: Vec<String>,
    pub storage_usage: Vec<ProviderUsers>,
}

impl AdminDashboard {
    /// The payload served when no backend is configured.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            total_users: 100,
            regions: vec![
                "North America".to_string(),
                "Europe".to_string(),
                "Asia".to_string(),
            ],
            storage_usage: vec![
                ProviderUsers {
                    provider: "Google Drive".to_string(),
                    users: 40,
                },
                ProviderUsers {
                    provider: "Dropbox".to_string(),
                    users: 30,
                },
                ProviderUsers {
                    provider: "OneDrive".to_string(),
                    users: 30,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_percentages_sum_to_one_hundred() {
        let percentages = category_percentages();
        assert_eq!(percentages[0], ("Electronics", 35));
        assert_eq!(percentages.iter().map(|(_, p)| p).sum::<u32>(), 100);
    }

    #[test]
    fn wednesday_is_the_busiest_day() {
        assert_eq!(peak_activity(), 7);
    }

    #[test]
    fn last_update_renders_twelve_hour_clock() {
        assert_eq!(statistics().last_update_label(), "10:45 AM");
    }

    #[test]
    fn admin_payload_decodes_camel_case() {
        let json = r#"{"totalUsers": 100, "regions": ["Europe"],
                       "storageUsage": [{"provider": "Dropbox", "users": 30}]}"#;
        let dashboard: AdminDashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.total_users, 100);
        assert_eq!(dashboard.storage_usage[0].users, 30);
    }

    #[test]
    fn sample_payload_matches_served_numbers() {
        let sample = AdminDashboard::sample();
        let users: u32 = sample.storage_usage.iter().map(|u| u.users).sum();
        assert_eq!(users, sample.total_users);
    }
}
