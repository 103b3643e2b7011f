// SPDX-License-Identifier: MPL-2.0
//! UI state kept apart from the views that render it.

pub mod backup;
pub mod provider_selector;
pub mod section;

pub use backup::BackupState;
pub use provider_selector::{Change, ProviderSelector};
pub use section::{Phase, SectionState, Status};
