// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`status_panel`] - Loading, empty and failed placeholders
//! - [`usage`] - Usage chip, meter and provider badge

pub mod status_panel;
pub mod usage;
