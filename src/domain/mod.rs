// SPDX-License-Identifier: MPL-2.0
//! Domain layer - storage catalog types and business rules.
//!
//! Pure types and functions with no I/O. The only external crates used here
//! are `serde` for the wire shapes and `chrono` for a timestamp label.
//!
//! # Modules
//!
//! - [`provider`]: [`Provider`](provider::Provider) and the
//!   [`ProviderSelection`](provider::ProviderSelection) wildcard
//! - [`usage`]: per-provider capacity and [`UsageLevel`](usage::UsageLevel)
//! - [`item`]: file, photo and video items behind [`CatalogItem`](item::CatalogItem)
//! - [`filter`]: provider filtering and delete-by-id
//! - [`inventory`]: the storage inventory table
//! - [`dashboard`]: dashboard figures and the admin payload

pub mod dashboard;
pub mod filter;
pub mod inventory;
pub mod item;
pub mod provider;
pub mod usage;
