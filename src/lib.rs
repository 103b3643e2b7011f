// SPDX-License-Identifier: MPL-2.0
//! `storeit` is a storage management browser built with the Iced GUI framework.
//!
//! It lists files, photos and videos across the device and several cloud
//! providers, tracks a small storage inventory, and demonstrates
//! internationalization with Fluent and a file-backed session store.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod services;
pub mod session;
pub mod ui;
