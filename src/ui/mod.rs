// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! exposes a `Message`, an `update` returning an `Event` for the application,
//! and a `view`.
//!
//! # Screens
//!
//! - [`login`] - Email/password form and simulated Google sign-in
//! - [`browser`] - Files, photos and videos across storage providers
//! - [`dashboard`] - Inventory statistics and activity
//! - [`inventory`] - Storage inventory table
//! - [`admin`] - Fetched admin figures
//! - [`settings`] - Stored toggles, theme and language
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Provider selector, list sections, backup
//! - [`components`] - Status panels and usage indicators
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback

pub mod admin;
pub mod browser;
pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod inventory;
pub mod login;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod state;
pub mod styles;
pub mod theming;
