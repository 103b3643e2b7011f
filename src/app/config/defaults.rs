// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Actions**: simulated transfer and redirect delays
//! - **Catalog**: sample latency and HTTP timeout bounds

// ==========================================================================
// Action Delays
// ==========================================================================

/// Default simulated download time (in milliseconds).
pub const DEFAULT_DOWNLOAD_DELAY_MS: u64 = 2_000;

/// Default simulated device backup time (in milliseconds).
pub const DEFAULT_BACKUP_DELAY_MS: u64 = 3_000;

/// Delay between a Google sign-in and the redirect to the browser (in milliseconds).
pub const DEFAULT_GOOGLE_REDIRECT_DELAY_MS: u64 = 1_500;

/// Upper bound for any configured delay (in milliseconds).
pub const MAX_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Default latency of the built-in sample catalog (in milliseconds).
pub const DEFAULT_SAMPLE_LATENCY_MS: u64 = 400;

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_fit_under_the_cap() {
        for delay in [
            DEFAULT_DOWNLOAD_DELAY_MS,
            DEFAULT_BACKUP_DELAY_MS,
            DEFAULT_GOOGLE_REDIRECT_DELAY_MS,
            DEFAULT_SAMPLE_LATENCY_MS,
        ] {
            assert!(delay <= MAX_DELAY_MS);
        }
    }

    #[test]
    fn request_timeout_default_is_within_bounds() {
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    }
}
