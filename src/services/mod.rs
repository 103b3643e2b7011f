// SPDX-License-Identifier: MPL-2.0
//! Asynchronous data and action providers used by the UI.

pub mod catalog;
pub mod samples;
pub mod transfer;

pub use catalog::{CatalogSource, Fetch, HttpCatalog, SampleCatalog};
pub use transfer::{SimulatedTransfer, TransferService};

use crate::app::config::Config;
use std::fmt;
use std::sync::Arc;

/// Shared handles to the catalog and transfer backends.
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn CatalogSource>,
    pub transfer: Arc<dyn TransferService>,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

impl Services {
    pub fn new(
        catalog: impl CatalogSource + 'static,
        transfer: impl TransferService + 'static,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            transfer: Arc::new(transfer),
        }
    }

    /// Builds the backends described by `config`.
    ///
    /// Uses the HTTP catalog when a base URL is configured, the samples
    /// otherwise. Returns a warning i18n key when the HTTP client could not
    /// be built and the samples were used instead.
    pub fn from_config(config: &Config) -> (Self, Option<String>) {
        let transfer = SimulatedTransfer::new(
            config.actions.download_delay(),
            config.actions.backup_delay(),
        );
        let samples = SampleCatalog::new(config.actions.sample_latency());

        let Some(base_url) = config.api.base_url() else {
            return (Self::new(samples, transfer), None);
        };

        match HttpCatalog::new(base_url, config.api.request_timeout()) {
            Ok(http) => {
                log::info!("using catalog backend at {}", http.base_url());
                (Self::new(http, transfer), None)
            }
            Err(err) => {
                log::error!("cannot build HTTP client for {base_url}: {err}");
                (
                    Self::new(samples, transfer),
                    Some("notification-backend-error".to_string()),
                )
            }
        }
    }
}
