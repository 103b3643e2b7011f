// SPDX-License-Identifier: MPL-2.0
//! Long-running item actions: downloads and device backups.
//!
//! Only a simulated implementation exists. It waits a fixed delay and
//! succeeds; there is no cancellation and no retry.

use crate::domain::item::{ItemId, SectionKind};
use crate::domain::provider::Provider;
use crate::error::Result;
use futures_util::future::{BoxFuture, FutureExt};
use std::time::Duration;

pub trait TransferService: Send + Sync {
    fn download(&self, kind: SectionKind, id: ItemId) -> BoxFuture<'static, Result<()>>;
    fn backup(&self, target: Provider) -> BoxFuture<'static, Result<()>>;
}

#[derive(Debug, Clone)]
pub struct SimulatedTransfer {
    download_delay: Duration,
    backup_delay: Duration,
}

impl SimulatedTransfer {
    #[must_use]
    pub fn new(download_delay: Duration, backup_delay: Duration) -> Self {
        Self {
            download_delay,
            backup_delay,
        }
    }
}

impl TransferService for SimulatedTransfer {
    fn download(&self, kind: SectionKind, id: ItemId) -> BoxFuture<'static, Result<()>> {
        let delay = self.download_delay;
        async move {
            log::debug!("downloading {} item {id}", kind.endpoint());
            tokio::time::sleep(delay).await;
            Ok(())
        }
        .boxed()
    }

    fn backup(&self, target: Provider) -> BoxFuture<'static, Result<()>> {
        let delay = self.backup_delay;
        async move {
            log::info!("backing up device to {}", target.id());
            tokio::time::sleep(delay).await;
            Ok(())
        }
        .boxed()
    }
}
