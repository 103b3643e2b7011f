// SPDX-License-Identifier: MPL-2.0
//! Where list sections and the admin dashboard get their data.
//!
//! Every call returns a boxed `'static` future so the UI can hand it straight
//! to `Task::perform` without borrowing the source.

use super::samples;
use crate::domain::dashboard::AdminDashboard;
use crate::domain::item::{CatalogItem, FileItem, PhotoItem, SectionKind, VideoItem};
use crate::error::{Error, Result};
use futures_util::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub trait CatalogSource: Send + Sync {
    fn files(&self) -> BoxFuture<'static, Result<Vec<FileItem>>>;
    fn photos(&self) -> BoxFuture<'static, Result<Vec<PhotoItem>>>;
    fn videos(&self) -> BoxFuture<'static, Result<Vec<VideoItem>>>;
    fn admin_dashboard(&self) -> BoxFuture<'static, Result<AdminDashboard>>;
}

/// Picks the [`CatalogSource`] call matching an item type.
pub trait Fetch: CatalogItem + Sized {
    fn fetch(source: &dyn CatalogSource) -> BoxFuture<'static, Result<Vec<Self>>>;
}

impl Fetch for FileItem {
    fn fetch(source: &dyn CatalogSource) -> BoxFuture<'static, Result<Vec<Self>>> {
        source.files()
    }
}

impl Fetch for PhotoItem {
    fn fetch(source: &dyn CatalogSource) -> BoxFuture<'static, Result<Vec<Self>>> {
        source.photos()
    }
}

impl Fetch for VideoItem {
    fn fetch(source: &dyn CatalogSource) -> BoxFuture<'static, Result<Vec<Self>>> {
        source.videos()
    }
}

/// Serves the built-in samples after a fixed delay.
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    latency: Duration,
}

impl SampleCatalog {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn serve<T: Send + 'static>(&self, value: T) -> BoxFuture<'static, Result<T>> {
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            Ok(value)
        }
        .boxed()
    }
}

impl CatalogSource for SampleCatalog {
    fn files(&self) -> BoxFuture<'static, Result<Vec<FileItem>>> {
        self.serve(samples::files())
    }

    fn photos(&self) -> BoxFuture<'static, Result<Vec<PhotoItem>>> {
        self.serve(samples::photos())
    }

    fn videos(&self) -> BoxFuture<'static, Result<Vec<VideoItem>>> {
        self.serve(samples::videos())
    }

    fn admin_dashboard(&self) -> BoxFuture<'static, Result<AdminDashboard>> {
        self.serve(AdminDashboard::sample())
    }
}

/// Unauthenticated JSON-over-HTTP backend.
///
/// `GET {base}/api/storage/{files,photos,videos}` and `GET {base}/admin/dashboard`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn section_url(&self, kind: SectionKind) -> String {
        format!("{}/api/storage/{}", self.base_url, kind.endpoint())
    }

    fn get_json<T>(&self, url: String) -> BoxFuture<'static, Result<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.client.clone();
        async move {
            log::debug!("GET {url}");
            let response = client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                log::warn!("GET {url} returned {status}");
                return Err(Error::Network(format!("{url} returned {status}")));
            }
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|err| {
                log::warn!("GET {url} returned an unexpected payload: {err}");
                Error::from(err)
            })
        }
        .boxed()
    }
}

impl CatalogSource for HttpCatalog {
    fn files(&self) -> BoxFuture<'static, Result<Vec<FileItem>>> {
        self.get_json(self.section_url(SectionKind::Files))
    }

    fn photos(&self) -> BoxFuture<'static, Result<Vec<PhotoItem>>> {
        self.get_json(self.section_url(SectionKind::Photos))
    }

    fn videos(&self) -> BoxFuture<'static, Result<Vec<VideoItem>>> {
        self.get_json(self.section_url(SectionKind::Videos))
    }

    fn admin_dashboard(&self) -> BoxFuture<'static, Result<AdminDashboard>> {
        self.get_json(format!("{}/admin/dashboard", self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sample_catalog_serves_seed_lists() {
        let catalog = SampleCatalog::new(Duration::from_millis(400));
        let photos = PhotoItem::fetch(&catalog).await.unwrap();
        let videos = VideoItem::fetch(&catalog).await.unwrap();
        assert_eq!(photos.len(), 6);
        assert_eq!(videos.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn sample_catalog_waits_for_its_latency() {
        let catalog = SampleCatalog::new(Duration::from_secs(5));
        let started = tokio::time::Instant::now();
        catalog.admin_dashboard().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[test]
    fn http_catalog_trims_trailing_slash() {
        let catalog = HttpCatalog::new("http://localhost:8080/", Duration::from_secs(5)).unwrap();
        assert_eq!(catalog.base_url(), "http://localhost:8080");
        assert_eq!(
            catalog.section_url(SectionKind::Videos),
            "http://localhost:8080/api/storage/videos"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let catalog = HttpCatalog::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = catalog.files().await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
