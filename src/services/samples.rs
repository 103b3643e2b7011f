// SPDX-License-Identifier: MPL-2.0
//! Built-in catalog used when no backend URL is configured.

use crate::domain::item::{FileItem, ItemId, PhotoItem, VideoItem};
use crate::domain::provider::Provider;

fn file(
    id: u64,
    name: &str,
    file_type: &str,
    size: &str,
    date: &str,
    provider: Provider,
) -> FileItem {
    FileItem {
        id: ItemId::from(id),
        name: name.to_string(),
        provider,
        file_type: Some(file_type.to_string()),
        size: Some(size.to_string()),
        date: Some(date.to_string()),
    }
}

fn photo(id: u64, topic: &str, title: &str, date: &str, provider: Provider) -> PhotoItem {
    PhotoItem {
        id: ItemId::from(id),
        title: title.to_string(),
        url: format!("https://source.unsplash.com/random/800x600/?{topic}"),
        provider,
        date: date.to_string(),
    }
}

fn video(
    id: u64,
    topic: &str,
    title: &str,
    duration: &str,
    date: &str,
    provider: Provider,
) -> VideoItem {
    VideoItem {
        id: ItemId::from(id),
        title: title.to_string(),
        duration: duration.to_string(),
        thumbnail: format!("https://source.unsplash.com/random/320x180/?{topic}"),
        provider,
        date: date.to_string(),
    }
}

#[must_use]
pub fn files() -> Vec<FileItem> {
    vec![
        file(1, "Quarterly report.pdf", "application/pdf", "2.4 MB", "2023-10-12", Provider::GoogleDrive),
        file(2, "Budget 2024.xlsx", "application/vnd.ms-excel", "860 KB", "2023-10-02", Provider::OneDrive),
        file(3, "Meeting notes.docx", "application/msword", "120 KB", "2023-09-21", Provider::Device),
        file(4, "README.txt", "text/plain", "4 KB", "2023-09-03", Provider::Dropbox),
        file(5, "app.ts", "application/typescript", "18 KB", "2023-08-30", Provider::Device),
        file(6, "Invoice #2231.pdf", "application/pdf", "310 KB", "2023-08-11", Provider::ICloud),
    ]
}

#[must_use]
pub fn photos() -> Vec<PhotoItem> {
    vec![
        photo(1, "nature", "Nature view", "2023-10-15", Provider::Device),
        photo(2, "beach", "Beach sunset", "2023-09-28", Provider::GoogleDrive),
        photo(3, "mountain", "Mountain peak", "2023-08-14", Provider::OneDrive),
        photo(4, "city", "City skyline", "2023-07-22", Provider::Dropbox),
        photo(5, "forest", "Forest path", "2023-11-05", Provider::Device),
        photo(6, "food", "Delicious meal", "2023-10-30", Provider::GoogleDrive),
    ]
}

#[must_use]
pub fn videos() -> Vec<VideoItem> {
    vec![
        video(1, "beach", "Beach Vacation", "2:45", "2023-10-15", Provider::Device),
        video(2, "birthday", "Birthday Party", "4:20", "2023-09-28", Provider::GoogleDrive),
        video(3, "concert", "Concert Highlights", "7:12", "2023-08-14", Provider::OneDrive),
        video(4, "road", "Road Trip", "5:30", "2023-07-22", Provider::Dropbox),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::CatalogItem;
    use std::collections::HashSet;

    fn assert_unique_ids<T: CatalogItem>(items: &[T]) {
        let ids: HashSet<_> = items.iter().map(|item| item.id().clone()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn sample_ids_are_unique_per_list() {
        assert_unique_ids(&files());
        assert_unique_ids(&photos());
        assert_unique_ids(&videos());
    }

    #[test]
    fn samples_match_seeded_sizes() {
        assert_eq!(photos().len(), 6);
        assert_eq!(videos().len(), 4);
        assert_eq!(videos()[2].title, "Concert Highlights");
    }
}
