// SPDX-License-Identifier: MPL-2.0
//! Catalog items: files, photos and videos.
//!
//! Identifiers arrive either as JSON numbers or strings and are normalised to
//! a string so all three lists compare them the same way.

use super::provider::Provider;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of an item, unique within its list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => ItemId::from(n),
            Raw::Text(s) => ItemId(s),
        })
    }
}

/// Which list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionKind {
    #[default]
    Files,
    Photos,
    Videos,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [SectionKind::Files, SectionKind::Photos, SectionKind::Videos];

    /// Path segment under `/api/storage/`.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            SectionKind::Files => "files",
            SectionKind::Photos => "photos",
            SectionKind::Videos => "videos",
        }
    }
}

/// Shared accessors over the three item shapes.
pub trait CatalogItem: Clone + fmt::Debug + Send + 'static {
    const KIND: SectionKind;

    fn id(&self) -> &ItemId;
    fn title(&self) -> &str;
    fn provider(&self) -> Provider;
}

/// Icon family derived from a file's MIME-ish `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Spreadsheet,
    Document,
    Text,
    Code,
    Generic,
}

impl FileKind {
    /// Classifies a file by substring of its type, first match wins.
    /// Missing types are generic.
    #[must_use]
    pub fn classify(file_type: Option<&str>) -> Self {
        let Some(file_type) = file_type else {
            return FileKind::Generic;
        };
        let lower = file_type.to_ascii_lowercase();
        if lower.contains("pdf") {
            FileKind::Pdf
        } else if lower.contains("spreadsheet") || lower.contains("excel") {
            FileKind::Spreadsheet
        } else if lower.contains("document") || lower.contains("word") {
            FileKind::Document
        } else if lower.contains("text") {
            FileKind::Text
        } else if lower.contains("javascript") || lower.contains("typescript") {
            FileKind::Code
        } else {
            FileKind::Generic
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileItem {
    pub id: ItemId,
    pub name: String,
    pub provider: Provider,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl FileItem {
    #[must_use]
    pub fn kind(&self) -> FileKind {
        FileKind::classify(self.file_type.as_deref())
    }
}

impl CatalogItem for FileItem {
    const KIND: SectionKind = SectionKind::Files;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn provider(&self) -> Provider {
        self.provider
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoItem {
    pub id: ItemId,
    pub title: String,
    pub url: String,
    pub provider: Provider,
    /// Date taken, `YYYY-MM-DD`.
    pub date: String,
}

impl CatalogItem for PhotoItem {
    const KIND: SectionKind = SectionKind::Photos;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn provider(&self) -> Provider {
        self.provider
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: ItemId,
    pub title: String,
    /// Running time as `m:ss`.
    pub duration: String,
    pub thumbnail: String,
    pub provider: Provider,
    pub date: String,
}

impl CatalogItem for VideoItem {
    const KIND: SectionKind = SectionKind::Videos;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn provider(&self) -> Provider {
        self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_accepts_numbers_and_strings() {
        let numeric: ItemId = serde_json::from_str("7").unwrap();
        let text: ItemId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(numeric, text);
        assert_eq!(numeric.as_str(), "7");
    }

    #[test]
    fn photo_decodes_from_wire_shape() {
        let json = r#"{"id": 1, "title": "Nature view", "url": "https://example.test/1.jpg",
                       "provider": "device", "date": "2023-10-15"}"#;
        let photo: PhotoItem = serde_json::from_str(json).unwrap();
        assert_eq!(photo.provider(), Provider::Device);
        assert_eq!(photo.title(), "Nature view");
    }

    #[test]
    fn item_tagged_with_wildcard_is_rejected() {
        let json = r#"{"id": "a", "name": "report.pdf", "provider": "all"}"#;
        assert!(serde_json::from_str::<FileItem>(json).is_err());
    }

    #[test]
    fn file_optional_fields_default_to_none() {
        let json = r#"{"id": "a", "name": "notes", "provider": "dropbox"}"#;
        let file: FileItem = serde_json::from_str(json).unwrap();
        assert!(file.file_type.is_none());
        assert_eq!(file.kind(), FileKind::Generic);
    }

    #[test]
    fn file_kind_classification() {
        assert_eq!(FileKind::classify(Some("application/pdf")), FileKind::Pdf);
        assert_eq!(
            FileKind::classify(Some("application/vnd.ms-excel")),
            FileKind::Spreadsheet
        );
        assert_eq!(
            FileKind::classify(Some(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            )),
            FileKind::Spreadsheet
        );
        assert_eq!(FileKind::classify(Some("application/msword")), FileKind::Document);
        assert_eq!(FileKind::classify(Some("text/plain")), FileKind::Text);
        assert_eq!(FileKind::classify(Some("text/javascript")), FileKind::Text);
        assert_eq!(
            FileKind::classify(Some("application/typescript")),
            FileKind::Code
        );
        assert_eq!(FileKind::classify(Some("image/png")), FileKind::Generic);
    }
}
