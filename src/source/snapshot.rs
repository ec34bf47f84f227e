//! JSON content snapshot store.
//!
//! The bundled [`RecordStore`]: a JSON file with one array of records per
//! category, typically produced by a CMS export job.
//!
//! # Snapshot format
//!
//! ```json
//! {
//!   "pages":    [{"slug": "about", "modified": "2024-06-15T10:00:00Z",
//!                 "published": true, "homepage": false, "locale": "en"}],
//!   "articles": [],
//!   "news":     []
//! }
//! ```

use crate::source::{Category, ContentRecord, RecordStore};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Deserialized snapshot content, one record list per category.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub pages: Vec<ContentRecord>,
    #[serde(default)]
    pub articles: Vec<ContentRecord>,
    #[serde(default)]
    pub news: Vec<ContentRecord>,
}

/// Record store backed by a [`ContentSnapshot`].
#[derive(Debug)]
pub struct SnapshotStore {
    snapshot: ContentSnapshot,
}

impl SnapshotStore {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read content snapshot {}", path.display()))?;
        let snapshot: ContentSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("malformed content snapshot {}", path.display()))?;
        Ok(Self { snapshot })
    }

    /// Store over an in-memory snapshot.
    pub fn from_snapshot(snapshot: ContentSnapshot) -> Self {
        Self { snapshot }
    }

    /// Store with no records at all.
    pub fn empty() -> Self {
        Self {
            snapshot: ContentSnapshot::default(),
        }
    }
}

impl RecordStore for SnapshotStore {
    fn records(&self, category: Category, locale: &str) -> Result<Vec<ContentRecord>> {
        let list = match category {
            Category::Pages => &self.snapshot.pages,
            Category::Articles => &self.snapshot.articles,
            Category::News => &self.snapshot.news,
        };
        Ok(list.iter().filter(|r| r.locale == locale).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> ContentSnapshot {
        serde_json::from_str(
            r#"{
                "pages": [
                    {"slug": "about", "published": true, "locale": "en"},
                    {"slug": "o-nas", "published": true, "locale": "cs"}
                ],
                "news": [
                    {"slug": "opening", "modified": "2024-06-15T10:00:00Z",
                     "published": true, "locale": "en"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_records_filtered_by_locale() {
        let store = SnapshotStore::from_snapshot(sample_snapshot());

        let en = store.records(Category::Pages, "en").unwrap();
        assert_eq!(en.len(), 1);
        assert_eq!(en[0].slug.as_deref(), Some("about"));

        let cs = store.records(Category::Pages, "cs").unwrap();
        assert_eq!(cs.len(), 1);
        assert_eq!(cs[0].slug.as_deref(), Some("o-nas"));
    }

    #[test]
    fn test_records_missing_category_is_empty() {
        let store = SnapshotStore::from_snapshot(sample_snapshot());
        assert!(store.records(Category::Articles, "en").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SnapshotStore::load(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(&path, "{not json").unwrap();

        let err = SnapshotStore::load(&path).unwrap_err().to_string();
        assert!(err.contains("malformed content snapshot"));
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(
            &path,
            r#"{"pages": [{"slug": "a", "published": true, "locale": "en"}]}"#,
        )
        .unwrap();

        let store = SnapshotStore::load(&path).unwrap();
        assert_eq!(store.records(Category::Pages, "en").unwrap().len(), 1);
    }
}
