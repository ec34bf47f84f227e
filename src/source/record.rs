//! Raw content records and the store boundary.

use crate::source::Category;
use anyhow::Result;
use serde::Deserialize;

/// One candidate record as exposed by a content store.
///
/// This mirrors what the CMS hands over per row: an SEO identifier, a
/// last-modified timestamp (may be absent), publication state, and whether
/// the record is the site's designated homepage.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentRecord {
    /// SEO slug; records without one are excluded from the sitemap.
    #[serde(default)]
    pub slug: Option<String>,

    /// Last-modified timestamp as an ISO 8601 string, if the store has one.
    #[serde(default)]
    pub modified: Option<String>,

    /// Only published records are listed.
    pub published: bool,

    /// The designated homepage record; skipped by providers because the
    /// aggregator synthesizes the homepage entry itself.
    #[serde(default)]
    pub homepage: bool,

    /// Locale this record belongs to.
    pub locale: String,
}

/// A source of candidate records for one content category and locale.
///
/// Implementations are external collaborators: a database, a CMS export,
/// an in-memory fixture. Failures are surfaced as `Err` and treated as an
/// empty contribution by the caller; they never abort the pipeline.
pub trait RecordStore: Send + Sync {
    fn records(&self, category: Category, locale: &str) -> Result<Vec<ContentRecord>>;
}

#[cfg(test)]
impl ContentRecord {
    /// Published record with a slug, for tests.
    pub fn published(slug: &str, modified: Option<&str>) -> Self {
        Self {
            slug: Some(slug.to_string()),
            modified: modified.map(str::to_string),
            published: true,
            homepage: false,
            locale: "en".into(),
        }
    }
}
