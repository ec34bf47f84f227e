//! Per-category URL entry providers.

use crate::{
    debug,
    sitemap::UrlEntry,
    source::{Category, RecordStore},
    utils::date::DateTimeUtc,
};
use anyhow::Result;
use std::sync::Arc;

/// Produces the URL entries of one content category for a locale.
///
/// Filters the store's candidate records down to published, slug-bearing,
/// non-homepage rows, orders them most-recently-modified first, and maps
/// them onto the category's URL template and static priority.
pub struct SourceProvider {
    category: Category,
    store: Arc<dyn RecordStore>,
}

impl SourceProvider {
    pub fn new(category: Category, store: Arc<dyn RecordStore>) -> Self {
        Self { category, store }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// List this category's URL entries for `locale`.
    ///
    /// A store failure propagates as `Err`; the aggregator downgrades it to
    /// an empty contribution.
    pub fn entries(&self, base_url: &str, locale: &str) -> Result<Vec<UrlEntry>> {
        let records = self.store.records(self.category, locale)?;
        let total = records.len();

        // Timestamps are parsed up front so ordering and output agree;
        // unparseable values count as absent.
        let mut kept: Vec<(Option<DateTimeUtc>, String)> = records
            .into_iter()
            .filter(|record| record.published && !record.homepage)
            .filter_map(|record| {
                let slug = record.slug.filter(|s| !s.is_empty())?;
                let modified = record.modified.as_deref().and_then(DateTimeUtc::parse);
                Some((modified, slug))
            })
            .collect();

        let excluded = total - kept.len();
        if excluded > 0 {
            debug!("source"; "{}: excluded {} record(s) (unpublished, homepage or missing slug)",
                self.category.name(), excluded);
        }

        // Most recently modified first; absent timestamps last. The sort is
        // stable, so ties keep store order.
        kept.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(kept
            .into_iter()
            .map(|(modified, slug)| UrlEntry {
                loc: self.category.url_for(base_url, &slug),
                lastmod: modified,
                priority: self.category.priority(),
            })
            .collect())
    }
}
