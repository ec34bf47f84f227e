//! URL entry aggregation: merge, dedup, shard.

use crate::{
    log,
    sitemap::entry::{HOMEPAGE_PRIORITY, UrlEntry},
    source::SourceProvider,
    utils::date::DateTimeUtc,
};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Protocol cap on `<url>` elements per physical sitemap document.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

/// Aggregation result, distinguishing one document from an index plus shards.
#[derive(Debug)]
pub enum SitemapSet {
    /// Everything fits one `<urlset>` document.
    Single(Vec<UrlEntry>),
    /// Positionally split shards, each within the protocol cap.
    Sharded(Vec<Vec<UrlEntry>>),
}

impl SitemapSet {
    /// Total entry count across all documents.
    pub fn total_entries(&self) -> usize {
        match self {
            Self::Single(entries) => entries.len(),
            Self::Sharded(shards) => shards.iter().map(Vec::len).sum(),
        }
    }
}

/// Aggregate URL entries for `locale` from `providers`.
///
/// The homepage entry is synthesized first, then each provider contributes
/// in its declared order. Providers are queried in parallel but merged
/// strictly in declared order, so output is deterministic. A failed provider
/// contributes nothing and logs a warning; it never aborts the run.
pub fn aggregate(
    base_url: &str,
    locale: &str,
    providers: &[SourceProvider],
    generated: DateTimeUtc,
) -> SitemapSet {
    let mut entries = Vec::with_capacity(64);
    entries.push(homepage_entry(base_url, generated));

    let contributions: Vec<_> = providers
        .par_iter()
        .map(|provider| provider.entries(base_url, locale))
        .collect();

    for (provider, contribution) in providers.iter().zip(contributions) {
        match contribution {
            Ok(list) => entries.extend(list),
            Err(e) => {
                log!("warning"; "{} source unavailable, continuing without it: {e:#}",
                    provider.category().name());
            }
        }
    }

    partition(dedup_first_wins(entries))
}

/// The homepage entry: base URL with a trailing slash, full priority.
fn homepage_entry(base_url: &str, generated: DateTimeUtc) -> UrlEntry {
    UrlEntry {
        loc: format!("{}/", base_url.trim_end_matches('/')),
        lastmod: Some(generated),
        priority: HOMEPAGE_PRIORITY,
    }
}

/// Drop duplicate locations, keeping the first occurrence. Order-preserving.
fn dedup_first_wins(entries: Vec<UrlEntry>) -> Vec<UrlEntry> {
    let mut seen = FxHashSet::default();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.loc.clone()))
        .collect()
}

/// Split into shards when the aggregate exceeds the protocol cap.
/// Boundaries are positional, so identical input yields identical shards.
fn partition(entries: Vec<UrlEntry>) -> SitemapSet {
    if entries.len() <= MAX_URLS_PER_SITEMAP {
        SitemapSet::Single(entries)
    } else {
        SitemapSet::Sharded(
            entries
                .chunks(MAX_URLS_PER_SITEMAP)
                .map(<[UrlEntry]>::to_vec)
                .collect(),
        )
    }
}
