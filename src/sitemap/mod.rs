//! Sitemap generation pipeline.
//!
//! Pull-transform-emit: providers contribute URL entries, the aggregator
//! merges/dedups/shards them, the encoder renders XML, and a sink (HTTP or
//! file) delivers the bytes. Each run owns its entry sequence exclusively;
//! nothing survives between invocations.

pub mod aggregate;
pub mod encode;
mod entry;

pub use aggregate::{MAX_URLS_PER_SITEMAP, SitemapSet, aggregate};
pub use entry::UrlEntry;

use crate::{
    config::SiteConfig,
    debug, log,
    sink,
    source::{RecordStore, SnapshotStore, build_providers},
    utils::{date::DateTimeUtc, plural::plural_count},
};
use std::sync::Arc;

/// Encoded sitemap documents, ready for delivery.
#[derive(Debug)]
pub enum SitemapDocuments {
    /// One `<urlset>` document.
    Single { xml: String, entries: usize },
    /// A `<sitemapindex>` plus its shard documents, in shard order.
    Sharded {
        index: String,
        shards: Vec<String>,
        entries: usize,
    },
}

impl SitemapDocuments {
    /// Total `<url>` entry count across all documents.
    pub fn entries(&self) -> usize {
        match self {
            Self::Single { entries, .. } | Self::Sharded { entries, .. } => *entries,
        }
    }
}

/// Run the full aggregation-and-encoding pipeline for one invocation.
///
/// `generated` is the run's single generation timestamp; it fills in
/// missing `lastmod` values and stamps the homepage and index documents.
pub fn build(config: &SiteConfig, generated: DateTimeUtc) -> SitemapDocuments {
    let store: Arc<dyn RecordStore> = match SnapshotStore::load(&config.content.snapshot) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            // An unreachable content store must not blank the sitemap;
            // the homepage entry is still emitted.
            log!("warning"; "content snapshot unavailable, continuing without it: {e:#}");
            Arc::new(SnapshotStore::empty())
        }
    };

    let providers = build_providers(store);
    let set = aggregate(config.base_url(), &config.site.locale, &providers, generated);

    debug!("sitemap"; "aggregated {} for locale '{}'",
        plural_count(set.total_entries(), "url"), config.site.locale);

    encode_set(config, set, generated)
}

/// Encode an aggregated set into deliverable documents.
///
/// Shard URLs follow the sink addressing scheme: the configured filename
/// with a 1-based shard suffix, joined onto the base URL.
fn encode_set(config: &SiteConfig, set: SitemapSet, generated: DateTimeUtc) -> SitemapDocuments {
    let policy = config.sitemap.priority_policy;

    match set {
        SitemapSet::Single(entries) => SitemapDocuments::Single {
            xml: encode::encode_urlset(&entries, generated, policy),
            entries: entries.len(),
        },
        SitemapSet::Sharded(shards) => {
            let entries = shards.iter().map(Vec::len).sum();
            let shard_locs: Vec<String> = (1..=shards.len())
                .map(|i| {
                    format!(
                        "{}/{}",
                        config.base_url(),
                        sink::shard_name(&config.sitemap.filename, i)
                    )
                })
                .collect();

            SitemapDocuments::Sharded {
                index: encode::encode_index(&shard_locs, generated),
                shards: shards
                    .iter()
                    .map(|shard| encode::encode_urlset(shard, generated, policy))
                    .collect(),
                entries,
            }
        }
    }
}
