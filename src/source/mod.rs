//! Content sources feeding the sitemap pipeline.
//!
//! Each [`Category`] of CMS content (pages, articles, news) is exposed
//! through a [`SourceProvider`] that pulls raw [`ContentRecord`]s from a
//! [`RecordStore`], filters them for publication state and locale, and maps
//! them into URL entries. The store is the external-collaborator boundary:
//! anything that can list candidate records for a locale can back a provider.

mod category;
mod provider;
mod record;
mod snapshot;

pub use category::Category;
pub use provider::SourceProvider;
pub use record::{ContentRecord, RecordStore};
pub use snapshot::{ContentSnapshot, SnapshotStore};

use std::sync::Arc;

/// Build one provider per category, in the fixed declared order, sharing
/// a single record store.
pub fn build_providers(store: Arc<dyn RecordStore>) -> Vec<SourceProvider> {
    Category::ALL
        .into_iter()
        .map(|category| SourceProvider::new(category, Arc::clone(&store)))
        .collect()
}
