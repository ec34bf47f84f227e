//! `[sitemap]` section configuration.
//!
//! Output naming and encoding policy for generated sitemap documents.
//!
//! # Example
//!
//! ```toml
//! [sitemap]
//! filename = "sitemap.xml"
//! output = "public"
//! priority_policy = "clamp"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the encoder treats an entry whose priority falls outside [0.00, 1.00].
///
/// Either way only the single offending entry is affected, never the
/// whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityPolicy {
    /// Clamp the value into range.
    Clamp,
    /// Drop the entry from the document.
    Reject,
}

/// Sitemap output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSection {
    /// Default export filename and HTTP route; shards derive from it
    /// (`sitemap.xml` -> `sitemap-1.xml`, `sitemap-2.xml`, ...).
    pub filename: String,

    /// Export root directory (relative to the config file).
    pub output: PathBuf,

    /// Out-of-range priority handling.
    pub priority_policy: PriorityPolicy,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            filename: "sitemap.xml".into(),
            output: "public".into(),
            priority_policy: PriorityPolicy::Clamp,
        }
    }
}

impl SitemapSection {
    /// Validate output naming.
    ///
    /// # Checks
    /// - `filename` must be a bare file name, not a path
    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.filename.trim().is_empty() {
            errors.push("[sitemap] filename must not be empty".into());
        }
        if self.filename.contains(['/', '\\']) {
            errors.push(format!(
                "[sitemap] filename must be a bare file name, got '{}'",
                self.filename
            ));
        }
    }
}
