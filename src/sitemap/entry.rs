//! The atomic unit of sitemap output.

use crate::utils::date::DateTimeUtc;

/// Sitemap priority of the synthesized homepage entry.
pub const HOMEPAGE_PRIORITY: f32 = 1.0;

/// One `<url>` element of the generated sitemap.
///
/// Entries are created fresh on every pipeline run and only live until the
/// documents are encoded; nothing is persisted across invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Absolute URL; XML-escaped at encode time.
    pub loc: String,

    /// Last modification time. When absent the encoder substitutes the
    /// generation timestamp captured once per run.
    pub lastmod: Option<DateTimeUtc>,

    /// Relative priority in [0.00, 1.00], rendered with two decimals.
    pub priority: f32,
}
