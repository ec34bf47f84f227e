//! XML serialization for sitemap documents.
//!
//! Produces sitemaps.org 0.9 documents as plain strings. Output is
//! deterministic: ordering comes entirely from the aggregator's sequence,
//! and all timestamp defaulting uses the generation timestamp passed in.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" ...>
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T00:00:00+00:00</lastmod>
//!     <priority>1.00</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::PriorityPolicy,
    log,
    sitemap::entry::UrlEntry,
    utils::date::DateTimeUtc,
};
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Encode a `<urlset>` document from an ordered entry sequence.
///
/// Entries without a `lastmod` get `generated`, the timestamp captured once
/// per pipeline run. Out-of-range priorities are clamped or the entry is
/// dropped, per `policy`; either way the rest of the document is unaffected.
pub fn encode_urlset(
    entries: &[UrlEntry],
    generated: DateTimeUtc,
    policy: PriorityPolicy,
) -> String {
    let mut xml = String::with_capacity(entries.len() * 128 + 256);
    push_urlset_open(&mut xml);

    for entry in entries {
        let Some(priority) = render_priority(entry, policy) else {
            continue;
        };
        let lastmod = entry.lastmod.unwrap_or(generated);

        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&lastmod.to_w3c());
        xml.push_str("</lastmod>\n    <priority>");
        xml.push_str(&priority);
        xml.push_str("</priority>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Encode a `<sitemapindex>` document referencing the given shard URLs.
pub fn encode_index(shard_locs: &[String], generated: DateTimeUtc) -> String {
    let lastmod = generated.to_w3c();
    let mut xml = String::with_capacity(shard_locs.len() * 96 + 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sitemapindex xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for loc in shard_locs {
        xml.push_str("  <sitemap>\n    <loc>");
        xml.push_str(&escape_xml(loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&lastmod);
        xml.push_str("</lastmod>\n  </sitemap>\n");
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

/// The urlset boilerplate, schema location included.
fn push_urlset_open(xml: &mut String) {
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\"\n        xmlns:xsi=\"");
    xml.push_str(XSI_NS);
    xml.push_str("\"\n        xsi:schemaLocation=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\n              ");
    xml.push_str(SITEMAP_NS);
    xml.push_str("/sitemap.xsd\">\n");
}

/// Render an entry's priority with two decimals, applying the
/// out-of-range policy. `None` means the entry is dropped.
fn render_priority(entry: &UrlEntry, policy: PriorityPolicy) -> Option<String> {
    let p = entry.priority;

    if !p.is_finite() {
        log!("warning"; "dropping {}: priority is not a number", entry.loc);
        return None;
    }

    if (0.0..=1.0).contains(&p) {
        return Some(format!("{p:.2}"));
    }

    match policy {
        PriorityPolicy::Clamp => {
            let clamped = p.clamp(0.0, 1.0);
            log!("warning"; "clamping priority {p} to {clamped:.2} for {}", entry.loc);
            Some(format!("{clamped:.2}"))
        }
        PriorityPolicy::Reject => {
            log!("warning"; "dropping {}: priority {p} out of range", entry.loc);
            None
        }
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
