//! Delivery sinks for encoded sitemap bytes.
//!
//! The same encoded documents go out two ways: as an HTTP response body or
//! as an atomic file write. Shard addressing is owned here so both sinks
//! agree on names (`sitemap.xml` -> `sitemap-1.xml`, `sitemap-2.xml`, ...).

pub mod file;
pub mod http;

pub use file::{ExportError, write_atomic};

/// File name of shard `index` (1-based) derived from the primary name.
pub fn shard_name(filename: &str, index: usize) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}-{index}.{ext}"),
        None => format!("{filename}-{index}"),
    }
}
