//! File export command.

use crate::{
    config::SiteConfig,
    log, sink,
    sitemap::{self, SitemapDocuments},
    utils::{date::DateTimeUtc, plural::plural_count},
};
use anyhow::{Result, bail};

/// Run the pipeline once and write the result into the output directory.
///
/// A sharded aggregate writes the shard files first and publishes the index
/// last, so the index never references a shard that is not on disk yet.
pub fn export_site(config: &SiteConfig, filename: Option<&str>) -> Result<()> {
    let filename = filename.unwrap_or(&config.sitemap.filename);
    if filename.is_empty() || filename.contains(['/', '\\']) {
        bail!("output filename must be a bare file name, got '{filename}'");
    }

    let generated = DateTimeUtc::now();
    let docs = sitemap::build(config, generated);
    let output_dir = &config.sitemap.output;

    match docs {
        SitemapDocuments::Single { xml, entries } => {
            let path = output_dir.join(filename);
            sink::write_atomic(&path, xml.as_bytes())?;
            log!("export"; "sitemap exported to {} ({})",
                path.display(), plural_count(entries, "url"));
        }
        SitemapDocuments::Sharded {
            index,
            shards,
            entries,
        } => {
            let shard_count = shards.len();
            for (i, shard) in shards.iter().enumerate() {
                let name = sink::shard_name(filename, i + 1);
                sink::write_atomic(&output_dir.join(&name), shard.as_bytes())?;
                log!("export"; "{name}");
            }

            let path = output_dir.join(filename);
            sink::write_atomic(&path, index.as_bytes())?;
            log!("export"; "sitemap index exported to {} ({} across {})",
                path.display(),
                plural_count(entries, "url"),
                plural_count(shard_count, "shard"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_config() -> (tempfile::TempDir, SiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("content.json");
        fs::write(
            &snapshot,
            r#"{"pages": [{"slug": "about", "published": true, "locale": "en"}]}"#,
        )
        .unwrap();

        let mut config = SiteConfig::default();
        config.site.url = Some("https://example.com".into());
        config.content.snapshot = snapshot;
        config.sitemap.output = dir.path().join("public");
        (dir, config)
    }

    #[test]
    fn test_export_writes_urlset_document() {
        let (_dir, config) = test_config();

        export_site(&config, None).unwrap();

        let xml = fs::read_to_string(config.sitemap.output.join("sitemap.xml")).unwrap();
        assert!(xml.contains("<urlset"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert!(xml.contains("<loc>https://example.com/about.html</loc>"));
    }

    #[test]
    fn test_export_custom_filename() {
        let (_dir, config) = test_config();

        export_site(&config, Some("custom.xml")).unwrap();
        assert!(config.sitemap.output.join("custom.xml").exists());
    }

    #[test]
    fn test_export_rejects_path_filename() {
        let (_dir, config) = test_config();
        let err = export_site(&config, Some("../escape.xml")).unwrap_err();
        assert!(err.to_string().contains("bare file name"));
    }

    #[test]
    fn test_export_failure_reports_reason_without_truncated_file() {
        let (dir, mut config) = test_config();
        // A file where the output directory should be forces the write to fail
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();
        config.sitemap.output = blocker.clone();

        let err = export_site(&config, None).unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(!blocker.join("sitemap.xml").exists());
    }
}
