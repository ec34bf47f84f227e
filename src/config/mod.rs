//! Configuration management for `sitemapper.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── content    # [content]
//! │   ├── serve      # [serve]
//! │   ├── site       # [site]
//! │   └── sitemap    # [sitemap]
//! ├── error          # ConfigError
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[site]`     | Base URL and default locale                    |
//! | `[content]`  | Content snapshot location                      |
//! | `[sitemap]`  | Output filename, export directory, policy      |
//! | `[serve]`    | HTTP delivery (port, interface)                |
//!
//! The loaded config is passed by reference into the pipeline; there is no
//! process-global configuration handle. Base URL and locale reach providers,
//! aggregator and encoder as explicit parameters.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{ContentSection, PriorityPolicy, ServeSection, SiteSection, SitemapSection};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing sitemapper.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site base URL and locale
    #[serde(default)]
    pub site: SiteSection,

    /// Content snapshot settings
    #[serde(default)]
    pub content: ContentSection,

    /// Sitemap output settings
    #[serde(default)]
    pub sitemap: SitemapSection,

    /// HTTP delivery settings
    #[serde(default)]
    pub serve: ServeSection,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSection::default(),
            content: ContentSection::default(),
            sitemap: SitemapSection::default(),
            serve: ServeSection::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// The project root is the config file's parent directory; relative
    /// paths in the config resolve against it.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = if cli.config.is_absolute() {
            cli.config.clone()
        } else {
            std::env::current_dir()?.join(&cli.config)
        };

        if !config_path.exists() {
            bail!(
                "config file '{}' not found; create it with a [site] url entry",
                cli.config.display()
            );
        }

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Finalize configuration after loading: resolve root, apply CLI
    /// overrides, normalize paths.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.apply_cli_options(cli);

        // Resolve config-relative paths against the project root
        if self.content.snapshot.is_relative() {
            self.content.snapshot = self.root.join(&self.content.snapshot);
        }
        if self.sitemap.output.is_relative() {
            self.sitemap.output = self.root.join(&self.sitemap.output);
        }
    }

    /// Apply CLI overrides on top of the file values.
    fn apply_cli_options(&mut self, cli: &Cli) {
        if let Some(url) = &cli.base_url {
            self.site.url = Some(url.clone());
        }
        if let Some(locale) = &cli.locale {
            self.site.locale = locale.clone();
        }

        if let Commands::Serve { interface, port } = &cli.command {
            if let Some(interface) = interface {
                self.serve.interface = *interface;
            }
            if let Some(port) = port {
                self.serve.port = *port;
            }
        }
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        self.site.validate(&mut errors);
        self.sitemap.validate(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("\n")).into())
        }
    }

    /// Base URL without trailing slash, ready for path joining.
    ///
    /// Only meaningful after `validate()` passed; defaults to "" before.
    pub fn base_url(&self) -> &str {
        self.site.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal required `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nurl = \"https://example.com\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(SiteConfig::from_str("[site\nurl = \"https://x\"").is_err());
    }

    #[test]
    fn test_from_str_valid_toml() {
        let config = SiteConfig::from_str("[site]\nurl = \"https://example.com\"").unwrap();
        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert!(config.site.url.is_none());
        assert_eq!(config.site.locale, "en");
        assert_eq!(config.sitemap.filename, "sitemap.xml");
        assert_eq!(config.serve.port, 8080);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nurl = \"https://example.com\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.url.as_deref(), Some("https://example.com"));
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nurl = \"https://example.com\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_requires_url() {
        let config = SiteConfig::default();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("url is required"));
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = test_parse_config("");
        assert_eq!(config.base_url(), "https://example.com");

        let mut config = SiteConfig::default();
        config.site.url = Some("https://example.com/".into());
        assert_eq!(config.base_url(), "https://example.com");
    }
}
