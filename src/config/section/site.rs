//! `[site]` section configuration.
//!
//! Base URL and default locale for sitemap entries. Both are threaded as
//! explicit parameters through the pipeline; nothing reads them ambiently.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! locale = "en"
//! ```

use serde::{Deserialize, Serialize};

/// Site metadata for URL construction and provider filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Base URL all entry locations are joined onto (e.g., "https://example.com").
    pub url: Option<String>,

    /// Locale filter passed to content providers (e.g., "en", "cs").
    pub locale: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: None,
            locale: "en".into(),
        }
    }
}

impl SiteSection {
    /// Validate the base URL.
    ///
    /// # Checks
    /// - `url` must be set
    /// - `url` must be a valid URL with an http/https scheme and a host
    pub fn validate(&self, errors: &mut Vec<String>) {
        let Some(url_str) = &self.url else {
            errors.push("[site] url is required, e.g.: \"https://example.com\"".into());
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    errors.push(format!(
                        "[site] url scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ));
                }
                if parsed.host_str().is_none() {
                    errors.push("[site] url must have a valid host".into());
                }
            }
            Err(e) => {
                errors.push(format!("[site] invalid url: {e}"));
            }
        }

        if self.locale.trim().is_empty() {
            errors.push("[site] locale must not be empty".into());
        }
    }
}
