//! `[content]` section configuration.
//!
//! Points at the content snapshot the bundled record store reads.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Content source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    /// Path to the JSON content snapshot (relative to the config file).
    pub snapshot: PathBuf,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            snapshot: "content.json".into(),
        }
    }
}
