//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,

    // Directory
    pub source_dir: String,
    pub posts_dir: String,

    // Date format used for the human-readable date on each post
    // (Moment.js-style tokens, converted to chrono at format time)
    pub date_format: String,

    // Portfolio scanning
    #[serde(default)]
    pub work: WorkScanConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            description: String::new(),
            author: String::new(),

            url: "http://example.com".to_string(),

            source_dir: "source".to_string(),
            posts_dir: "posts".to_string(),

            date_format: "MMMM D, YYYY".to_string(),

            work: WorkScanConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// How work-item directories are turned into records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    /// Derive fields from on-disk evidence (cover.png, video.mp4)
    Probe,
    /// Read every field from the item's config.json
    Config,
}

/// Portfolio scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkScanConfig {
    pub mode: WorkMode,
}

impl Default for WorkScanConfig {
    fn default() -> Self {
        Self {
            mode: WorkMode::Config,
        }
    }
}
