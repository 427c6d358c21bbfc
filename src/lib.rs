//! folio: content indexing and query core for a Markdown blog and
//! portfolio site
//!
//! This crate loads Markdown/MDX posts into an immutable, queryable index
//! and scans portfolio "work" directories into display-ready records.
//! Rendering, theming and deployment are left to external consumers.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod work;

use anyhow::Result;
use std::path::Path;

/// The main site handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
        })
    }

    /// Load every post into a fresh index
    pub fn load_posts(&self) -> Result<content::PostsIndex> {
        Ok(content::loader::ContentLoader::new(self).load_posts()?)
    }

    /// Scan every work directory into a fresh item list
    pub fn scan_work(&self) -> Result<Vec<work::WorkItem>> {
        Ok(work::WorkIndexer::new(self).scan()?)
    }
}
