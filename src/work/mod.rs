//! Work module - portfolio directory scanning

mod indexer;
mod item;

use std::path::PathBuf;
use thiserror::Error;

pub use indexer::WorkIndexer;
pub use item::{sort_for_display, WorkItem, WorkItemConfig, WorkResource};

/// Errors produced while scanning work directories
///
/// Only a missing video is a defaultable condition, and that case never
/// reaches here; everything below aborts the scan.
#[derive(Error, Debug)]
pub enum WorkError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{dir}: missing cover image `cover.png`")]
    MissingCover { dir: PathBuf },

    #[error("{dir}: missing config.json")]
    MissingConfig { dir: PathBuf },

    #[error("{dir}: invalid config.json: {source}")]
    InvalidConfig {
        dir: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
