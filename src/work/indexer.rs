//! Work directory indexer
//!
//! Walks the source tree for directories whose path ends in the work
//! segment; each immediate subdirectory of such a directory is one
//! portfolio item. Two derivation modes exist (see [`WorkMode`]): probing
//! the directory for known files, or reading its config.json wholesale.

use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{WorkError, WorkItem, WorkItemConfig, WorkResource};
use crate::config::WorkMode;
use crate::Site;

lazy_static! {
    /// Fixed suffix pattern for work roots, e.g. `source/components/work`
    static ref WORK_DIR_RE: Regex = Regex::new(r"(^|[/\\])work$").unwrap();
}

/// Scans work directories into [`WorkItem`] records
pub struct WorkIndexer<'a> {
    site: &'a Site,
}

impl<'a> WorkIndexer<'a> {
    /// Create a new work indexer
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Scan every work root under the source directory.
    ///
    /// Items come back in directory-traversal order (file-name sorted, so
    /// deterministic across builds); no display order is imposed here.
    /// Consumers sort with [`super::sort_for_display`] once all entries
    /// have resolved.
    pub fn scan(&self) -> Result<Vec<WorkItem>, WorkError> {
        let mode = self.site.config.work.mode;
        let mut items = Vec::new();

        for root in self.work_roots() {
            tracing::debug!("Scanning work root {:?} in {:?} mode", root, mode);
            for dir in item_dirs(&root)? {
                let item = match mode {
                    WorkMode::Probe => probe_item(&dir)?,
                    WorkMode::Config => config_item(&dir)?,
                };
                items.push(item);
            }
        }

        Ok(items)
    }

    /// Directories under the source root matching the work suffix pattern
    fn work_roots(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.site.source_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .filter(|e| WORK_DIR_RE.is_match(&e.path().to_string_lossy()))
            .map(|e| e.into_path())
            .collect()
    }
}

/// Immediate subdirectories of a work root, in file-name order
fn item_dirs(root: &Path) -> Result<Vec<PathBuf>, WorkError> {
    let entries = fs::read_dir(root).map_err(|source| WorkError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| WorkError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Derive an item from on-disk evidence.
///
/// The cover image is required; the video is optional and its absence is
/// the default, not an error. Probe failures other than NotFound (e.g. a
/// permission error) do surface.
fn probe_item(dir: &Path) -> Result<WorkItem, WorkError> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let cover = WorkResource::CoverImage;
    if !probe_file(&dir.join(cover.file_name()))? {
        return Err(WorkError::MissingCover {
            dir: dir.to_path_buf(),
        });
    }

    let video = WorkResource::Video;
    let video = if probe_file(&dir.join(video.file_name()))? {
        Some(video.locator(dir))
    } else {
        None
    };

    Ok(WorkItem {
        name,
        description: None,
        cover_image: cover.locator(dir),
        video,
        external_link: None,
        order: None,
    })
}

/// Derive an item from its config.json, which is authoritative for every
/// field. A missing or malformed file aborts the scan; no partial record
/// is emitted.
fn config_item(dir: &Path) -> Result<WorkItem, WorkError> {
    let path = dir.join("config.json");
    let content = fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WorkError::MissingConfig {
                dir: dir.to_path_buf(),
            }
        } else {
            WorkError::Io { path, source }
        }
    })?;

    let config: WorkItemConfig =
        serde_json::from_str(&content).map_err(|source| WorkError::InvalidConfig {
            dir: dir.to_path_buf(),
            source,
        })?;

    Ok(config.into())
}

/// Does `path` name an existing regular file?
///
/// NotFound maps to `false`; every other error is reported rather than
/// swallowed into a default.
fn probe_file(path: &Path) -> Result<bool, WorkError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(WorkError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
