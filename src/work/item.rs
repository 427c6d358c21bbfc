//! Work item model

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-item resources, declared up front instead of interpolating file
/// names at render time. A locator only ever comes out of this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkResource {
    CoverImage,
    Video,
}

impl WorkResource {
    pub fn file_name(self) -> &'static str {
        match self {
            WorkResource::CoverImage => "cover.png",
            WorkResource::Video => "video.mp4",
        }
    }

    /// Locator for this resource inside an item directory
    pub fn locator(self, dir: &Path) -> String {
        dir.join(self.file_name()).to_string_lossy().to_string()
    }
}

/// One portfolio entry rendered in the site's gallery section.
///
/// Built once per build from on-disk evidence (probe mode) or from the
/// item's config.json (config mode); immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Identifier and display label, unique within a build
    pub name: String,

    /// Free-text summary
    pub description: Option<String>,

    /// Locator for the still image, always present
    pub cover_image: String,

    /// Locator for the companion video, if the item has one
    pub video: Option<String>,

    /// Outbound URL
    pub external_link: Option<String>,

    /// Explicit display rank; items without one keep directory order
    pub order: Option<u32>,
}

/// Shape of an item's config.json
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemConfig {
    pub name: String,
    pub description: Option<String>,
    pub cover_image: String,
    pub video: Option<String>,
    pub link: Option<String>,
    pub order: Option<u32>,
}

impl From<WorkItemConfig> for WorkItem {
    fn from(config: WorkItemConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            cover_image: config.cover_image,
            video: config.video,
            external_link: config.link,
            order: config.order,
        }
    }
}

/// Sort items for display: ascending by explicit `order`, stably, so items
/// with equal or absent `order` keep their directory-traversal order.
/// Items without an `order` sort after every explicit one.
pub fn sort_for_display(items: &mut [WorkItem]) {
    items.sort_by_key(|item| item.order.unwrap_or(u32::MAX));
}
