//! Post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A blog post
///
/// Constructed once per build by the loader and never mutated afterwards;
/// a fresh build re-derives every record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Short free-text summary shown in listings
    pub summary: String,

    /// URL-safe identifier, derived from the source file name
    /// (extension stripped), never author-supplied
    pub slug: String,

    /// Publication date
    pub date: NaiveDateTime,

    /// Human-readable rendering of `date`
    pub formatted_date: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Image locators referenced by the post
    pub images: Vec<String>,

    /// Raw markdown content
    pub raw: String,

    /// Rendered HTML content
    pub content: String,

    /// Source file path (relative to the source directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, date: NaiveDateTime, source: String) -> Self {
        Self {
            title,
            summary: String::new(),
            slug: String::new(),
            date,
            formatted_date: String::new(),
            tags: Vec::new(),
            images: Vec::new(),
            raw: String::new(),
            content: String::new(),
            source: source.clone(),
            full_source: PathBuf::from(&source),
        }
    }
}
