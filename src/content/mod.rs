//! Content module - posts, front-matter, and the query index

mod frontmatter;
mod index;
pub mod loader;
mod markdown;
mod post;

use std::path::PathBuf;
use thiserror::Error;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use index::PostsIndex;
pub use markdown::MarkdownRenderer;
pub use post::Post;

/// Errors produced while loading or indexing posts
///
/// All of these abort the build: a post with a bad front-matter block or a
/// colliding slug must not be emitted as a partial record.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("{path}: unrecognized date `{date}`")]
    InvalidDate { path: PathBuf, date: String },

    #[error("duplicate slug `{slug}` ({first} and {second})")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}
