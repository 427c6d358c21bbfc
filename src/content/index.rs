//! Posts index - read views over the loaded post set

use std::collections::HashMap;

use super::{ContentError, Post};

/// Immutable index over all posts of a build.
///
/// Constructed once per build and passed by reference to whatever consumes
/// it; there is no ambient global registry. The order posts were handed to
/// [`PostsIndex::new`] is their registration order, which both read views
/// use as the tie-break / base order.
#[derive(Debug)]
pub struct PostsIndex {
    posts: Vec<Post>,
}

impl PostsIndex {
    /// Build the index, rejecting duplicate slugs.
    ///
    /// Two posts resolving to the same slug would silently shadow each other
    /// in the rendered site, so the collision aborts the build instead.
    pub fn new(posts: Vec<Post>) -> Result<Self, ContentError> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for post in &posts {
            if let Some(first) = seen.insert(&post.slug, &post.source) {
                return Err(ContentError::DuplicateSlug {
                    slug: post.slug.clone(),
                    first: first.to_string(),
                    second: post.source.clone(),
                });
            }
        }
        Ok(Self { posts })
    }

    /// All posts in registration order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All posts, newest first.
    ///
    /// Equal dates keep their registration order: the sort is stable and the
    /// comparator is a total order over dates, nothing else.
    pub fn sorted_by_date(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Posts whose title contains `query`, case-insensitively.
    ///
    /// Matches come back in registration order, not re-sorted by relevance
    /// or date. The query is case-folded but otherwise untouched; the empty
    /// query matches every post.
    pub fn filter_by_title(&self, query: &str) -> Vec<&Post> {
        let query = query.to_lowercase();
        self.posts
            .iter()
            .filter(|post| post.title.to_lowercase().contains(&query))
            .collect()
    }
}
