//! Content loader - loads posts from the source directory

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, MarkdownRenderer, Post, PostsIndex};
use crate::helpers::format_date;
use crate::Site;

/// Loads posts from the posts directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all posts and build the query index.
    ///
    /// Posts register in file-name order (WalkDir is sorted), so the index's
    /// registration order is deterministic across builds. Any malformed post
    /// aborts the load; nothing is skipped silently.
    pub fn load_posts(&self) -> Result<PostsIndex, ContentError> {
        let posts_dir = self.site.source_dir.join(&self.site.config.posts_dir);
        if !posts_dir.exists() {
            return PostsIndex::new(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_content_file(path) {
                let post = self.load_post(path)?;
                tracing::debug!("Loaded post {} from {:?}", post.slug, path);
                posts.push(post);
            }
        }

        PostsIndex::new(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) = FrontMatter::parse(&content).map_err(|source| {
            ContentError::FrontMatter {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let date = fm.parse_date().ok_or_else(|| ContentError::InvalidDate {
            path: path.to_path_buf(),
            date: fm.date.clone(),
        })?;

        // Slug comes from the file name, not the title, so renaming a file
        // changes the URL while retitling a post does not
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let source = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let mut post = Post::new(fm.title, date, source);
        post.summary = fm.summary;
        post.slug = slug;
        post.formatted_date = format_date(&date, &self.site.config.date_format);
        post.tags = fm.tags;
        post.images = fm.images;
        post.raw = body.to_string();
        post.content = self.renderer.render(body);
        post.full_source = path.to_path_buf();

        Ok(post)
    }
}

/// Check if a file is a markdown/MDX content file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site_with_posts(posts: &[(&str, &str)]) -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("source").join("posts");
        fs::create_dir_all(&posts_dir).unwrap();
        for (name, content) in posts {
            fs::write(posts_dir.join(name), content).unwrap();
        }
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_load_posts_in_filename_order() {
        let (_dir, site) = site_with_posts(&[
            (
                "ui-components-with-d3js.mdx",
                "---\ntitle: D3 Components\nsummary: s\ndate: 2021-06-01\n---\nBody A\n",
            ),
            (
                "graphql-query-parser.mdx",
                "---\ntitle: GraphQL Parsing\nsummary: s\ndate: 2020-01-01\n---\nBody B\n",
            ),
        ]);

        let index = ContentLoader::new(&site).load_posts().unwrap();
        assert_eq!(index.len(), 2);
        // Registration order follows file names, not dates
        let slugs: Vec<_> = index.posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["graphql-query-parser", "ui-components-with-d3js"]);
    }

    #[test]
    fn test_slug_strips_extension_only() {
        let (_dir, site) = site_with_posts(&[
            (
                "react-native-formik-yup.md",
                "---\ntitle: Formik\nsummary: s\ndate: 2022-01-01\n---\n",
            ),
            (
                "react-native-formik.mdx",
                "---\ntitle: Formik 2\nsummary: s\ndate: 2022-01-02\n---\n",
            ),
        ]);

        let index = ContentLoader::new(&site).load_posts().unwrap();
        let slugs: Vec<_> = index.posts().iter().map(|p| p.slug.as_str()).collect();
        // `-` sorts before `.`, so the -yup file registers first
        assert_eq!(slugs, vec!["react-native-formik-yup", "react-native-formik"]);
    }

    #[test]
    fn test_missing_frontmatter_field_fails_the_load() {
        let (_dir, site) = site_with_posts(&[(
            "broken.md",
            "---\ntitle: No Summary Or Date\n---\nBody\n",
        )]);

        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { .. }));
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_bad_date_fails_the_load() {
        let (_dir, site) = site_with_posts(&[(
            "bad-date.md",
            "---\ntitle: T\nsummary: s\ndate: sometime in june\n---\n",
        )]);

        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate { .. }));
    }

    #[test]
    fn test_duplicate_slug_fails_the_load() {
        let (_dir, site) = site_with_posts(&[
            ("same-post.md", "---\ntitle: A\nsummary: s\ndate: 2021-01-01\n---\n"),
            ("same-post.mdx", "---\ntitle: B\nsummary: s\ndate: 2021-01-02\n---\n"),
        ]);

        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { .. }));
        assert!(err.to_string().contains("same-post"));
    }

    #[test]
    fn test_missing_posts_dir_is_empty_index() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let index = ContentLoader::new(&site).load_posts().unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_rendered_body_and_formatted_date() {
        let (_dir, site) = site_with_posts(&[(
            "hello.md",
            "---\ntitle: Hello\nsummary: s\ndate: 2021-06-01\n---\n# Heading\n",
        )]);

        let index = ContentLoader::new(&site).load_posts().unwrap();
        let post = &index.posts()[0];
        assert!(post.content.contains("<h1>Heading</h1>"));
        assert_eq!(post.formatted_date, "June 1, 2021");
    }
}
