//! List site content

use anyhow::Result;

use crate::work;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let index = site.load_posts()?;
            println!("Posts ({}):", index.len());
            for post in index.sorted_by_date() {
                println!(
                    "  {} - {} [{}]",
                    post.formatted_date, post.title, post.slug
                );
            }
        }
        "work" => {
            let mut items = site.scan_work()?;
            work::sort_for_display(&mut items);
            println!("Work items ({}):", items.len());
            for item in items {
                let video = if item.video.is_some() { " [video]" } else { "" };
                println!("  {}{}", item.name, video);
            }
        }
        "tag" | "tags" => {
            let index = site.load_posts()?;
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in index.posts() {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, work, tag",
                content_type
            );
        }
    }

    Ok(())
}
