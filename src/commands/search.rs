//! Search posts by title

use anyhow::Result;

use crate::Site;

/// Case-insensitive substring search over post titles
pub fn run(site: &Site, query: &str) -> Result<()> {
    let index = site.load_posts()?;
    let matches = index.filter_by_title(query);

    println!("Matches for \"{}\" ({}):", query, matches.len());
    for post in matches {
        println!("  {} - {} [{}]", post.formatted_date, post.title, post.slug);
    }

    Ok(())
}
