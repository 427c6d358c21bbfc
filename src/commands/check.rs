//! Validate site content

use anyhow::Result;

use crate::Site;

/// Load every post and work item, surfacing the first error.
///
/// Useful as a pre-publish gate: a site that passes here will not fail
/// mid-build on a malformed post or work config.
pub fn run(site: &Site) -> Result<()> {
    let index = site.load_posts()?;
    tracing::info!("Validated {} posts", index.len());

    let items = site.scan_work()?;
    tracing::info!("Validated {} work items", items.len());

    println!(
        "OK: {} posts, {} work items",
        index.len(),
        items.len()
    );
    Ok(())
}
