//! Build the site

use anyhow::{Context, Result};

use crate::content::loader::ContentLoader;
use crate::generator::{index, Generator};
use crate::Site;

/// What a build produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Content articles rendered and indexed
    pub posts: usize,
    /// Standalone pages rendered, the index included
    pub pages: usize,
}

/// Run the whole pipeline:
/// load articles, write the index, render articles, then load and render
/// root pages (which now include the index).
pub fn run(site: &Site) -> Result<BuildSummary> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(site);
    let generator = Generator::new(site).context("Failed to load templates")?;

    let mut posts = loader
        .load_posts()
        .context("Failed to load content articles")?;
    index::sort_posts(&mut posts);

    for post in posts.iter().filter(|p| p.date.is_none()) {
        tracing::warn!("{:?} has no date, listing it last", post.source);
    }

    let index_path = site.index_path();
    let markdown = index::build_index(&posts, &site.base_dir, &site.config.index_title);
    index::write_index(&index_path, &markdown)?;
    tracing::info!("Indexed {} articles in {:?}", posts.len(), index_path);

    generator
        .generate(&posts)
        .context("Failed to render content articles")?;

    let pages = loader
        .load_pages()
        .context("Failed to load standalone pages")?;
    generator
        .generate(&pages)
        .context("Failed to render standalone pages")?;

    tracing::info!(
        "Generated {} articles and {} pages in {:.2}s",
        posts.len(),
        pages.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(BuildSummary {
        posts: posts.len(),
        pages: pages.len(),
    })
}
