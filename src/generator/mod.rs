//! Generator module - renders posts through the site templates and writes them out

pub mod index;

use std::fs;
use std::path::PathBuf;

use crate::content::Post;
use crate::error::{Error, Result};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Renders posts and writes each next to its source file
pub struct Generator {
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator, reading the site's templates
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::load(
            &site.template_dir,
            &site.config.content_template,
            &site.config.meta_template,
        )?;

        Ok(Self { renderer })
    }

    pub fn with_renderer(renderer: TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Render and write every post, stopping at the first failure
    pub fn generate(&self, posts: &[Post]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(posts.len());

        for post in posts {
            let html = self.renderer.render(post)?;
            written.push(write_post(post, &html)?);
        }

        Ok(written)
    }
}

/// Write rendered HTML to `<filename>.html`, replacing any existing file
pub fn write_post(post: &Post, html: &str) -> Result<PathBuf> {
    let output_path = post.output_path();
    fs::write(&output_path, html).map_err(|e| Error::io(&output_path, e))?;
    tracing::debug!("Generated {} post: {:?}", post.post_type, output_path);
    Ok(output_path)
}
