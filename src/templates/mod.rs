//! Page templates using the Tera template engine
//!
//! A site provides two templates: one for content articles, which sees
//! `title`, `date` and `content`, and one for standalone pages, which sees
//! `title` and `content`. Pages are undated, so `date` is always empty there.

use std::fs;
use std::path::Path;
use tera::{Context, Tera};

use crate::content::{Post, PostType};
use crate::error::{Error, Result};

/// Starter template for content articles, written by `init`
pub const DEFAULT_CONTENT_TEMPLATE: &str = include_str!("default/content.html");

/// Starter template for standalone pages, written by `init`
pub const DEFAULT_META_TEMPLATE: &str = include_str!("default/meta.html");

/// Renders posts through the site's two templates
pub struct TemplateRenderer {
    tera: Tera,
    content_template: String,
    meta_template: String,
}

impl TemplateRenderer {
    /// Read both templates from `template_dir`
    pub fn load(template_dir: &Path, content_template: &str, meta_template: &str) -> Result<Self> {
        let read = |name: &str| {
            let path = template_dir.join(name);
            tracing::debug!("Loading template {:?}", path);
            fs::read_to_string(&path).map_err(|e| Error::io(path, e))
        };

        let content_source = read(content_template)?;
        let meta_source = read(meta_template)?;

        Self::from_sources(
            (content_template, &content_source),
            (meta_template, &meta_source),
        )
    }

    /// Build a renderer from `(name, source)` pairs
    pub fn from_sources(content: (&str, &str), meta: (&str, &str)) -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies are already HTML
        tera.autoescape_on(vec![]);

        for (name, source) in [content, meta] {
            tera.add_raw_template(name, source)
                .map_err(|source| Error::Template {
                    name: name.to_string(),
                    source,
                })?;
        }

        Ok(Self {
            tera,
            content_template: content.0.to_string(),
            meta_template: meta.0.to_string(),
        })
    }

    /// Render a post into a complete HTML document
    pub fn render(&self, post: &Post) -> Result<String> {
        let mut context = Context::new();
        context.insert("title", &post.title);
        context.insert("content", &post.content);

        let template = match post.post_type {
            PostType::Content => {
                let date = post.date.as_ref().map(|d| d.as_str()).unwrap_or_default();
                context.insert("date", date);
                &self.content_template
            }
            PostType::Meta => {
                context.insert("date", "");
                &self.meta_template
            }
        };

        self.tera
            .render(template, &context)
            .map_err(|source| Error::Template {
                name: template.clone(),
                source,
            })
    }
}
