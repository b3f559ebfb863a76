//! mdsite: a minimal static site generator
//!
//! Content articles under `content/` and loose Markdown pages in the site
//! root are rendered through two Tera templates. Each HTML file lands next to
//! its source, and an index of articles, newest first, is written as
//! `index.md` and rendered like any other page.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod templates;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

/// Configuration file looked up in the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// A site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Template directory
    pub template_dir: PathBuf,
}

impl Site {
    /// Open a site, reading `_config.yml` when it exists
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let template_dir = base_dir.join(&config.template_dir);

        Self {
            config,
            base_dir,
            template_dir,
        }
    }

    /// Path of the generated index Markdown
    pub fn index_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.index_filename)
    }

    /// Build the site
    pub fn build(&self) -> anyhow::Result<commands::build::BuildSummary> {
        commands::build::run(self)
    }

    /// Remove generated files
    pub fn clean(&self) -> anyhow::Result<()> {
        commands::clean::run(self)
    }
}
