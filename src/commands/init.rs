//! Initialize a new site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::templates::{DEFAULT_CONTENT_TEMPLATE, DEFAULT_META_TEMPLATE};
use crate::CONFIG_FILE;

/// Initialize a new site in the given directory. Existing files are left alone.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();

    fs::create_dir_all(target_dir.join("content"))?;
    fs::create_dir_all(target_dir.join(&config.template_dir))?;

    let config_content = format!(
        "# mdsite configuration\n# Paths and patterns are relative to this directory.\n\n{}",
        serde_yaml::to_string(&config)?
    );
    write_new(&target_dir.join(CONFIG_FILE), &config_content)?;

    let template_dir = target_dir.join(&config.template_dir);
    write_new(
        &template_dir.join(&config.content_template),
        DEFAULT_CONTENT_TEMPLATE,
    )?;
    write_new(&template_dir.join(&config.meta_template), DEFAULT_META_TEMPLATE)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        "title: Hello World\ndate: {}\n\nWelcome! This is your first article. \
         Edit `content/hello-world.md`, then run `mdsite build`.\n",
        now.format("%Y-%m-%d")
    );
    write_new(&target_dir.join("content/hello-world.md"), &sample_post)?;

    Ok(())
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}
