//! Remove generated files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::loader::ContentLoader;
use crate::content::output_path_for;
use crate::Site;

/// Delete every HTML file built from a source page, plus the generated index
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);
    let config = &site.config;

    let mut sources = loader.matching_files(&config.content_glob)?;
    sources.extend(loader.matching_files(&config.root_glob)?);

    let index_path = site.index_path();
    if !sources.contains(&index_path) {
        sources.push(index_path.clone());
    }

    for source in &sources {
        remove_if_exists(&output_path_for(source))?;
    }
    remove_if_exists(&index_path)?;

    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to delete {:?}", path))?;
        tracing::info!("Deleted: {:?}", path);
    }
    Ok(())
}
