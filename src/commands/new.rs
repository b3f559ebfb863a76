//! Create a new article or page

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Site;

/// Create a new content article (or a root page with `page`) and return its path
pub fn create_post(site: &Site, title: &str, page: bool) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    create_post_on(site, title, page, today)
}

fn create_post_on(site: &Site, title: &str, page: bool, date: NaiveDate) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = if page {
        site.base_dir.clone()
    } else {
        content_dir(site)
    };
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {:?}", target_dir))?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let header = if page {
        format!("title: {}\n\n", title)
    } else {
        format!("title: {}\ndate: {}\n\n", title, date.format("%Y-%m-%d"))
    };

    fs::write(&file_path, header).with_context(|| format!("Failed to write {:?}", file_path))?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Directory part of the content glob, up to the first wildcard
fn content_dir(site: &Site) -> PathBuf {
    let literal: PathBuf = Path::new(&site.config.content_glob)
        .components()
        .take_while(|c| {
            let s = c.as_os_str().to_string_lossy();
            !s.contains(['*', '?', '['])
        })
        .collect();

    site.base_dir.join(literal)
}
