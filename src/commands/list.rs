//! List site content

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::generator::index;
use crate::Site;

/// Print content articles in index order, then standalone pages
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);

    let mut posts = loader.load_posts()?;
    index::sort_posts(&mut posts);
    let pages = loader.load_pages()?;

    let stdout = std::io::stdout();
    write_listing(&mut stdout.lock(), &site.base_dir, &posts, &pages)?;
    Ok(())
}

fn write_listing(
    out: &mut impl Write,
    root: &Path,
    posts: &[Post],
    pages: &[Post],
) -> std::io::Result<()> {
    writeln!(out, "Posts ({}):", posts.len())?;
    for post in posts {
        let date = post.date.as_ref().map(|d| d.as_str()).unwrap_or("-");
        writeln!(out, "  {} - {} [{}]", date, post.title, relative(root, &post.source))?;
    }

    writeln!(out, "Pages ({}):", pages.len())?;
    for page in pages {
        writeln!(out, "  {} [{}]", page.title, relative(root, &page.source))?;
    }

    Ok(())
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_listing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("content")).unwrap();
        fs::write(root.join("content/a.md"), "title: First\ndate: 2024-01-01\n\nx").unwrap();
        fs::write(root.join("content/b.md"), "title: Second\ndate: 2024-03-01\n\nx").unwrap();
        fs::write(root.join("about.md"), "title: About\n\nx").unwrap();

        let site = Site::new(root).unwrap();
        let loader = ContentLoader::new(&site);
        let mut posts = loader.load_posts().unwrap();
        index::sort_posts(&mut posts);
        let pages = loader.load_pages().unwrap();

        let mut out = Vec::new();
        write_listing(&mut out, root, &posts, &pages).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = format!(
            "Posts (2):\n  2024-03-01 - Second [{}]\n  2024-01-01 - First [{}]\nPages (1):\n  About [about.md]\n",
            Path::new("content").join("b.md").display(),
            Path::new("content").join("a.md").display(),
        );
        assert_eq!(text, expected);
    }
}
