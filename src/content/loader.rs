//! Content loader - loads posts and pages matched by the configured globs

use std::fs;
use std::path::{Path, PathBuf};

use super::{strip_markdown_extension, title_from_filename};
use super::{FrontMatter, MarkdownRenderer, Post, PostDate, PostType};
use crate::error::{Error, Result};
use crate::Site;

/// Loads content from the site root
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::from_config(&site.config.highlight);
        Self { site, renderer }
    }

    /// Load all content articles
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        self.load(&self.site.config.content_glob, PostType::Content)
    }

    /// Load all standalone pages from the site root
    pub fn load_pages(&self) -> Result<Vec<Post>> {
        self.load(&self.site.config.root_glob, PostType::Meta)
    }

    /// Load every file matching `pattern`, in glob order
    pub fn load(&self, pattern: &str, post_type: PostType) -> Result<Vec<Post>> {
        let mut posts = Vec::new();

        for path in self.matching_files(pattern)? {
            posts.push(self.load_post(&path, post_type)?);
        }

        tracing::debug!("Loaded {} {} posts from {}", posts.len(), post_type, pattern);
        Ok(posts)
    }

    /// Files matching `pattern` relative to the site root, minus excluded names
    pub fn matching_files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let base = glob::Pattern::escape(&self.site.base_dir.to_string_lossy());
        let full = Path::new(&base).join(pattern);
        let full = full.to_string_lossy();

        let entries = glob::glob(&full).map_err(|source| Error::Pattern {
            pattern: full.to_string(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?;
            if !path.is_file() {
                continue;
            }

            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            if self.site.config.is_excluded(name) {
                tracing::debug!("Skipping excluded file {:?}", path);
                continue;
            }

            files.push(path);
        }

        Ok(files)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path, post_type: PostType) -> Result<Post> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.parse_post(path, &text, post_type)
    }

    /// Build a post from already-read source text
    pub fn parse_post(&self, path: &Path, text: &str, post_type: PostType) -> Result<Post> {
        let (fm, body) = FrontMatter::parse(text);

        let title = match fm.title {
            Some(title) => title,
            None if post_type == PostType::Meta && self.site.config.page_title_from_filename => {
                title_from_filename(path)
            }
            None => {
                return Err(Error::MissingField {
                    path: path.to_path_buf(),
                    field: "title",
                })
            }
        };

        // Only articles are dated; a page's date is neither shown nor sorted
        let date = match post_type {
            PostType::Content => fm
                .date
                .as_deref()
                .map(|raw| PostDate::parse(raw, path))
                .transpose()?,
            PostType::Meta => None,
        };

        Ok(Post {
            title,
            date,
            content: self.renderer.render(body),
            filename: strip_markdown_extension(path),
            post_type,
            source: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn site_with(files: &[(&str, &str)]) -> (TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }
        let site = Site::with_config(dir.path(), SiteConfig::default());
        (dir, site)
    }

    #[test]
    fn test_parse_post_fields() {
        let (dir, site) = site_with(&[(
            "content/foo.md",
            "title: Foo\ndate: 2024-01-01\n\nHello.\n",
        )]);
        let loader = ContentLoader::new(&site);

        let posts = loader.load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.title, "Foo");
        assert_eq!(post.date.as_ref().unwrap().as_str(), "2024-01-01");
        assert!(post.content.contains("<p>Hello.</p>"));
        assert_eq!(post.filename, dir.path().join("content/foo"));
        assert_eq!(post.post_type, PostType::Content);
    }

    #[test]
    fn test_missing_date_is_none() {
        let (_dir, site) = site_with(&[("about.md", "title: About\n\nMe.\n")]);
        let pages = ContentLoader::new(&site).load_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].date.is_none());
    }

    #[test]
    fn test_missing_title_is_fatal() {
        let (_dir, site) = site_with(&[("content/untitled.md", "date: 2024-01-01\n\nBody\n")]);
        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "title", .. }));
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let (_dir, site) = site_with(&[("content/a.md", "title: A\ndate: soon\n\nBody\n")]);
        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(matches!(err, Error::InvalidDate { .. }));
    }

    #[test]
    fn test_page_date_is_ignored() {
        let (_dir, site) = site_with(&[("about.md", "title: About\ndate: Summer 2020\n\nMe.\n")]);
        let pages = ContentLoader::new(&site).load_pages().unwrap();
        assert_eq!(pages[0].title, "About");
        assert!(pages[0].date.is_none());
    }

    #[test]
    fn test_readme_is_excluded() {
        let (_dir, site) = site_with(&[
            ("README.md", "# Repo readme, no front-matter\n"),
            ("about.md", "title: About\n\nMe.\n"),
        ]);
        let pages = ContentLoader::new(&site).load_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "About");
    }

    #[test]
    fn test_page_title_from_filename() {
        let (dir, _) = site_with(&[("contact-us.md", "No header here.\n")]);
        let config = SiteConfig {
            page_title_from_filename: true,
            ..SiteConfig::default()
        };
        let site = Site::with_config(dir.path(), config);
        let loader = ContentLoader::new(&site);

        let pages = loader.load_pages().unwrap();
        assert_eq!(pages[0].title, "Contact Us");
        assert!(pages[0].content.contains("<p>No header here.</p>"));

        // content articles still require an explicit title
        let path = dir.path().join("content/x.md");
        assert!(loader.parse_post(&path, "Body only\n", PostType::Content).is_err());
    }

    #[test]
    fn test_empty_content_dir() {
        let (_dir, site) = site_with(&[]);
        assert!(ContentLoader::new(&site).load_posts().unwrap().is_empty());
    }
}
