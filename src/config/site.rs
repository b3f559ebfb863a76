//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Main site configuration
///
/// Every path and pattern is relative to the site root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Sources
    pub content_glob: String,
    pub root_glob: String,
    /// File names never picked up by either glob
    pub exclude: Vec<String>,

    // Templates
    pub template_dir: String,
    pub content_template: String,
    pub meta_template: String,

    // Index
    pub index_filename: String,
    pub index_title: String,

    /// Derive a standalone page's title from its file name when front-matter has none
    pub page_title_from_filename: bool,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_glob: "content/*.md".to_string(),
            root_glob: "*.md".to_string(),
            exclude: vec!["README.md".to_string()],

            template_dir: "templates".to_string(),
            content_template: "content.html".to_string(),
            meta_template: "meta.html".to_string(),

            index_filename: "index.md".to_string(),
            index_title: "Index".to_string(),

            page_title_from_filename: false,

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether a file name is on the exclude list
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude.iter().any(|e| e == file_name)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: false,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_glob, "content/*.md");
        assert_eq!(config.root_glob, "*.md");
        assert_eq!(config.index_filename, "index.md");
        assert!(config.is_excluded("README.md"));
        assert!(!config.is_excluded("about.md"));
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content_glob: posts/*.md
index_title: Archive
page_title_from_filename: true
highlight:
  enable: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content_glob, "posts/*.md");
        assert_eq!(config.index_title, "Archive");
        assert!(config.page_title_from_filename);
        assert!(config.highlight.enable);
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
        // untouched keys keep their defaults
        assert_eq!(config.template_dir, "templates");
    }

    #[test]
    fn test_load_reports_bad_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "exclude: [unterminated").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
