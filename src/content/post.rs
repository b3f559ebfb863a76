//! Post model

use chrono::NaiveDateTime;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::cmp::Ordering;
use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::frontmatter::parse_date_string;
use crate::error::{Error, Result};

/// Characters escaped in a link path segment. Parentheses and brackets
/// would otherwise end a Markdown link early.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'(')
    .add(b')')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']');

/// Which template a post goes through, and whether it is indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    /// Article from the content directory
    Content,
    /// Standalone page from the site root
    Meta,
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostType::Content => f.write_str("content"),
            PostType::Meta => f.write_str("meta"),
        }
    }
}

/// A front-matter date: the text as written plus its calendar value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDate {
    raw: String,
    value: NaiveDateTime,
}

impl PostDate {
    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        let value = parse_date_string(raw).ok_or_else(|| Error::InvalidDate {
            path: path.to_path_buf(),
            value: raw.to_string(),
        })?;
        Ok(Self {
            raw: raw.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Ord for PostDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for PostDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A post or standalone page
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: Option<PostDate>,

    /// Rendered HTML body
    pub content: String,

    /// Source path without its Markdown extension
    pub filename: PathBuf,

    pub post_type: PostType,

    /// Full source file path
    pub source: PathBuf,
}

impl Post {
    /// Where the rendered page is written: `<filename>.html`
    pub fn output_path(&self) -> PathBuf {
        with_html_suffix(&self.filename)
    }

    /// Link to the rendered page, relative to `root`, with `/` separators
    pub fn link(&self, root: &Path) -> String {
        let output = self.output_path();
        let relative = output.strip_prefix(root).unwrap_or(&output);

        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy()),
                Component::ParentDir => Some("..".into()),
                _ => None,
            })
            .map(|segment| utf8_percent_encode(&segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Strip exactly one trailing Markdown extension (`.md` or `.markdown`)
pub fn strip_markdown_extension(path: &Path) -> PathBuf {
    if is_markdown_file(path) {
        path.with_extension("")
    } else {
        path.to_path_buf()
    }
}

/// Output path for a Markdown source file
pub fn output_path_for(source: &Path) -> PathBuf {
    with_html_suffix(&strip_markdown_extension(source))
}

fn with_html_suffix(filename: &Path) -> PathBuf {
    let mut path = OsString::from(filename.as_os_str());
    path.push(".html");
    PathBuf::from(path)
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Title-case a file stem: `about-me.md` becomes `About Me`
pub fn title_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled");

    stem.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
