//! Front-matter parsing
//!
//! Documents open with a header of `key: value` lines:
//!
//! ```text
//! title: Hello World
//! date: 2024-01-15
//! tags: rust
//!     markdown
//!
//! Body starts here.
//! ```
//!
//! Keys are case-insensitive. A line indented by four or more spaces adds
//! another value to the previous key. The header ends at the first blank line,
//! at a `---` or `...` line, or at end of file, and may be opened by an
//! optional `---` line.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref META_RE: Regex =
        Regex::new(r"^[ ]{0,3}(?P<key>[A-Za-z0-9_-]+):\s*(?P<value>.*)$").unwrap();
    static ref META_MORE_RE: Regex = Regex::new(r"^[ ]{4,}(?P<value>.*)$").unwrap();
    static ref BEGIN_RE: Regex = Regex::new(r"^-{3}(\s.*)?$").unwrap();
    static ref END_RE: Regex = Regex::new(r"^(-{3}|\.{3})(\s.*)?$").unwrap();
}

/// Raw header values, keyed by lowercased name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata(BTreeMap<String, Vec<String>>);

impl Metadata {
    /// Split a document into its header values and the remaining body.
    ///
    /// A header interrupted by a line that is neither `key: value` nor a
    /// continuation is not a header: the whole document comes back as body.
    pub fn parse(content: &str) -> (Self, &str) {
        let mut meta = Metadata::default();
        let mut current_key: Option<String> = None;
        let mut offset = 0;

        let mut lines = content.split_inclusive('\n').peekable();
        if let Some(first) = lines.peek() {
            if BEGIN_RE.is_match(first.trim_end()) {
                offset += first.len();
                lines.next();
            }
        }

        for raw in lines {
            let line = raw.trim_end_matches(['\n', '\r']);
            offset += raw.len();

            if line.trim().is_empty() || END_RE.is_match(line) {
                return (meta, &content[offset..]);
            }

            if let Some(caps) = META_RE.captures(line) {
                let key = caps["key"].to_lowercase();
                meta.0
                    .entry(key.clone())
                    .or_default()
                    .push(caps["value"].trim().to_string());
                current_key = Some(key);
                continue;
            }

            match (&current_key, META_MORE_RE.captures(line)) {
                (Some(key), Some(caps)) => {
                    if let Some(values) = meta.0.get_mut(key) {
                        values.push(caps["value"].trim().to_string());
                    }
                }
                _ => return (Metadata::default(), content),
            }
        }

        (meta, &content[offset..])
    }

    /// First value recorded for a key
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Typed front-matter of a post or page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> (Self, &str) {
        let (meta, body) = Metadata::parse(content);
        (Self::from_metadata(&meta), body)
    }

    pub fn from_metadata(meta: &Metadata) -> Self {
        Self {
            title: meta.first("title").map(str::to_string),
            date: meta.first("date").map(str::to_string),
        }
    }
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}

#[cfg(test)]
impl Metadata {
    fn get(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
