//! Index builder
//!
//! The index is written as a Markdown page so the standalone-page pass
//! renders it like any other root document.

use std::fs;
use std::path::Path;

use crate::content::Post;
use crate::error::{Error, Result};

/// Sort posts newest first. Undated posts go last; ties break on filename.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.filename.cmp(&b.filename))
    });
}

/// Markdown source of the index page, one link per post in the given order
pub fn build_index(posts: &[Post], root: &Path, title: &str) -> String {
    let mut out = format!("title: {}\n\n", title);

    for post in posts {
        out.push_str(&format!(
            "[{}]({})",
            escape_link_text(&post.title),
            post.link(root)
        ));
        if let Some(date) = &post.date {
            out.push_str(&format!(" ({})", date));
        }
        out.push_str("\n\n");
    }

    out
}

/// Backslash-escape characters that would end link text early or open raw HTML
fn escape_link_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']' | '<') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Write the index Markdown, replacing the previous one
pub fn write_index(path: &Path, markdown: &str) -> Result<()> {
    fs::write(path, markdown).map_err(|e| Error::io(path, e))?;
    tracing::debug!("Wrote index {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PostDate, PostType};
    use std::path::PathBuf;

    fn post(name: &str, date: Option<&str>) -> Post {
        let source = PathBuf::from(format!("/site/content/{}.md", name));
        Post {
            title: name.to_uppercase(),
            date: date.map(|d| PostDate::parse(d, &source).unwrap()),
            content: String::new(),
            filename: PathBuf::from(format!("/site/content/{}", name)),
            post_type: PostType::Content,
            source,
        }
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post("b", Some("2023-06-01")),
            post("c", Some("2024-01-01")),
            post("a", Some("2022-12-31")),
        ];
        sort_posts(&mut posts);
        assert_eq!(titles(&posts), ["C", "B", "A"]);
    }

    #[test]
    fn test_sort_by_calendar_not_text() {
        // "2024/01/09" sorts after "2024-01-10" as text but is the earlier day
        let mut posts = vec![
            post("early", Some("2024/01/09")),
            post("late", Some("2024-01-10")),
        ];
        sort_posts(&mut posts);
        assert_eq!(titles(&posts), ["LATE", "EARLY"]);
    }

    #[test]
    fn test_sort_is_deterministic() {
        let mut posts = vec![
            post("z", None),
            post("y", Some("2024-01-01")),
            post("x", Some("2024-01-01")),
            post("w", None),
        ];
        sort_posts(&mut posts);
        assert_eq!(titles(&posts), ["X", "Y", "W", "Z"]);
    }

    #[test]
    fn test_build_index() {
        let posts = vec![post("new", Some("2024-01-01")), post("old", Some("2023-01-01"))];
        let index = build_index(&posts, Path::new("/site"), "Index");
        assert_eq!(
            index,
            "title: Index\n\n\
             [NEW](content/new.html) (2024-01-01)\n\n\
             [OLD](content/old.html) (2023-01-01)\n\n"
        );
    }

    #[test]
    fn test_build_index_escapes_titles() {
        let mut p = post("a", Some("2024-01-01"));
        p.title = "Arrays] and [slices] <b>".to_string();
        let index = build_index(&[p], Path::new("/site"), "Index");
        assert_eq!(
            index,
            "title: Index\n\n[Arrays\\] and \\[slices\\] \\<b>](content/a.html) (2024-01-01)\n\n"
        );
    }

    #[test]
    fn test_build_index_undated() {
        let index = build_index(&[post("draft", None)], Path::new("/site"), "Index");
        assert_eq!(index, "title: Index\n\n[DRAFT](content/draft.html)\n\n");
    }

    #[test]
    fn test_build_empty_index() {
        assert_eq!(build_index(&[], Path::new("/site"), "Posts"), "title: Posts\n\n");
    }
}
