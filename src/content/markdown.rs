//! Markdown rendering with optional syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;

const FALLBACK_THEME: &str = "base16-ocean.dark";

/// Markdown renderer
///
/// Fenced code is emitted as `<pre><code class="language-x">` unless a
/// highlighter is configured.
#[derive(Default)]
pub struct MarkdownRenderer {
    highlighter: Option<Highlighter>,
}

impl MarkdownRenderer {
    /// Create a renderer without highlighting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that highlights fenced code with a syntect theme
    pub fn with_highlighting(theme: &str) -> Self {
        Self {
            highlighter: Highlighter::new(theme),
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        if config.enable {
            Self::with_highlighting(&config.theme)
        } else {
            Self::new()
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();

        let Some(highlighter) = &self.highlighter else {
            html::push_html(&mut html_output, parser);
            return html_output;
        };

        let mut events: Vec<Event> = Vec::new();
        // (language, collected source) of the code block being read
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = highlighter.highlight(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) => match code_block.as_mut() {
                    Some((_, code)) => code.push_str(&text),
                    None => events.push(Event::Text(text)),
                },
                other => events.push(other),
            }
        }

        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    fn new(theme_name: &str) -> Option<Self> {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = match theme_set.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(
                    "Unknown highlight theme {:?}, using {}",
                    theme_name,
                    FALLBACK_THEME
                );
                theme_set.themes.remove(FALLBACK_THEME)?
            }
        };

        Some(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Highlight a code block
    fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(highlighted) => highlighted,
            Err(e) => {
                tracing::debug!("Highlighting {} failed: {}", lang, e);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang,
                    html_escape(code)
                )
            }
        }
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_fenced_code() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<pre><code class="language-rust">fn main() {}"#));
    }

    #[test]
    fn test_render_highlighted_code() {
        let renderer = MarkdownRenderer::with_highlighting("base16-ocean.dark");
        let html = renderer.render("Before\n\n```rust\nfn main() {}\n```\n\nAfter");
        assert!(html.contains("<pre style="));
        assert!(!html.contains("language-rust"));
        assert!(html.contains("<p>Before</p>"));
        assert!(html.contains("<p>After</p>"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let renderer = MarkdownRenderer::with_highlighting("no-such-theme");
        assert!(renderer.highlighter.is_some());
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
