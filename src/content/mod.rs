//! Content module - handles posts, pages, and content processing

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{parse_date_string, FrontMatter, Metadata};
pub use markdown::MarkdownRenderer;
pub use post::{is_markdown_file, output_path_for, strip_markdown_extension, title_from_filename};
pub use post::{Post, PostDate, PostType};
