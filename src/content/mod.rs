//! Content module - manifest, markdown normalization, previews and rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod plaintext;
mod post;
mod preview;

pub use frontmatter::{normalize, remove_code_blocks, remove_front_matter};
pub use loader::{FetchError, FileSource, MarkdownSource};
pub use markdown::{is_safe_url, markdown_to_html, process_inline};
pub use plaintext::{markdown_to_plain_text, reading_time, READING_SPEED_WPM};
pub use post::{cache_key, Manifest, ManifestIssue, PostMeta};
pub use preview::{
    extract_preview, find_sentence_boundary, split_paragraphs, EMPTY_PREVIEW, PREVIEW_THRESHOLD,
};

/// Plain text of a whole post, for reading time and search
pub fn post_plain_text(markdown: &str) -> String {
    markdown_to_plain_text(&normalize(markdown))
}
