//! Preview extraction for list views
//!
//! A preview is one or more `<p>` blocks cut from the start of a post. Short
//! posts are shown whole; longer ones are cut at the first sentence end past
//! [`PREVIEW_THRESHOLD`] characters, or hard-truncated there when no sentence
//! end follows.

use lazy_static::lazy_static;
use regex::Regex;

use super::frontmatter::normalize;
use super::plaintext::markdown_to_plain_text;
use crate::helpers::{html_escape, paragraph};

/// Preview length threshold, in characters of plain text
pub const PREVIEW_THRESHOLD: usize = 300;

/// Shown when a post has no prose at all
pub const EMPTY_PREVIEW: &str = "No content available.";

const ELLIPSIS: char = '…';
const PARAGRAPH_SEPARATOR: &str = "\n\n";

lazy_static! {
    static ref BLANK_LINE: Regex = Regex::new(r"\n\s*\n").unwrap();
    // Terminal punctuation, one optional closer, then whitespace.
    static ref SENTENCE_END: Regex = Regex::new(r#"([.!?…]["\])]?)\s"#).unwrap();
}

/// Split markdown into trimmed, non-empty paragraphs
pub fn split_paragraphs(markdown: &str) -> Vec<&str> {
    BLANK_LINE
        .split(markdown)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Find where to cut `text` for a preview
///
/// Returns a byte offset into `text`. Text of at most [`PREVIEW_THRESHOLD`]
/// characters needs no cut and yields its full length. Otherwise the search
/// starts at the threshold and the offset points just past the terminal
/// punctuation (and closer), before the whitespace. `None` means no sentence
/// end follows the threshold.
pub fn find_sentence_boundary(text: &str) -> Option<usize> {
    let start = match char_offset(text, PREVIEW_THRESHOLD) {
        Some(start) => start,
        None => return Some(text.len()),
    };

    SENTENCE_END
        .captures(&text[start..])
        .and_then(|caps| caps.get(1))
        .map(|terminal| start + terminal.end())
}

/// Extract the preview paragraphs (as HTML) from a raw markdown document
pub fn extract_preview(markdown: &str) -> Vec<String> {
    let content = normalize(markdown);
    let paragraphs = split_paragraphs(&content);

    if paragraphs.is_empty() {
        return vec![paragraph(EMPTY_PREVIEW)];
    }

    if let [first, second, ..] = paragraphs.as_slice() {
        let first = markdown_to_plain_text(first);
        let second = markdown_to_plain_text(second);
        let combined = first.chars().count() + PARAGRAPH_SEPARATOR.len() + second.chars().count();
        if combined < PREVIEW_THRESHOLD {
            return vec![
                paragraph(&html_escape(&first)),
                paragraph(&html_escape(&second)),
            ];
        }
    }

    let all_text = paragraphs
        .iter()
        .map(|p| markdown_to_plain_text(p))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR);

    let hard_cut = match char_offset(&all_text, PREVIEW_THRESHOLD) {
        Some(offset) => offset,
        None => return vec![paragraph(&html_escape(&all_text))],
    };

    let cut = find_sentence_boundary(&all_text).unwrap_or(hard_cut);
    let preview = all_text[..cut].trim();
    vec![paragraph(&format!("{}{}", html_escape(preview), ELLIPSIS))]
}

/// Byte offset of the `n`th character, `None` when the text is not longer than `n`
fn char_offset(text: &str, n: usize) -> Option<usize> {
    text.char_indices().nth(n).map(|(offset, _)| offset)
}
