//! Markdown to plain text projection
//!
//! Used to measure prose length and estimate reading time. The output is
//! raw text; escaping happens once, when the final HTML is built.

use lazy_static::lazy_static;
use regex::Regex;

/// Default reading speed (words per minute)
pub const READING_SPEED_WPM: u32 = 200;

lazy_static! {
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref EMPHASIS: Regex = Regex::new(r"[*_~]").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
    static ref HEADING: Regex = Regex::new(r"(?m)^#{1,6}[ \t]+").unwrap();
}

/// Reduce inline markdown syntax to plain prose
///
/// The order matters: code spans first so their content survives, then
/// emphasis markers, links and finally heading markers.
///
/// # Examples
/// ```
/// use scriptorium::content::markdown_to_plain_text;
/// assert_eq!(
///     markdown_to_plain_text("## Hi **there**, see [docs](https://x.y) and `code`"),
///     "Hi there, see docs and code"
/// );
/// ```
pub fn markdown_to_plain_text(markdown: &str) -> String {
    let text = INLINE_CODE.replace_all(markdown, "$1");
    let text = EMPHASIS.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    HEADING.replace_all(&text, "").into_owned()
}

/// Estimated reading time in whole minutes, never less than one
pub fn reading_time(plain_text: &str, words_per_minute: u32) -> u32 {
    let words = plain_text.split_whitespace().count() as f64;
    let minutes = (words / f64::from(words_per_minute.max(1))).round() as u32;
    minutes.max(1)
}
