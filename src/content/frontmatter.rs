//! Front-matter and fenced code removal
//!
//! Both passes run before any prose analysis. Neither can fail: a front-matter
//! block without a closing delimiter is ordinary content, and an unterminated
//! code fence swallows the rest of the document.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Front-matter delimiter line
const DELIMITER: &str = "---";

lazy_static! {
    static ref CODE_BLOCK: Regex = Regex::new(r"(?s)```.*?(?:```|\z)").unwrap();
}

/// Strip a leading `---` delimited front-matter block
///
/// Returns everything after the closing delimiter line, or the whole
/// document unchanged when there is no complete block.
pub fn remove_front_matter(markdown: &str) -> &str {
    let mut lines = line_spans(markdown).skip_while(|(line, _)| line.trim().is_empty());

    match lines.next() {
        Some((line, _)) if line.trim() == DELIMITER => {}
        _ => return markdown,
    }

    for (line, end) in lines {
        if line.trim() == DELIMITER {
            return &markdown[end..];
        }
    }

    markdown
}

/// Remove every fenced code block
pub fn remove_code_blocks(markdown: &str) -> Cow<'_, str> {
    CODE_BLOCK.replace_all(markdown, "")
}

/// Strip front matter, then fenced code
pub fn normalize(markdown: &str) -> Cow<'_, str> {
    remove_code_blocks(remove_front_matter(markdown))
}

/// Iterate lines together with the byte offset just past each line's newline
fn line_spans(text: &str) -> impl Iterator<Item = (&str, usize)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |raw| {
        offset += raw.len();
        (raw.trim_end_matches(['\n', '\r']), offset)
    })
}
