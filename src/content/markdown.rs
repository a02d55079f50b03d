//! Markdown to safe HTML rendering for article pages
//!
//! The whole document is escaped before any markdown syntax is recognized,
//! so the only tags in the output are the ones this module writes itself.
//! Supported: ATX headings, `- ` bullet lists, paragraphs (lines joined by
//! `<br>`), fenced code blocks, code spans and links.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::helpers::html_escape;

/// Fence marker; backticks are never touched by escaping
const FENCE: &str = "```";

/// URL schemes allowed in links; anything else is rendered as plain text
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"^(#{1,6})\s+(.+)$").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"^-\s+(.+)$").unwrap();
    static ref CODE_SPAN: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref LANGUAGE: Regex = Regex::new(r"^[A-Za-z0-9_+-]+$").unwrap();
}

/// Open block while walking the document
#[derive(Debug, Default, PartialEq)]
enum Block {
    #[default]
    None,
    /// Inline-processed lines of the current paragraph
    Paragraph(Vec<String>),
    List,
}

/// Line-by-line HTML writer
#[derive(Debug, Default)]
struct BlockWriter {
    out: Vec<String>,
    block: Block,
}

impl BlockWriter {
    /// Close whatever block is open
    fn flush(&mut self) {
        match std::mem::take(&mut self.block) {
            Block::None => {}
            Block::Paragraph(lines) => self.out.push(format!("<p>{}</p>", lines.join("<br>"))),
            Block::List => self.out.push("</ul>".to_string()),
        }
    }

    fn blank(&mut self) {
        self.flush();
    }

    fn heading(&mut self, level: usize, text: &str) {
        self.flush();
        self.out.push(format!("<h{level}>{}</h{level}>", process_inline(text)));
    }

    fn list_item(&mut self, text: &str) {
        if matches!(self.block, Block::Paragraph(_)) {
            self.flush();
        }
        if self.block != Block::List {
            self.out.push("<ul>".to_string());
            self.block = Block::List;
        }
        self.out.push(format!("<li>{}</li>", process_inline(text)));
    }

    fn text(&mut self, line: &str) {
        let line = process_inline(line);
        if let Block::Paragraph(lines) = &mut self.block {
            lines.push(line);
            return;
        }
        self.flush();
        self.block = Block::Paragraph(vec![line]);
    }

    /// Emit a fenced block; `info` and `code` are already escaped
    ///
    /// An info string that is not a plain language name is kept as the
    /// first line of the code.
    fn code_block(&mut self, info: &str, code: &[&str]) {
        self.flush();
        let mut body = code.join("\n");
        let class = if LANGUAGE.is_match(info) {
            format!(r#" class="language-{}""#, info)
        } else {
            if !info.is_empty() {
                body = format!("{}\n{}", info, body);
            }
            String::new()
        };
        self.out.push(format!("<pre><code{}>{}</code></pre>", class, body.trim()));
    }

    fn finish(mut self) -> String {
        self.flush();
        self.out.join("\n")
    }
}

/// Render markdown (front matter already removed) to HTML
///
/// # Examples
/// ```
/// use scriptorium::content::markdown_to_html;
/// assert_eq!(
///     markdown_to_html("# Title\n\nHello <world>"),
///     "<h1>Title</h1>\n<p>Hello &lt;world&gt;</p>"
/// );
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let escaped = html_escape(markdown);
    let lines: Vec<&str> = escaped.lines().collect();
    let mut writer = BlockWriter::default();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() {
            writer.blank();
            continue;
        }

        // A fence line carries no further backticks; "```x``` text" is prose.
        if let Some(info) = line.strip_prefix(FENCE).filter(|info| !info.contains('`')) {
            let body_start = i;
            while i < lines.len() && !lines[i].trim_start().starts_with(FENCE) {
                i += 1;
            }
            writer.code_block(info.trim(), &lines[body_start..i]);
            // Skip the closing fence; an unterminated block runs to the end.
            i += 1;
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            writer.heading(caps[1].len(), &caps[2]);
            continue;
        }

        if let Some(caps) = LIST_ITEM.captures(line) {
            writer.list_item(&caps[1]);
            continue;
        }

        writer.text(line);
    }

    writer.finish()
}

/// Inline markup on one already-escaped line: code spans, then links
///
/// Link syntax inside a code span is left alone.
pub fn process_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in CODE_SPAN.captures_iter(text) {
        let span = caps.get(0).map_or(0..0, |m| m.range());
        out.push_str(&replace_links(&text[last..span.start]));
        out.push_str(&format!("<code>{}</code>", &caps[1]));
        last = span.end;
    }
    out.push_str(&replace_links(&text[last..]));
    out
}

fn replace_links(text: &str) -> String {
    LINK.replace_all(text, |caps: &Captures| {
        let (label, url) = (&caps[1], &caps[2]);
        if is_safe_url(url) {
            format!(r#"<a href="{}">{}</a>"#, url.trim(), label)
        } else {
            tracing::debug!("Dropping link with unsafe URL: {}", url);
            label.to_string()
        }
    })
    .into_owned()
}

/// Whether a link target is relative or uses an allowed scheme
///
/// A colon only introduces a scheme when it comes before any `/`, `?` or
/// `#`; otherwise it belongs to the path, query or fragment of a relative URL.
pub fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }

    let Some((scheme, _)) = url.split_once(':') else {
        return true;
    };
    if scheme.contains(['/', '?', '#']) {
        return true;
    }

    SAFE_SCHEMES
        .iter()
        .any(|safe| scheme.eq_ignore_ascii_case(safe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(markdown_to_html("# One"), "<h1>One</h1>");
        assert_eq!(markdown_to_html("###### Six"), "<h6>Six</h6>");
        assert_eq!(markdown_to_html("####### Seven"), "<p>####### Seven</p>");
        assert_eq!(markdown_to_html("#NoSpace"), "<p>#NoSpace</p>");
    }

    #[test]
    fn test_paragraph_lines_joined() {
        assert_eq!(
            markdown_to_html("first line\nsecond line\n\nnext"),
            "<p>first line<br>second line</p>\n<p>next</p>"
        );
    }

    #[test]
    fn test_list() {
        let html = markdown_to_html("Intro\n- one\n- two\nafter");
        assert_eq!(
            html,
            "<p>Intro</p>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>after</p>"
        );
    }

    #[test]
    fn test_list_closed_by_blank_and_heading() {
        assert_eq!(
            markdown_to_html("- a\n\n- b\n## H"),
            "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n<h2>H</h2>"
        );
    }

    #[test]
    fn test_code_block() {
        let html = markdown_to_html("Text\n```rust\nfn main() {\n    println!(\"<hi>\");\n}\n```\nAfter");
        assert_eq!(
            html,
            "<p>Text</p>\n<pre><code class=\"language-rust\">fn main() {\n    println!(&quot;&lt;hi&gt;&quot;);\n}</code></pre>\n<p>After</p>"
        );
    }

    #[test]
    fn test_code_block_keeps_markdown_literal() {
        let html = markdown_to_html("```\n# not a heading\n- not a list\n```");
        assert_eq!(
            html,
            "<pre><code># not a heading\n- not a list</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_code_block() {
        let html = markdown_to_html("```\nopen\n\nstill code");
        assert_eq!(html, "<pre><code>open\n\nstill code</code></pre>");
    }

    #[test]
    fn test_code_block_bad_language_class() {
        let html = markdown_to_html("``` x\" onclick=\"y\nz\n```");
        assert_eq!(html, "<pre><code>x&quot; onclick=&quot;y\nz</code></pre>");
    }

    #[test]
    fn test_inline_triple_backticks_are_prose() {
        let html = markdown_to_html("```x``` is inline\n\nNext paragraph.\n\n# Heading");
        assert_eq!(
            html,
            "<p>``<code>x</code>`` is inline</p>\n<p>Next paragraph.</p>\n<h1>Heading</h1>"
        );
    }

    #[test]
    fn test_fence_after_inline_triple_backticks() {
        let html = markdown_to_html("see ```x``` here\n```sh\nls\n```");
        assert_eq!(
            html,
            "<p>see ``<code>x</code>`` here</p>\n<pre><code class=\"language-sh\">ls</code></pre>"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            markdown_to_html("use `a < b` here"),
            "<p>use <code>a &lt; b</code> here</p>"
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            markdown_to_html("[x](https://a.b)"),
            r#"<p><a href="https://a.b">x</a></p>"#
        );
        assert_eq!(
            markdown_to_html("[x](/relative)"),
            r#"<p><a href="/relative">x</a></p>"#
        );
        assert_eq!(
            markdown_to_html("[mail](MAILTO:me@example.com)"),
            r#"<p><a href="MAILTO:me@example.com">mail</a></p>"#
        );
    }

    #[test]
    fn test_unsafe_link_dropped() {
        let html = markdown_to_html("[x](javascript:alert(1))");
        assert!(!html.contains("<a"));
        assert!(html.starts_with("<p>x"));

        assert_eq!(markdown_to_html("[y](data:text/html,hi)"), "<p>y</p>");
    }

    #[test]
    fn test_link_inside_code_span_untouched() {
        assert_eq!(
            markdown_to_html("`[a](https://b.c)`"),
            "<p><code>[a](https://b.c)</code></p>"
        );
    }

    #[test]
    fn test_quote_in_url_cannot_break_attribute() {
        let html = markdown_to_html(r#"[x](https://a.b/" onmouseover="alert(1))"#);
        assert!(!html.contains(r#"" onmouseover"#));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_no_raw_script() {
        let inputs = [
            "<script>alert('x')</script>",
            "# <script>bad()</script>",
            "- <script src=x></script>",
            "[<script>](https://a.b)",
            "`<script>`",
            "```\n<script>\n```",
            "Tom & \"Jerry\" <script>",
        ];
        for input in inputs {
            let html = markdown_to_html(input);
            assert!(!html.contains("<script"), "unescaped script in {:?}", html);
        }
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("HTTP://example.com"));
        assert!(is_safe_url("mailto:a@b.c"));
        assert!(is_safe_url("./article.html?slug=a"));
        assert!(is_safe_url("/path?time=10:30"));
        assert!(is_safe_url("#section"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url(" JavaScript:alert(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
        assert!(!is_safe_url("vbscript:x"));
        assert!(!is_safe_url("   "));
    }
}
