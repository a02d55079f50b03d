//! HTML helper functions

/// Escape HTML special characters
///
/// The result is safe both as element text and inside a double- or
/// single-quoted attribute value.
///
/// # Examples
/// ```
/// use scriptorium::helpers::html_escape;
/// assert_eq!(html_escape("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Generate an anchor tag
///
/// Both `href` and `text` are escaped. External links open in a new tab
/// without handing the opener to the target page.
///
/// # Examples
/// ```ignore
/// link_to("./blog.html", "Blog", false) // -> <a href="./blog.html">Blog</a>
/// ```
pub fn link_to(href: &str, text: &str, external: bool) -> String {
    if external {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape(href),
            html_escape(text)
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, html_escape(href), html_escape(text))
    }
}

/// Wrap already-safe HTML in a paragraph
pub fn paragraph(inner_html: &str) -> String {
    format!("<p>{}</p>", inner_html)
}
