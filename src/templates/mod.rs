//! HTML fragments for the blog list and article pages
//!
//! Every fragment escapes the text it is given. Arguments named `*_html`
//! are trusted markup produced by the content module and inserted as-is.

use crate::content::PostMeta;
use crate::helpers::{article_url, blog_url, html_escape, link_to, list_tags, time_tag};

fn reading_time_tag(minutes: Option<u32>) -> String {
    minutes
        .map(|m| format!(r#"<span class="blog-reading-time">~{} min read</span>"#, m))
        .unwrap_or_default()
}

fn post_meta(post: &PostMeta, reading_time: Option<u32>) -> String {
    format!(
        r#"<div class="blog-meta">{}{}{}</div>"#,
        time_tag(&post.date),
        list_tags(&post.tags),
        reading_time_tag(reading_time)
    )
}

/// A post card in the blog list
pub fn blog_card(post: &PostMeta, preview_html: &[String], reading_time: Option<u32>) -> String {
    let href = html_escape(&article_url(&post.slug));
    format!(
        r#"<article class="blog-card">
<h3 class="blog-card__title"><a href="{href}">{title}</a></h3>
{meta}
<div class="blog-preview">
{preview}
</div>
<a class="blog-readmore" href="{href}">Continue reading →</a>
</article>"#,
        href = href,
        title = html_escape(&post.title),
        meta = post_meta(post, reading_time),
        preview = preview_html.join("\n"),
    )
}

/// The "Latest Post" block; shows only the first preview paragraph
pub fn featured_post(
    post: &PostMeta,
    preview_html: &[String],
    reading_time: Option<u32>,
) -> String {
    let href = html_escape(&article_url(&post.slug));
    format!(
        r#"<article class="blog-featured">
<div class="blog-featured__label">Latest Post</div>
<h3 class="blog-featured__title"><a href="{href}">{title}</a></h3>
{meta}
<div class="blog-preview">
{preview}
</div>
<a class="blog-readmore" href="{href}">Continue reading →</a>
</article>"#,
        href = href,
        title = html_escape(&post.title),
        meta = post_meta(post, reading_time),
        preview = preview_html.first().map(String::as_str).unwrap_or_default(),
    )
}

/// A card for a post whose markdown could not be loaded
pub fn error_card(post: &PostMeta, message: &str) -> String {
    format!(
        r#"<article class="blog-card blog-card--error">
<h3 class="blog-card__title">{}</h3>
<p>Failed to load preview: {}</p>
</article>"#,
        html_escape(&post.title),
        html_escape(message)
    )
}

/// A page-level error message in the blog list
pub fn list_error(message: &str) -> String {
    format!(
        r#"<div class="blog-error">
<p>{}</p>
</div>"#,
        html_escape(message)
    )
}

/// Header of the blog list, naming active filters
pub fn list_header(tag: Option<&str>, query: Option<&str>) -> String {
    let mut header = "Blog".to_string();
    if let Some(tag) = tag {
        header.push_str(&format!(" — tag: {}", html_escape(tag)));
    }
    if let Some(query) = query {
        header.push_str(&format!(" — search: &quot;{}&quot;", html_escape(query)));
    }
    format!("<h2>{}</h2>", header)
}

/// Controls for clearing active filters, empty when nothing is filtered
pub fn filter_controls(tag: Option<&str>, query: Option<&str>) -> String {
    if tag.is_none() && query.is_none() {
        return String::new();
    }

    let mut html = r#"<div class="blog-filter-controls">"#.to_string();
    if tag.is_some() {
        html.push_str(&format!(
            r#"<a href="{}" class="blog-clear-filter">Clear tag filter</a>"#,
            html_escape(&blog_url(None, None))
        ));
    }
    if query.is_some() {
        html.push_str(
            r#"<button class="blog-clear-search" id="clear-search">Clear search</button>"#,
        );
    }
    html.push_str("</div>");
    html
}

/// A rendered article page
pub fn article_page(post: &PostMeta, body_html: &str, reading_time: u32) -> String {
    let title = if post.display_title {
        format!("<h1>{}</h1>\n", html_escape(&post.title))
    } else {
        String::new()
    };

    format!(
        r#"{title}<div class="blog-article-meta">{time}{reading}</div>
{body}"#,
        title = title,
        time = time_tag(&post.date),
        reading = reading_time_tag(Some(reading_time)),
        body = body_html,
    )
}

/// The article page's error state
pub fn article_error(message: &str) -> String {
    format!(
        r#"<div class="blog-error">
<p>{}</p>
<p>{}</p>
</div>"#,
        html_escape(message),
        link_to(&blog_url(None, None), "← Back to Blog", false)
    )
}
