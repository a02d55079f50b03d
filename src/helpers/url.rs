//! URL helper functions
//!
//! Every page of the site lives next to the others, so links are relative
//! (`./blog.html`, `./article.html`) and keep working under any base path.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched in query values; a space becomes `%20`
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Encode a query value
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Build a blog list URL, dropping empty parameters
///
/// # Examples
/// ```
/// use scriptorium::helpers::blog_url;
/// assert_eq!(blog_url(None, None), "./blog.html");
/// assert_eq!(blog_url(Some(2), Some("rust")), "./blog.html?page=2&tag=rust");
/// ```
pub fn blog_url(page: Option<usize>, tag: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(page) = page.filter(|p| *p > 0) {
        params.push(format!("page={}", page));
    }
    if let Some(tag) = tag.filter(|t| !t.is_empty()) {
        params.push(format!("tag={}", encode_query_value(tag)));
    }

    if params.is_empty() {
        "./blog.html".to_string()
    } else {
        format!("./blog.html?{}", params.join("&"))
    }
}

/// Build an article URL for a slug
pub fn article_url(slug: &str) -> String {
    format!("./article.html?slug={}", encode_query_value(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_url() {
        assert_eq!(blog_url(None, None), "./blog.html");
        assert_eq!(blog_url(Some(3), None), "./blog.html?page=3");
        assert_eq!(blog_url(None, Some("rust")), "./blog.html?tag=rust");
        assert_eq!(blog_url(Some(0), Some("")), "./blog.html");
    }

    #[test]
    fn test_blog_url_encodes_tag() {
        assert_eq!(
            blog_url(Some(1), Some("c++ & rust")),
            "./blog.html?page=1&tag=c%2B%2B%20%26%20rust"
        );
    }

    #[test]
    fn test_article_url() {
        assert_eq!(article_url("hello-world"), "./article.html?slug=hello-world");
        assert_eq!(article_url("a b"), "./article.html?slug=a%20b");
    }
}
