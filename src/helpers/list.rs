//! List helper functions: pagination and tag lists

use super::html::html_escape;
use super::url::blog_url;

/// Pages with at most this many entries show every page number
const MAX_FULL_PAGER: usize = 7;

/// One page of a paginated list
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// 1-based page number, 0 when there is nothing to show
    pub current: usize,
    /// Total number of pages, 0 when there is nothing to show
    pub total_pages: usize,
}

/// Slice a list into pages and return the requested one
///
/// The requested page is clamped into `1..=total_pages`.
///
/// # Examples
/// ```
/// use scriptorium::helpers::paginate;
/// let posts: Vec<usize> = (0..25).collect();
/// let page = paginate(&posts, 3, 10);
/// assert_eq!(page.items, &posts[20..25]);
/// assert_eq!(page.total_pages, 3);
/// ```
pub fn paginate<T>(items: &[T], requested: usize, per_page: usize) -> Paginated<'_, T> {
    let per_page = per_page.max(1);
    if items.is_empty() {
        return Paginated {
            items,
            current: 0,
            total_pages: 0,
        };
    }

    let total_pages = items.len().div_ceil(per_page);
    let current = requested.clamp(1, total_pages);
    let start = (current - 1) * per_page;
    let end = (start + per_page).min(items.len());

    Paginated {
        items: &items[start..end],
        current,
        total_pages,
    }
}

/// Entry in the pager's number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    Gap,
}

/// Page numbers to show: `[1, …, p-1, p, p+1, …, N]`
pub fn page_numbers(current: usize, total: usize) -> Vec<PageLink> {
    if total <= MAX_FULL_PAGER {
        return (1..=total).map(PageLink::Number).collect();
    }

    let mut pages = vec![PageLink::Number(1)];
    if current > 3 {
        pages.push(PageLink::Gap);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    for page in start..=end {
        pages.push(PageLink::Number(page));
    }

    if current + 2 < total {
        pages.push(PageLink::Gap);
    }
    pages.push(PageLink::Number(total));
    pages
}

/// Generate the pager HTML for the blog list
pub fn paginator(current: usize, total: usize, tag: Option<&str>) -> String {
    if total <= 1 {
        return String::new();
    }

    let mut html = String::new();

    if current > 1 {
        html.push_str(&format!(
            r#"<a href="{}" class="pager-btn">← Prev</a>"#,
            html_escape(&blog_url(Some(current - 1), tag))
        ));
    } else {
        html.push_str(r#"<span class="pager-btn pager-btn--disabled">← Prev</span>"#);
    }

    for link in page_numbers(current, total) {
        match link {
            PageLink::Gap => html.push_str(r#"<span class="pager-ellipsis">…</span>"#),
            PageLink::Number(page) if page == current => html.push_str(&format!(
                r#"<span class="pager-num pager-num--active">{}</span>"#,
                page
            )),
            PageLink::Number(page) => html.push_str(&format!(
                r#"<a href="{}" class="pager-num">{}</a>"#,
                html_escape(&blog_url(Some(page), tag)),
                page
            )),
        }
    }

    if current < total {
        html.push_str(&format!(
            r#"<a href="{}" class="pager-btn">Next →</a>"#,
            html_escape(&blog_url(Some(current + 1), tag))
        ));
    } else {
        html.push_str(r#"<span class="pager-btn pager-btn--disabled">Next →</span>"#);
    }

    html
}

/// Generate the tag strip of a post, empty when there are no tags
pub fn list_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let joined = tags
        .iter()
        .map(|t| html_escape(t))
        .collect::<Vec<_>>()
        .join(" • ");
    format!(r#"<span class="blog-tags">{}</span>"#, joined)
}
