//! Render the blog list

use anyhow::Result;

use crate::cache::{ContentCache, SessionStore};
use crate::content::{
    extract_preview, post_plain_text, reading_time, FetchError, Manifest, MarkdownSource, PostMeta,
};
use crate::helpers::{paginate, paginator};
use crate::templates;
use crate::Site;

/// Blog list request: page and filters
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: usize,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl ListQuery {
    /// Active tag filter, ignoring blanks
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Active search query, ignoring blanks
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    fn is_filtered(&self) -> bool {
        self.tag().is_some() || self.search().is_some()
    }
}

/// The rendered blog list page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogList {
    pub header: String,
    pub list: String,
    pub pager: String,
}

impl BlogList {
    pub fn to_html(&self) -> String {
        [&self.header, &self.list, &self.pager]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Preview paragraphs and reading time of a post
pub async fn load_summary<S: SessionStore, F: MarkdownSource>(
    cache: &mut ContentCache<S, F>,
    post: &PostMeta,
    words_per_minute: u32,
) -> Result<(Vec<String>, u32), FetchError> {
    let markdown = cache.get(&post.slug, &post.date, &post.file).await?;
    let preview = extract_preview(&markdown);
    let minutes = reading_time(&post_plain_text(&markdown), words_per_minute);
    Ok((preview, minutes))
}

/// Search over title and tags, then over content that is already cached
fn matches_search<S: SessionStore, F: MarkdownSource>(
    cache: &ContentCache<S, F>,
    post: &PostMeta,
    query: &str,
) -> bool {
    if post.matches_query(query) {
        return true;
    }
    cache
        .peek(&post.slug, &post.date)
        .map(|markdown| {
            post_plain_text(&markdown)
                .to_lowercase()
                .contains(&query.to_lowercase())
        })
        .unwrap_or(false)
}

/// Render the blog list for a query
///
/// Posts are expected newest first. A post whose markdown cannot be loaded
/// is rendered as an error card; the rest of the page is unaffected.
pub async fn render<S: SessionStore, F: MarkdownSource>(
    manifest: &Manifest,
    cache: &mut ContentCache<S, F>,
    query: &ListQuery,
    per_page: usize,
    words_per_minute: u32,
) -> BlogList {
    let tag = query.tag();
    let search = query.search();

    let mut posts: Vec<&PostMeta> = manifest
        .posts
        .iter()
        .filter(|post| tag.map_or(true, |t| post.has_tag(t)))
        .collect();

    if let Some(search) = search {
        posts.retain(|post| matches_search(&*cache, post, search));
    }
    tracing::debug!("{} posts after filtering", posts.len());

    let header = templates::list_header(tag, search);
    let controls = templates::filter_controls(tag, search);

    if posts.is_empty() {
        let message = match (tag, search) {
            (_, Some(_)) => "No posts match your search".to_string(),
            (Some(tag), None) => format!("No posts for tag: {}", tag),
            (None, None) => "No posts found".to_string(),
        };
        return BlogList {
            header,
            list: controls + &templates::list_error(&message),
            pager: String::new(),
        };
    }

    let current = paginate(&posts, query.page, per_page).current;

    let mut featured = String::new();
    let mut rest: &[&PostMeta] = &posts;
    if current == 1 && !query.is_filtered() {
        let newest = posts[0];
        match load_summary(cache, newest, words_per_minute).await {
            Ok((preview, minutes)) => {
                featured = templates::featured_post(newest, &preview, Some(minutes));
                rest = &posts[1..];
            }
            Err(e) => tracing::error!("Error loading featured post {}: {}", newest.slug, e),
        }
    }

    let page = paginate(rest, current, per_page);

    let mut cards = Vec::with_capacity(page.items.len());
    for post in page.items {
        match load_summary(cache, post, words_per_minute).await {
            Ok((preview, minutes)) => {
                cards.push(templates::blog_card(post, &preview, Some(minutes)));
            }
            Err(e) => {
                tracing::error!("Error loading post {}: {}", post.slug, e);
                cards.push(templates::error_card(post, &e.to_string()));
            }
        }
    }

    let mut list = controls;
    list.push_str(&featured);
    if !featured.is_empty() && !cards.is_empty() {
        list.push('\n');
    }
    list.push_str(&cards.join("\n"));

    BlogList {
        header,
        list,
        pager: paginator(page.current, page.total_pages, tag),
    }
}

/// Print the blog list of a site
pub async fn run(site: &Site, query: &ListQuery) -> Result<()> {
    let mut cache = site.cache();

    let html = match site.load_manifest() {
        Ok(manifest) => {
            render(
                &manifest,
                &mut cache,
                query,
                site.config.per_page,
                site.config.reading_speed_wpm,
            )
            .await
            .to_html()
        }
        Err(e) => {
            tracing::error!("Error loading manifest: {:#}", e);
            templates::list_error(&format!("Failed to load blog posts: {}", e))
        }
    };

    println!("{}", html);
    Ok(())
}
