//! Render a single article

use anyhow::Result;

use crate::cache::{ContentCache, SessionStore};
use crate::content::{
    markdown_to_html, markdown_to_plain_text, reading_time, remove_code_blocks,
    remove_front_matter, Manifest, MarkdownSource,
};
use crate::templates;
use crate::Site;

/// Render the article page for a slug, or its error state
pub async fn render<S: SessionStore, F: MarkdownSource>(
    manifest: &Manifest,
    cache: &mut ContentCache<S, F>,
    slug: Option<&str>,
    words_per_minute: u32,
) -> String {
    let slug = match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slug,
        None => {
            return templates::article_error(
                "No article specified. Please provide a slug parameter.",
            )
        }
    };

    let post = match manifest.find(slug) {
        Some(post) => post,
        None => return templates::article_error(&format!("Article not found: \"{}\"", slug)),
    };

    let markdown = match cache.get(&post.slug, &post.date, &post.file).await {
        Ok(markdown) => markdown,
        Err(e) => {
            tracing::error!("Error loading article {}: {}", slug, e);
            return templates::article_error(&format!("Failed to load article: {}", e));
        }
    };

    let content = remove_front_matter(&markdown);
    let body = markdown_to_html(content);
    let minutes = reading_time(
        &markdown_to_plain_text(&remove_code_blocks(content)),
        words_per_minute,
    );

    templates::article_page(post, &body, minutes)
}

/// Print an article of a site
pub async fn run(site: &Site, slug: &str) -> Result<()> {
    let html = match site.load_manifest() {
        Ok(manifest) => {
            let mut cache = site.cache();
            render(&manifest, &mut cache, Some(slug), site.config.reading_speed_wpm).await
        }
        Err(e) => {
            tracing::error!("Error loading manifest: {:#}", e);
            templates::article_error(&format!("Failed to load manifest: {}", e))
        }
    };

    println!("{}", html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::content::FileSource;
    use std::fs;

    const MANIFEST: &str = r#"[
        {"slug": "hello", "title": "Hello & Welcome", "date": "20260222",
         "file": "20260222-hello.md", "tags": ["intro"]},
        {"slug": "quiet", "title": "Quiet", "date": "20260101",
         "file": "20260101-quiet.md", "display_title": false},
        {"slug": "gone", "title": "Gone", "date": "20250101", "file": "20250101-gone.md"}
    ]"#;

    fn fixture() -> (tempfile::TempDir, Manifest) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("20260222-hello.md"),
            "---\ntitle: Hello\n---\n# Hi\n\nSee [docs](https://example.com).\n\n```rust\nfn main() {}\n```\n",
        )
        .unwrap();
        fs::write(dir.path().join("20260101-quiet.md"), "Just text.").unwrap();
        (dir, Manifest::from_json(MANIFEST).unwrap())
    }

    #[tokio::test]
    async fn test_render_article() {
        let (dir, manifest) = fixture();
        let mut cache = ContentCache::new(MemoryStore::new(), FileSource::new(dir.path()));

        let html = render(&manifest, &mut cache, Some("hello"), 200).await;
        assert!(html.starts_with("<h1>Hello &amp; Welcome</h1>"));
        assert!(html.contains(r#"<time datetime="2026-02-22">Feb 22, 2026</time>"#));
        assert!(html.contains("~1 min read"));
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains(r#"<a href="https://example.com">docs</a>"#));
        assert!(html.contains(r#"<code class="language-rust">"#));
        assert!(!html.contains("title: Hello"));
        assert_eq!(cache.store().len(), 1);
    }

    #[tokio::test]
    async fn test_hidden_title() {
        let (dir, manifest) = fixture();
        let mut cache = ContentCache::new(MemoryStore::new(), FileSource::new(dir.path()));

        let html = render(&manifest, &mut cache, Some("quiet"), 200).await;
        assert!(!html.contains("<h1>"));
        assert!(html.contains("<p>Just text.</p>"));
    }

    #[tokio::test]
    async fn test_error_states() {
        let (dir, manifest) = fixture();
        let mut cache = ContentCache::new(MemoryStore::new(), FileSource::new(dir.path()));

        let html = render(&manifest, &mut cache, None, 200).await;
        assert!(html.contains("No article specified."));
        assert!(html.contains("← Back to Blog"));

        let html = render(&manifest, &mut cache, Some("nope"), 200).await;
        assert!(html.contains("Article not found: &quot;nope&quot;"));

        let html = render(&manifest, &mut cache, Some("gone"), 200).await;
        assert!(html.contains("Failed to load article: Failed to load 20250101-gone.md"));
    }
}
