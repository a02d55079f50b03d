//! Post metadata and the article manifest

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::helpers::is_compact_date;

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Unique, URL-safe identifier
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as `YYYYMMDD`
    pub date: String,

    /// Markdown file, relative to the articles directory
    pub file: String,

    /// Post tags, in display order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether the article page shows the title as `<h1>`
    #[serde(default = "default_display_title")]
    pub display_title: bool,
}

fn default_display_title() -> bool {
    true
}

impl PostMeta {
    /// Cache key for this post's markdown; the date doubles as a version tag
    pub fn cache_key(&self) -> String {
        cache_key(&self.slug, &self.date)
    }

    /// Case-insensitive tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag.to_lowercase())
    }

    /// Case-insensitive substring match on title and tags
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

/// Composite cache key of a post's markdown
pub fn cache_key(slug: &str, date: &str) -> String {
    format!("md:{}:{}", slug, date)
}

/// The list of published posts (`articles/index.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub posts: Vec<PostMeta>,
}

impl Manifest {
    /// Parse a manifest from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest = serde_json::from_str(json).context("Failed to parse manifest")?;
        Ok(manifest)
    }

    /// Load a manifest file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to load manifest {:?}", path))?;
        let manifest = Self::from_json(&json)?;
        tracing::debug!("Loaded {} posts from {:?}", manifest.posts.len(), path);
        Ok(manifest)
    }

    /// Sort by date, newest first
    pub fn sort_by_date(&mut self) {
        self.posts.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Find a post by slug
    pub fn find(&self, slug: &str) -> Option<&PostMeta> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Audit the manifest against the articles directory
    pub fn check(&self, articles_dir: &Path) -> Vec<ManifestIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for post in &self.posts {
            if !seen.insert(post.slug.as_str()) {
                issues.push(ManifestIssue::DuplicateSlug(post.slug.clone()));
            }
            if slug::slugify(&post.slug) != post.slug {
                issues.push(ManifestIssue::UnsafeSlug(post.slug.clone()));
            }
            if !is_compact_date(&post.date) {
                issues.push(ManifestIssue::BadDate {
                    slug: post.slug.clone(),
                    date: post.date.clone(),
                });
            }
            if !articles_dir.join(&post.file).is_file() {
                issues.push(ManifestIssue::MissingFile {
                    slug: post.slug.clone(),
                    file: post.file.clone(),
                });
            }
            if !post.file.starts_with(&post.date) {
                issues.push(ManifestIssue::FileDateMismatch {
                    slug: post.slug.clone(),
                    file: post.file.clone(),
                });
            }
        }

        let listed: HashSet<&str> = self.posts.iter().map(|p| p.file.as_str()).collect();
        for entry in WalkDir::new(articles_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            let relative = path
                .strip_prefix(articles_dir)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            if !listed.contains(relative.as_str()) {
                issues.push(ManifestIssue::Unlisted(relative));
            }
        }

        issues
    }
}

/// A manifest consistency problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestIssue {
    DuplicateSlug(String),
    UnsafeSlug(String),
    BadDate { slug: String, date: String },
    MissingFile { slug: String, file: String },
    FileDateMismatch { slug: String, file: String },
    /// A markdown file no manifest entry points at
    Unlisted(String),
}

impl fmt::Display for ManifestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSlug(slug) => write!(f, "duplicate slug \"{}\"", slug),
            Self::UnsafeSlug(slug) => write!(f, "slug \"{}\" is not URL-safe", slug),
            Self::BadDate { slug, date } => {
                write!(f, "\"{}\" has invalid date format: {}", slug, date)
            }
            Self::MissingFile { slug, file } => {
                write!(f, "file not found for \"{}\": {}", slug, file)
            }
            Self::FileDateMismatch { slug, file } => {
                write!(f, "file name \"{}\" of \"{}\" does not start with its date", file, slug)
            }
            Self::Unlisted(file) => write!(f, "{} is not listed in the manifest", file),
        }
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
