//! scriptorium: a personal blog engine
//!
//! Reads a JSON manifest of posts and their markdown sources, then renders
//! the blog list (previews, filters, pagination), single articles and the
//! homepage widget as safe HTML fragments. Fetched markdown is kept in a
//! session cache so repeated views and searches avoid re-reading files.

pub mod cache;
pub mod commands;
pub mod config;
pub mod contact;
pub mod content;
pub mod helpers;
pub mod home;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use cache::{ContentCache, DisabledStore, MemoryStore, SessionStore};
use content::{FileSource, Manifest};

/// Markdown cache used by the site's commands
pub type SiteCache = ContentCache<Box<dyn SessionStore>, FileSource>;

/// The blog site rooted at a directory
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Articles directory (markdown files and the manifest)
    pub articles_dir: PathBuf,
}

impl Site {
    /// Open the site in a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let articles_dir = base_dir.join(&config.articles_dir);

        Ok(Self {
            config,
            base_dir,
            articles_dir,
        })
    }

    /// Path of the post manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.articles_dir.join(&self.config.manifest)
    }

    /// Load the manifest, newest post first
    pub fn load_manifest(&self) -> Result<Manifest> {
        let mut manifest = Manifest::load(self.manifest_path())?;
        manifest.sort_by_date();
        Ok(manifest)
    }

    /// A fresh session cache in front of the articles directory
    pub fn cache(&self) -> SiteCache {
        let cache_config = &self.config.cache;
        let store: Box<dyn SessionStore> = if cache_config.enabled {
            Box::new(MemoryStore::with_quota(cache_config.quota))
        } else {
            Box::new(DisabledStore)
        };

        ContentCache::with_limit(
            store,
            FileSource::new(&self.articles_dir),
            cache_config.max_entry_size,
        )
    }
}
