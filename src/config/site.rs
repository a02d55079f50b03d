//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cache::MAX_CACHE_SIZE;
use crate::content::READING_SPEED_WPM;

/// Main site configuration; unknown keys are rejected
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    // Content
    pub articles_dir: String,
    pub manifest: String,

    // Blog list
    pub per_page: usize,
    pub reading_speed_wpm: u32,

    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            articles_dir: "articles".to_string(),
            manifest: "index.json".to_string(),

            per_page: 10,
            reading_speed_wpm: READING_SPEED_WPM,

            cache: CacheConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {:?}", path))?;
        Ok(config)
    }
}

/// Markdown session cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Largest document admitted, in characters
    pub max_entry_size: usize,
    /// Total store size, in characters
    pub quota: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entry_size: MAX_CACHE_SIZE,
            quota: 5_000_000,
        }
    }
}

/// Contact form backend configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub backend_url: Option<String>,
    pub secret: Option<String>,
}
