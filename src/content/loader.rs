//! Content loader - reads markdown sources

use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A markdown document could not be loaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to load {target}: {reason}")]
pub struct FetchError {
    /// The file that was requested
    pub target: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(target: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

/// Where raw markdown comes from
pub trait MarkdownSource {
    /// Load the markdown text of `file`
    fn fetch(&self, file: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// Reads markdown files below an articles directory
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `file` below the root, refusing paths that climb out of it
    fn resolve(&self, file: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(file);
        let escapes = relative.components().any(|c| {
            !matches!(c, std::path::Component::Normal(_) | std::path::Component::CurDir)
        });
        if escapes || file.is_empty() {
            return Err(FetchError::new(file, "path outside the articles directory"));
        }
        Ok(self.root.join(relative))
    }
}

impl MarkdownSource for FileSource {
    async fn fetch(&self, file: &str) -> Result<String, FetchError> {
        let path = self.resolve(file)?;
        tracing::debug!("Reading {:?}", path);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::new(file, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_fetch_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("post.md"), "# Hello").unwrap();

        let source = FileSource::new(dir.path());
        assert_eq!(source.fetch("post.md").await.unwrap(), "# Hello");
    }

    #[tokio::test]
    async fn test_fetch_missing_carries_target() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());

        let err = source.fetch("nope.md").await.unwrap_err();
        assert_eq!(err.target, "nope.md");
        assert!(err.to_string().starts_with("Failed to load nope.md"));
    }

    #[tokio::test]
    async fn test_fetch_refuses_escape() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("articles"));

        assert!(source.fetch("../secret.md").await.is_err());
        assert!(source.fetch("/etc/passwd").await.is_err());
        assert!(source.fetch("").await.is_err());
    }
}
