//! Check the manifest against the articles directory

use anyhow::Result;

use crate::Site;

/// Report manifest problems; fails when any are found
pub fn run(site: &Site) -> Result<()> {
    let manifest = site.load_manifest()?;
    let issues = manifest.check(&site.articles_dir);

    if issues.is_empty() {
        println!("Manifest OK ({} posts)", manifest.posts.len());
        return Ok(());
    }

    for issue in &issues {
        println!("  {}", issue);
    }
    anyhow::bail!("{} problem(s) found in {:?}", issues.len(), site.manifest_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with(manifest: &str, files: &[&str]) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let articles = dir.path().join("articles");
        fs::create_dir(&articles).unwrap();
        fs::write(articles.join("index.json"), manifest).unwrap();
        for file in files {
            fs::write(articles.join(file), "# Post").unwrap();
        }
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_clean_manifest() {
        let (_dir, site) = site_with(
            r#"[{"slug": "a", "title": "A", "date": "20260101", "file": "20260101-a.md"}]"#,
            &["20260101-a.md"],
        );
        assert!(run(&site).is_ok());
    }

    #[test]
    fn test_missing_file_fails() {
        let (_dir, site) = site_with(
            r#"[{"slug": "a", "title": "A", "date": "20260101", "file": "20260101-a.md"}]"#,
            &[],
        );
        assert!(run(&site).is_err());
    }
}
