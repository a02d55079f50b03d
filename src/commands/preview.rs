//! Preview a single markdown file

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::{extract_preview, post_plain_text, reading_time};
use crate::Site;

/// Preview paragraphs and reading time of a markdown document
pub fn render(markdown: &str, words_per_minute: u32) -> String {
    let minutes = reading_time(&post_plain_text(markdown), words_per_minute);
    let mut html = extract_preview(markdown).join("\n");
    html.push_str(&format!(
        "\n<span class=\"blog-reading-time\">~{} min read</span>",
        minutes
    ));
    html
}

/// Print the preview of a markdown file
pub fn run(site: &Site, file: &Path) -> Result<()> {
    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        site.base_dir.join(file)
    };

    let markdown =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
    println!("{}", render(&markdown, site.config.reading_speed_wpm));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_preview() {
        let html = render("---\ntitle: x\n---\nFirst.\n\nSecond.", 200);
        assert_eq!(
            html,
            "<p>First.</p>\n<p>Second.</p>\n<span class=\"blog-reading-time\">~1 min read</span>"
        );
    }

    #[test]
    fn test_run_reads_relative_to_site() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("draft.md"), "Draft").unwrap();
        let site = Site::new(dir.path()).unwrap();

        assert!(run(&site, Path::new("draft.md")).is_ok());
        assert!(run(&site, Path::new("missing.md")).is_err());
    }
}
