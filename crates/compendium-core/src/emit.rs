//! Site output emitters
//!
//! One aggregate entries script for the site's client-side code, one
//! Markdown page per entry for the static-site generator. Both overwrite
//! whatever a previous run left behind; there is no diffing and no cleanup
//! of pages from entries that no longer exist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::Result;
use crate::render::render_page;

/// The fixed site-relative output locations, resolved against a site root.
#[derive(Debug, Clone)]
pub struct SitePaths {
    /// Aggregate data file loaded by the site's client-side script.
    pub entries_script: PathBuf,
    /// Directory of per-entry Markdown pages.
    pub pages_dir: PathBuf,
}

impl SitePaths {
    pub fn new(site_root: &Path) -> Self {
        Self {
            entries_script: site_root.join("assets").join("js").join("entries.js"),
            pages_dir: site_root.join("content").join("entries"),
        }
    }
}

/// Write the aggregate data file: one `const entries = [...]` assignment
/// with the full entry list pretty-printed as JSON.
pub fn write_entries_script(path: &Path, entries: &[Entry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let script = format!("const entries = {}", serde_json::to_string_pretty(entries)?);
    fs::write(path, script)?;
    Ok(())
}

/// Write one `<id>.md` page per entry under `dir`.
pub fn write_entry_pages(dir: &Path, entries: &[Entry]) -> Result<()> {
    fs::create_dir_all(dir)?;
    for entry in entries {
        let path = dir.join(format!("{}.md", entry.id));
        fs::write(path, render_page(entry))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(id: usize) -> Entry {
        Entry {
            id,
            title: Some(format!("Paper {}", id)),
            abstract_text: None,
            publisher_text: None,
            year: Some(2020),
            month: None,
            day: None,
            url: None,
            authors: vec!["Smith, J.".to_string()],
            tags: vec!["tag".to_string()],
        }
    }

    #[test]
    fn test_site_paths_layout() {
        let paths = SitePaths::new(Path::new("/site"));
        assert_eq!(
            paths.entries_script,
            Path::new("/site/assets/js/entries.js")
        );
        assert_eq!(paths.pages_dir, Path::new("/site/content/entries"));
    }

    #[test]
    fn test_entries_script_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("js").join("entries.js");
        write_entries_script(&path, &[sample_entry(0)]).unwrap();

        let script = fs::read_to_string(&path).unwrap();
        assert!(script.starts_with("const entries = ["));

        // The payload after the assignment is valid JSON.
        let json = script.strip_prefix("const entries = ").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value[0]["id"], 0);
        assert_eq!(value[0]["title"], "Paper 0");
        assert_eq!(value[0]["abstract"], serde_json::Value::Null);
        assert_eq!(value[0]["day"], serde_json::Value::Null);
    }

    #[test]
    fn test_pages_named_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("entries");
        write_entry_pages(&pages, &[sample_entry(0), sample_entry(1)]).unwrap();

        assert!(pages.join("0.md").is_file());
        assert!(pages.join("1.md").is_file());
        let page = fs::read_to_string(pages.join("1.md")).unwrap();
        assert!(page.contains("title = \"Paper 1\""));
    }

    #[test]
    fn test_overwrites_unconditionally() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path();
        fs::write(pages.join("0.md"), "stale").unwrap();
        write_entry_pages(pages, &[sample_entry(0)]).unwrap();
        let page = fs::read_to_string(pages.join("0.md")).unwrap();
        assert!(page.starts_with("+++"));
    }
}
