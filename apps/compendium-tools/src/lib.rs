//! Deploy tools for the compendium site.
//!
//! The library entry points behind the three binaries, kept out of the
//! `main`s so integration tests can drive the real pipelines against
//! temporary directories:
//!
//! - [`generate`]: BibTeX export to entries script + per-entry pages
//! - [`verify_file`]: duplicate cite key check
//! - [`normalize_file`]: in-place Unicode normalization with backup

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use compendium_core::normalize::{self, NormalForm};
use compendium_core::verify::duplicate_cite_keys;
use compendium_core::{extract_entries, SitePaths};

/// Initialize tracing for a tool run. `level` is the fallback filter when
/// RUST_LOG is unset.
pub fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

/// Outcome of a [`generate`] run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub entry_count: usize,
    pub entries_script: PathBuf,
    pub pages_dir: PathBuf,
}

/// Run the full conversion: parse the bibliography, normalize the records,
/// write the aggregate entries script and one Markdown page per entry
/// under `site_root`.
pub fn generate(bibfile: &Path, site_root: &Path) -> anyhow::Result<GenerateSummary> {
    let text = fs::read_to_string(bibfile)
        .with_context(|| format!("failed to read {}", bibfile.display()))?;
    let records = compendium_bibtex::parse(&text)?;
    tracing::info!(records = records.len(), "parsed bibliography");

    let entries = extract_entries(&records)?;
    let paths = SitePaths::new(site_root);
    compendium_core::write_entries_script(&paths.entries_script, &entries)?;
    compendium_core::write_entry_pages(&paths.pages_dir, &entries)?;

    Ok(GenerateSummary {
        entry_count: entries.len(),
        entries_script: paths.entries_script,
        pages_dir: paths.pages_dir,
    })
}

/// Parse the bibliography and report duplicated cite keys.
pub fn verify_file(bibfile: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(bibfile)
        .with_context(|| format!("failed to read {}", bibfile.display()))?;
    let records = compendium_bibtex::parse(&text)?;
    Ok(duplicate_cite_keys(&records))
}

/// Normalize the bibliography file in place.
///
/// When normalization changes the text, the original is renamed to
/// `<name>.unnormalized` and the normalized text written in its place;
/// the backup path is returned. An already-normalized file is untouched.
pub fn normalize_file(bibfile: &Path, form: NormalForm) -> anyhow::Result<Option<PathBuf>> {
    let text = fs::read_to_string(bibfile)
        .with_context(|| format!("failed to read {}", bibfile.display()))?;
    match normalize::apply(&text, form) {
        None => Ok(None),
        Some(normalized) => {
            let mut backup = bibfile.as_os_str().to_owned();
            backup.push(".unnormalized");
            let backup = PathBuf::from(backup);
            fs::rename(bibfile, &backup)
                .with_context(|| format!("failed to back up {}", bibfile.display()))?;
            fs::write(bibfile, normalized)
                .with_context(|| format!("failed to write {}", bibfile.display()))?;
            tracing::info!(
                "normalization to {} had an effect, overwriting {} (backed up to {})",
                form,
                bibfile.display(),
                backup.display()
            );
            Ok(Some(backup))
        }
    }
}
