//! End-to-end tool tests
//!
//! Drives the library entry points behind the binaries against temporary
//! directories: a real export in, real files out.

use std::fs;

use compendium_core::normalize::NormalForm;
use compendium_tools::{generate, normalize_file, verify_file};

const TWO_ENTRY_EXPORT: &str = r#"
@article{first2020,
    title = {First {Paper}},
    author = {{Smith, J.} and {Doe, A.}},
    year = {2020},
    month = mar,
    keywords = {alpha, beta},
    url = {https://example.org/first},
}

@book{second2021,
    title = {Second},
    publisher = {ACME Press},
    year = {2021},
}
"#;

// === Generate ===

#[test]
fn test_two_entries_produce_two_pages_and_one_script() {
    let dir = tempfile::tempdir().unwrap();
    let bib = dir.path().join("compendium.bib");
    fs::write(&bib, TWO_ENTRY_EXPORT).unwrap();

    let site = dir.path().join("site");
    let summary = generate(&bib, &site).unwrap();
    assert_eq!(summary.entry_count, 2);

    let pages_dir = site.join("content").join("entries");
    assert!(pages_dir.join("0.md").is_file());
    assert!(pages_dir.join("1.md").is_file());
    assert!(!pages_dir.join("2.md").exists());

    let script = fs::read_to_string(site.join("assets").join("js").join("entries.js")).unwrap();
    let json = script.strip_prefix("const entries = ").unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["id"], 0);
    assert_eq!(array[0]["title"], "First Paper");
    assert_eq!(array[0]["month"], 3);
    assert_eq!(array[1]["id"], 1);
    assert_eq!(array[1]["publisher_text"], "ACME Press");
}

#[test]
fn test_generated_page_content() {
    let dir = tempfile::tempdir().unwrap();
    let bib = dir.path().join("compendium.bib");
    fs::write(&bib, TWO_ENTRY_EXPORT).unwrap();

    let site = dir.path().join("site");
    generate(&bib, &site).unwrap();

    let page = fs::read_to_string(site.join("content/entries/0.md")).unwrap();
    assert!(page.starts_with("+++\ndraft = false\ntitle = \"First Paper\"\n"));
    assert!(page.contains("tags = [\"alpha\", \"beta\"]"));
    assert!(page.contains("**Authors**: Smith, J., Doe, A."));
    assert!(page.contains("**Published**: March 2020"));
    assert!(page.contains("**URL**: [https://example.org/first](https://example.org/first)"));
}

#[test]
fn test_non_numeric_year_aborts_generation() {
    let dir = tempfile::tempdir().unwrap();
    let bib = dir.path().join("compendium.bib");
    fs::write(&bib, "@article{bad, year = {MMXX}}").unwrap();

    let site = dir.path().join("site");
    assert!(generate(&bib, &site).is_err());
    assert!(!site.join("content").join("entries").exists());
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let site = dir.path().join("site");
    assert!(generate(&dir.path().join("nope.bib"), &site).is_err());
}

#[test]
fn test_regeneration_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let bib = dir.path().join("compendium.bib");
    fs::write(&bib, TWO_ENTRY_EXPORT).unwrap();

    let site = dir.path().join("site");
    generate(&bib, &site).unwrap();
    let summary = generate(&bib, &site).unwrap();
    assert_eq!(summary.entry_count, 2);
}

// === Verify ===

#[test]
fn test_verify_reports_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let bib = dir.path().join("compendium.bib");
    fs::write(
        &bib,
        "@article{a, title = {X}}\n@article{b, title = {Y}}\n@article{a, title = {Z}}\n",
    )
    .unwrap();

    assert_eq!(verify_file(&bib).unwrap(), vec!["a"]);
}

#[test]
fn test_verify_passes_clean_export() {
    let dir = tempfile::tempdir().unwrap();
    let bib = dir.path().join("compendium.bib");
    fs::write(&bib, TWO_ENTRY_EXPORT).unwrap();

    assert!(verify_file(&bib).unwrap().is_empty());
}

// === Normalize ===

#[test]
fn test_normalize_rewrites_and_backs_up() {
    let dir = tempfile::tempdir().unwrap();
    let bib = dir.path().join("compendium.bib");
    // U+FB03 LATIN SMALL LIGATURE FFI denormalizes the file under NFKC.
    let original = "@article{x, title = {An E\u{fb03}cient Method}}";
    fs::write(&bib, original).unwrap();

    let backup = normalize_file(&bib, NormalForm::Nfkc).unwrap().unwrap();
    assert_eq!(backup, dir.path().join("compendium.bib.unnormalized"));
    assert_eq!(fs::read_to_string(&backup).unwrap(), original);
    assert_eq!(
        fs::read_to_string(&bib).unwrap(),
        "@article{x, title = {An Efficient Method}}"
    );

    // A second pass finds nothing left to do.
    assert!(normalize_file(&bib, NormalForm::Nfkc).unwrap().is_none());
}

#[test]
fn test_normalize_leaves_clean_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let bib = dir.path().join("compendium.bib");
    fs::write(&bib, TWO_ENTRY_EXPORT).unwrap();

    assert!(normalize_file(&bib, NormalForm::Nfkc).unwrap().is_none());
    assert!(!dir.path().join("compendium.bib.unnormalized").exists());
}
