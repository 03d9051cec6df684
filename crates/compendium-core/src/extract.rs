//! Record extraction
//!
//! Maps each raw bibliography record onto a normalized [`Entry`]. Missing
//! optional fields propagate as absent values; the only per-field failure
//! that aborts the run is a year that does not parse as an integer.

use compendium_bibtex::Record;
use lazy_static::lazy_static;
use regex::Regex;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::months;

/// Source fields consulted for the publisher line, first present wins.
const PUBLISHER_FIELDS: [&str; 3] = ["publisher", "journal", "journaltitle"];

lazy_static! {
    /// Non-greedy brace group. Nested braces inside author names are not
    /// supported; the group ends at the first closing brace.
    static ref BRACED_GROUP: Regex = Regex::new(r"\{([^}]+)\}").unwrap();
}

/// Convert parsed records into normalized entries.
///
/// Ids are ordinal positions in `records` and are assigned exactly once,
/// here. Re-running against a reordered file renumbers everything.
pub fn extract_entries(records: &[Record]) -> Result<Vec<Entry>> {
    records
        .iter()
        .enumerate()
        .map(|(id, record)| extract_entry(id, record))
        .collect()
}

fn extract_entry(id: usize, record: &Record) -> Result<Entry> {
    tracing::debug!(cite_key = %record.cite_key, id, "extracting record");
    let (year, month) = extract_date(record)?;
    Ok(Entry {
        id,
        title: extract_title(record),
        abstract_text: record.get("abstract").map(str::to_string),
        publisher_text: extract_publisher(record),
        year,
        month,
        day: None, // not extracted yet; the data model keeps the slot
        url: record.get("url").map(str::to_string),
        authors: extract_authors(record),
        tags: extract_tags(record),
    })
}

/// A year must parse as an integer or the whole run fails; an unrecognized
/// month name is simply absent.
fn extract_date(record: &Record) -> Result<(Option<i32>, Option<u32>)> {
    let year = match record.get("year") {
        Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| Error::InvalidYear {
            cite_key: record.cite_key.clone(),
            value: raw.to_string(),
        })?),
        None => None,
    };
    let month = record.get("month").and_then(months::month_number);
    Ok((year, month))
}

/// Title with case-protection braces stripped.
fn extract_title(record: &Record) -> Option<String> {
    record
        .get("title")
        .map(|title| title.replace('{', "").replace('}', ""))
}

fn extract_publisher(record: &Record) -> Option<String> {
    PUBLISHER_FIELDS
        .iter()
        .find_map(|key| record.get(key).map(str::to_string))
}

/// Keywords split on the literal ", " separator.
///
/// A tag that itself contains ", " mis-splits. That is how the keywords
/// field is written upstream; no richer tokenization is documented.
fn extract_tags(record: &Record) -> Vec<String> {
    match record.get("keywords") {
        Some(raw) => raw.split(", ").map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Braced groups name the authors; a brace-free field is one author.
fn extract_authors(record: &Record) -> Vec<String> {
    match record.get("author") {
        Some(raw) => {
            let grouped: Vec<String> = BRACED_GROUP
                .captures_iter(raw)
                .map(|captures| captures[1].to_string())
                .collect();
            if grouped.is_empty() {
                vec![raw.to_string()]
            } else {
                grouped
            }
        }
        None => Vec::new(),
    }
}
