//! Normalized entry model

use serde::Serialize;

/// One compendium entry, normalized from a raw bibliography record.
///
/// Immutable after extraction. Field declaration order is the field order
/// in the emitted JSON; absent optionals serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Ordinal position in the parsed record set; also the page file stem.
    /// Stable within one run only.
    pub id: usize,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    /// First populated of the publisher-like source fields.
    pub publisher_text: Option<String>,
    pub year: Option<i32>,
    /// 1-12, resolved from a full English month name.
    pub month: Option<u32>,
    /// Never populated; the emitted records carry the field regardless.
    pub day: Option<u32>,
    pub url: Option<String>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}
