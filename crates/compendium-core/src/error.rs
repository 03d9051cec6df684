//! Pipeline error types

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a run.
///
/// Missing optional fields are not errors; they stay absent through
/// extraction and are omitted from rendered output. Only unparseable input,
/// a non-numeric year, and output I/O end the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse bibliography: {0}")]
    Parse(#[from] compendium_bibtex::ParseError),

    #[error("record '{cite_key}': year '{value}' is not a number")]
    InvalidYear { cite_key: String, value: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode entries: {0}")]
    Json(#[from] serde_json::Error),
}
