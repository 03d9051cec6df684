//! BibTeX reading for the compendium site tools.
//!
//! Reads the subset of BibTeX that reference managers actually export and
//! hands back raw records: cite key, entry type, and an ordered list of
//! fields whose values keep their inner `{ }` groups verbatim. Field
//! normalization (dates, authors, tags) happens downstream in
//! `compendium-core`; this crate only tokenizes.
//!
//! Features:
//! - `@string` definitions with `#` concatenation
//! - Builtin month macros (`jan` resolves to "January")
//! - Braced and quoted field values, nested braces preserved
//! - `@comment` / `@preamble` blocks and free commentary between entries

mod month_macros;
pub mod parser;
mod record;

pub use parser::{parse, ParseError};
pub use record::{Field, Record};
