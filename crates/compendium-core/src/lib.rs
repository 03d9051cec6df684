//! Core pipeline for the compendium site generator.
//!
//! A bibliography export flows through the stages below, synchronously and
//! in one pass:
//!
//! ```text
//! BibTeX file ──► compendium-bibtex ──► extract ──► { entries script, entry pages }
//! ```
//!
//! Records are parsed in file order, normalized into [`Entry`] values with
//! ordinal ids, then written out twice: once as the aggregate data file the
//! site's client-side script loads, and once as a Markdown page per entry
//! for the static-site generator. The `verify` and `normalize` modules back
//! the bibliography-hygiene tools.

pub mod emit;
pub mod entry;
pub mod error;
pub mod extract;
pub mod months;
pub mod normalize;
pub mod render;
pub mod verify;

pub use emit::{write_entries_script, write_entry_pages, SitePaths};
pub use entry::Entry;
pub use error::{Error, Result};
pub use extract::extract_entries;
pub use render::render_page;
