//! Builtin month macros
//!
//! BibTeX predefines `jan`..`dec` as string macros. Reference managers lean
//! on them for the `month` field, so bare month identifiers resolve to the
//! full English month name, matching what downstream date extraction
//! expects.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref MONTH_MACROS: HashMap<&'static str, &'static str> = vec![
        ("jan", "January"),
        ("feb", "February"),
        ("mar", "March"),
        ("apr", "April"),
        ("may", "May"),
        ("jun", "June"),
        ("jul", "July"),
        ("aug", "August"),
        ("sep", "September"),
        ("oct", "October"),
        ("nov", "November"),
        ("dec", "December"),
    ]
    .into_iter()
    .collect();
}

/// Resolve a builtin month macro name (case-insensitive).
pub(crate) fn expand_month_macro(name: &str) -> Option<&'static str> {
    MONTH_MACROS.get(name.to_ascii_lowercase().as_str()).copied()
}
