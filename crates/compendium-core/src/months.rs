//! Month name tables
//!
//! Process-wide immutable lookup tables between full English month names
//! and 1-based month numbers. Lookups are exact-match; anything else is
//! simply not a month.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Full English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

lazy_static! {
    static ref MONTH_NUMBERS: HashMap<&'static str, u32> = MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| (*name, index as u32 + 1))
        .collect();
}

/// Month number (1-12) for a full English month name.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NUMBERS.get(name).copied()
}

/// Full English name for a month number in [1, 12].
pub fn month_name(number: u32) -> Option<&'static str> {
    if (1..=12).contains(&number) {
        Some(MONTH_NAMES[(number - 1) as usize])
    } else {
        None
    }
}
