//! Unicode normalization of bibliography text
//!
//! Reference managers paste in text from everywhere; normalizing the whole
//! file to one normal form keeps string comparisons (and diffs) honest.

use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;

/// A Unicode normal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalForm {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

/// Raised when a normal-form name is not one of NFC/NFD/NFKC/NFKD.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown normal form '{0}' (expected NFC, NFD, NFKC, or NFKD)")]
pub struct UnknownNormalForm(String);

impl FromStr for NormalForm {
    type Err = UnknownNormalForm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NFC" => Ok(Self::Nfc),
            "NFD" => Ok(Self::Nfd),
            "NFKC" => Ok(Self::Nfkc),
            "NFKD" => Ok(Self::Nfkd),
            _ => Err(UnknownNormalForm(s.to_string())),
        }
    }
}

impl NormalForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::Nfkc => "NFKC",
            Self::Nfkd => "NFKD",
        }
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize `text` to `form`, returning the result only when it differs
/// from the input.
pub fn apply(text: &str, form: NormalForm) -> Option<String> {
    let normalized: String = match form {
        NormalForm::Nfc => text.nfc().collect(),
        NormalForm::Nfd => text.nfd().collect(),
        NormalForm::Nfkc => text.nfkc().collect(),
        NormalForm::Nfkd => text.nfkd().collect(),
    };
    if normalized == text {
        None
    } else {
        Some(normalized)
    }
}
