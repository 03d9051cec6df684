//! Raw record data structures

/// A single field as it appeared in the source entry.
///
/// Names are lowercased by the parser; values are raw, with inner `{ }`
/// groups preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// One bibliography record: cite key, entry type, ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub cite_key: String,
    /// Entry type as written in the source, lowercased ("article", "misc", ...).
    pub entry_type: String,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(cite_key: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            cite_key: cite_key.into(),
            entry_type: entry_type.into(),
            fields: Vec::new(),
        }
    }

    pub fn push_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(Field {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        });
    }

    /// Look up a field value by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .map(|f| f.value.as_str())
    }
}
