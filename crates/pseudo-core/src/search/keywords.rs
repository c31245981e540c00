//! Keyword field selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A record field that can double as a search keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordField {
    Name,
    Surname,
    Sid,
}

impl KeywordField {
    /// All fields in record key order.
    pub const ALL: [KeywordField; 3] = [KeywordField::Name, KeywordField::Surname, KeywordField::Sid];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordField::Name => "name",
            KeywordField::Surname => "surname",
            KeywordField::Sid => "sid",
        }
    }
}

impl fmt::Display for KeywordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of fields used as keywords.
///
/// Always a subsequence of [`KeywordField::ALL`]; serializes as an array of
/// field names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSelection(Vec<KeywordField>);

impl KeywordSelection {
    /// Pair `flags[i]` with the i-th field of [`KeywordField::ALL`] and keep
    /// the fields whose flag is set.
    pub fn from_flags(flags: [bool; 3]) -> Self {
        Self(
            KeywordField::ALL
                .into_iter()
                .zip(flags)
                .filter_map(|(field, used)| used.then_some(field))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = KeywordField> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, field: KeywordField) -> bool {
        self.0.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(KeywordField::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_flag_triple_selects_matching_fields_in_order() {
        for bits in 0u8..8 {
            let flags = [bits & 0b100 != 0, bits & 0b010 != 0, bits & 0b001 != 0];
            let selection = KeywordSelection::from_flags(flags);

            let expected: Vec<&str> = ["name", "surname", "sid"]
                .into_iter()
                .zip(flags)
                .filter(|(_, used)| *used)
                .map(|(name, _)| name)
                .collect();

            assert_eq!(selection.names(), expected, "flags {:?}", flags);
        }
    }

    #[test]
    fn no_flags_is_empty() {
        let selection = KeywordSelection::from_flags([false; 3]);
        assert!(selection.is_empty());
        assert_eq!(serde_json::to_string(&selection).unwrap(), "[]");
    }

    #[test]
    fn serializes_as_names() {
        let selection = KeywordSelection::from_flags([true, true, false]);
        assert_eq!(
            serde_json::to_string(&selection).unwrap(),
            r#"["name","surname"]"#
        );
        assert!(selection.contains(KeywordField::Surname));
        assert!(!selection.contains(KeywordField::Sid));
    }
}
