//! Pseudonym search request and response model.

mod keywords;
mod result;

pub use keywords::{KeywordField, KeywordSelection};
pub use result::SearchResult;

use serde::{Deserialize, Serialize};

/// An identifying record submitted to the search service.
///
/// Serializes as `{"name": .., "surname": .., "sid": ..}` with keys in that
/// order, which is also the order [`KeywordField::ALL`] follows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub surname: String,
    pub sid: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            sid: sid.into(),
        }
    }

    /// Returns the value stored under a keyword field.
    pub fn get(&self, field: KeywordField) -> &str {
        match field {
            KeywordField::Name => &self.name,
            KeywordField::Surname => &self.surname,
            KeywordField::Sid => &self.sid,
        }
    }
}

/// Body of a `POST /requestPseudonym` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub data: Record,
    pub keywords: KeywordSelection,
    pub is_fuzzy: bool,
}

impl SearchRequest {
    /// Build a request from a record and three keyword flags aligned with
    /// [`KeywordField::ALL`].
    pub fn from_flags(record: Record, flags: [bool; 3], fuzzy: bool) -> Self {
        Self {
            data: record,
            keywords: KeywordSelection::from_flags(flags),
            is_fuzzy: fuzzy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_wire_format() {
        let request = SearchRequest::from_flags(Record::new("A", "B", "C"), [true, false, true], true);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "data": {"name": "A", "surname": "B", "sid": "C"},
                "keywords": ["name", "sid"],
                "is_fuzzy": true
            })
        );
    }

    #[test]
    fn record_keys_serialize_in_fixed_order() {
        let text = serde_json::to_string(&Record::new("A", "B", "C")).unwrap();
        assert_eq!(text, r#"{"name":"A","surname":"B","sid":"C"}"#);
    }

    #[test]
    fn keyword_values_come_from_record() {
        let record = Record::new("Ada", "Lovelace", "s-1815");
        let request = SearchRequest::from_flags(record.clone(), [false, true, true], false);
        let values: Vec<&str> = request.keywords.iter().map(|f| record.get(f)).collect();
        assert_eq!(values, ["Lovelace", "s-1815"]);
    }
}
