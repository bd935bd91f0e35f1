//! User records
//!
//! A record is the single persisted entity of the service:
//! - `id` is assigned by the store on create and never changes
//! - `name` and `email` are free text, no format or uniqueness rules

mod id;

pub use id::{InvalidRecordId, RecordId};

use serde::{Deserialize, Serialize};

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

impl Record {
    pub fn new(id: RecordId, input: RecordInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
        }
    }
}

/// Writable fields of a record, as decoded from a request body.
///
/// Missing fields decode as empty strings. Unknown fields, `id` included,
/// are ignored so that a client echoing a full record back cannot move it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl RecordInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_flat() {
        let record = Record::new(RecordId::new(7), RecordInput::new("Alice", "a@x.com"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"id": 7, "name": "Alice", "email": "a@x.com"}));
    }

    #[test]
    fn test_input_missing_fields_default_to_empty() {
        let input: RecordInput = serde_json::from_value(json!({"name": "Bob"})).unwrap();
        assert_eq!(input.name, "Bob");
        assert_eq!(input.email, "");

        let input: RecordInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input, RecordInput::default());
    }

    #[test]
    fn test_input_ignores_id() {
        let input: RecordInput =
            serde_json::from_value(json!({"id": 99, "name": "C", "email": "c@x.com"})).unwrap();
        assert_eq!(input, RecordInput::new("C", "c@x.com"));
    }

    #[test]
    fn test_input_rejects_wrong_types() {
        let result: Result<RecordInput, _> = serde_json::from_value(json!({"name": 5}));
        assert!(result.is_err());
    }
}
