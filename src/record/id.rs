//! RecordId - server-assigned record identity
//!
//! Backed by a PostgreSQL `SERIAL` column, so the value space is a
//! positive `i32`. Ids are handed out monotonically and never reused.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of a persisted record.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RecordId(i32);

impl RecordId {
    #[inline]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A path segment that is not a valid record id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record id: {0:?}")]
pub struct InvalidRecordId(pub String);

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    /// Accepts plain base-10 digits only; signs, whitespace, zero and
    /// values outside `i32` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidRecordId(s.to_string()));
        }

        match s.parse::<i32>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(InvalidRecordId(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!("42".parse::<RecordId>(), Ok(RecordId::new(42)));
        assert_eq!("007".parse::<RecordId>(), Ok(RecordId::new(7)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", "0", "-1", "+1", " 1", "1.5", "abc", "1e3", "99999999999"] {
            assert!(raw.parse::<RecordId>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_display_matches_value() {
        assert_eq!(RecordId::new(15).to_string(), "15");
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&RecordId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
