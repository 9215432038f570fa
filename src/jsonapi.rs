//! JSON:API wire serialization for error entries.
//!
//! Produces error objects in the JSON:API shape: `status` is carried as
//! a string on the wire, `title` and `detail` as given. One entry in,
//! one document wrapping exactly one object out; the formatter assembles
//! the final list.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ErrorEntry;

/// One JSON:API error object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorObject {
    /// HTTP status code, stringified per JSON:API
    pub status: String,
    /// Short human-readable label
    pub title: String,
    /// Human-readable message
    pub detail: String,
}

/// JSON:API document wrapping error objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

/// Serialize one entry into a document with exactly one error object
pub fn serialize_entry(entry: &ErrorEntry) -> ErrorDocument {
    ErrorDocument {
        errors: vec![ErrorObject {
            status: entry.status().to_string(),
            title: entry.title().to_string(),
            detail: entry.detail().to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_one_object_per_entry() {
        let document = serialize_entry(&ErrorEntry::of(ErrorKind::NotFound));
        assert_eq!(document.errors.len(), 1);
    }

    #[test]
    fn test_status_is_stringified() {
        let document = serialize_entry(&ErrorEntry::of(ErrorKind::NotFound));
        assert_eq!(document.errors[0].status, "404");
        assert_eq!(document.errors[0].title, "Not Found");
    }

    #[test]
    fn test_object_round_trips() {
        let document = serialize_entry(&ErrorEntry::of(ErrorKind::Forbidden));
        let object = &document.errors[0];
        let json = serde_json::to_string(object).unwrap();
        let parsed: ErrorObject = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, object);
    }
}
