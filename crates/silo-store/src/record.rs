//! The stored unit and the incoming write payload model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// A stored object: canonical file-shaped key plus its payload bytes.
///
/// Identity is the record's key in the bucket. Records are never mutated
/// in place; an overwriting write replaces the whole record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Canonical path of the object inside the bucket.
    pub id: String,
    /// Raw payload bytes.
    pub payload: Vec<u8>,
}

impl ObjectRecord {
    /// Create a record from a key and payload bytes.
    pub fn new(id: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// An incoming write item: external identifier plus raw and/or textual
/// content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// External identifier; its relative portion becomes the key suffix
    /// for directory-targeted writes.
    pub id: String,
    /// Raw payload bytes, preferred when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Vec<u8>>,
    /// Textual content, encoded as UTF-8 when `raw` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Content {
    /// A content item carrying raw bytes.
    pub fn from_raw(id: impl Into<String>, raw: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            raw: Some(raw),
            text: None,
        }
    }

    /// A content item carrying textual content.
    pub fn from_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw: None,
            text: Some(text.into()),
        }
    }

    /// Resolve to payload bytes: raw wins, text is UTF-8 encoded, neither
    /// is invalid data.
    pub fn resolve_payload(&self) -> StoreResult<Vec<u8>> {
        if let Some(raw) = &self.raw {
            return Ok(raw.clone());
        }
        if let Some(text) = &self.text {
            return Ok(text.as_bytes().to_vec());
        }
        Err(StoreError::InvalidData {
            id: self.id.clone(),
        })
    }
}

/// Write payload: exactly the three supported shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteData {
    /// A single content object, targeting a file-shaped path.
    One(Content),
    /// A batch of content objects, targeting a directory-shaped path.
    Many(Vec<Content>),
    /// A raw string, targeting a file-shaped path.
    Text(String),
}

impl WriteData {
    /// Build from a generic JSON value.
    ///
    /// Strings, objects, and arrays of objects map onto the three
    /// variants; any other shape is unsupported.
    pub fn from_value(value: Value) -> StoreResult<Self> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(Self::One)
                .map_err(|_| StoreError::UnsupportedDataFormat),
            value @ Value::Array(_) => serde_json::from_value(value)
                .map(Self::Many)
                .map_err(|_| StoreError::UnsupportedDataFormat),
            _ => Err(StoreError::UnsupportedDataFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_payload_wins_over_text() {
        let content = Content {
            id: "file.txt".into(),
            raw: Some(b"raw".to_vec()),
            text: Some("text".into()),
        };
        assert_eq!(content.resolve_payload().unwrap(), b"raw");
    }

    #[test]
    fn text_payload_is_utf8_encoded() {
        let content = Content::from_text("file.txt", "Hello");
        assert_eq!(content.resolve_payload().unwrap(), b"Hello");
    }

    #[test]
    fn empty_content_is_invalid_data() {
        let content = Content {
            id: "file.txt".into(),
            raw: None,
            text: None,
        };
        let err = content.resolve_payload().unwrap_err();
        assert!(matches!(err, StoreError::InvalidData { id } if id == "file.txt"));
    }

    #[test]
    fn string_value_maps_to_text() {
        let data = WriteData::from_value(json!("SGVsbG8=")).unwrap();
        assert_eq!(data, WriteData::Text("SGVsbG8=".into()));
    }

    #[test]
    fn object_value_maps_to_one() {
        let data = WriteData::from_value(json!({
            "id": "file.txt",
            "text": "hello",
        }))
        .unwrap();
        assert_eq!(data, WriteData::One(Content::from_text("file.txt", "hello")));
    }

    #[test]
    fn array_value_maps_to_many() {
        let data = WriteData::from_value(json!([
            { "id": "a.txt", "text": "a" },
            { "id": "b.txt", "text": "b" },
        ]))
        .unwrap();
        match data {
            WriteData::Many(items) => assert_eq!(items.len(), 2),
            other => panic!("expected Many, got {other:?}"),
        }
    }

    #[test]
    fn scalar_values_are_unsupported() {
        for value in [json!(42), json!(true), json!(null), json!(1.5)] {
            let err = WriteData::from_value(value).unwrap_err();
            assert!(matches!(err, StoreError::UnsupportedDataFormat));
        }
    }

    #[test]
    fn malformed_object_is_unsupported() {
        let err = WriteData::from_value(json!({ "payload": [1, 2, 3] })).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedDataFormat));
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = ObjectRecord::new("report/jan.txt", b"Hello".to_vec());
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: ObjectRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }
}
