//! Operation parameter shapes decoded from a generic parameter bag.
//!
//! Hosts hand over a `serde_json::Value`; each operation extracts the
//! fields it understands. A missing `path` maps to the empty string so
//! the engine's own `PathRequired` check stays authoritative.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{DispatchError, DispatchResult};

/// Parameters for the path-only verbs.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathParameters {
    pub path: Option<String>,
}

impl PathParameters {
    /// The path to hand to the engine; missing means empty.
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }
}

/// Parameters for `write`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WriteParameters {
    pub path: Option<String>,
    pub data: Option<Value>,
    pub overwrite: bool,
}

impl WriteParameters {
    /// The path to hand to the engine; missing means empty.
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }
}

/// Decode the parameter bag into an operation's parameter shape.
pub(crate) fn decode<T: DeserializeOwned>(params: &Value) -> DispatchResult<T> {
    serde_json::from_value(params.clone()).map_err(|e| DispatchError::InvalidParameters {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_path_defaults_to_empty() {
        let params: PathParameters = decode(&json!({})).unwrap();
        assert_eq!(params.path(), "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let params: PathParameters = decode(&json!({
            "path": "a/b.txt",
            "operation": "read",
        }))
        .unwrap();
        assert_eq!(params.path(), "a/b.txt");
    }

    #[test]
    fn overwrite_defaults_to_false() {
        let params: WriteParameters = decode(&json!({ "path": "a.txt", "data": "x" })).unwrap();
        assert!(!params.overwrite);
    }

    #[test]
    fn wrong_field_type_is_invalid() {
        let err = decode::<PathParameters>(&json!({ "path": 42 })).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidParameters { .. }));
    }
}
