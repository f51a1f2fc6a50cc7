//! Wire types for the `/api/user` collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::UserDirectoryError;

/// Identifying key of a user.
pub type UserId = i64;

/// One user as the server sends it.
///
/// Only `id` has a meaning here. Every other attribute is kept in `fields`
/// and sent back exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UserRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The `name` attribute, when the server provides one as a string.
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// The id an update or delete needs.
    pub fn require_id(&self) -> Result<UserId, UserDirectoryError> {
        self.id.ok_or(UserDirectoryError::MissingId)
    }
}

/// Body of `DELETE /api/user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keeps_unknown_fields() {
        let raw = json!({ "id": 1, "name": "A", "email": "a@example.com", "tags": ["x"] });
        let record: UserRecord = serde_json::from_value(raw.clone()).expect("record should parse");

        assert_eq!(record.id, Some(1));
        assert_eq!(record.name(), Some("A"));
        assert_eq!(record.field("tags"), Some(&json!(["x"])));
        assert_eq!(serde_json::to_value(&record).expect("serialize"), raw);
    }

    #[test]
    fn test_record_without_id_omits_it() {
        let record = UserRecord::new().with_field("name", "B");
        assert_eq!(
            serde_json::to_value(&record).expect("serialize"),
            json!({ "name": "B" })
        );
        assert_eq!(record.require_id(), Err(UserDirectoryError::MissingId));
    }

    #[test]
    fn test_require_id() {
        let record = UserRecord::new().with_id(2).with_field("name", "C");
        assert_eq!(record.require_id(), Ok(2));
    }

    #[test]
    fn test_non_string_name_is_ignored() {
        let record = UserRecord::new().with_field("name", 42);
        assert_eq!(record.name(), None);
    }

    #[test]
    fn test_delete_body_shape() {
        let body = DeleteUserRequest { id: 5 };
        assert_eq!(
            serde_json::to_string(&body).expect("serialize"),
            r#"{"id":5}"#
        );
    }
}
