//! Response envelope shared by the HTTP API and its clients.

use serde::{Deserialize, Serialize};

/// `{success, data?, message?}` wrapper used on every product response.
///
/// Absent fields are omitted when serializing and read back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Failed response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omits_absent_fields() {
        let ok = serde_json::to_value(Envelope::data(vec![1, 2])).unwrap();
        assert_eq!(ok, json!({ "success": true, "data": [1, 2] }));

        let failed = serde_json::to_value(Envelope::<()>::failure("invalid product id")).unwrap();
        assert_eq!(failed, json!({ "success": false, "message": "invalid product id" }));
    }

    #[test]
    fn reads_missing_fields_as_none() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_value(json!({ "success": true, "message": "product deleted" })).unwrap();
        assert!(env.success);
        assert_eq!(env.data, None);
        assert_eq!(env.message.as_deref(), Some("product deleted"));
    }
}
