//! Common DTO types

use serde::Serialize;

/// Success envelope used by every JSON endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ApiData<T: Serialize> {
    /// Success indicator
    pub success: bool,
    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of items, for list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiData<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: Some(data),
        }
    }

    pub fn listed(data: Vec<T>) -> ApiData<Vec<T>> {
        ApiData {
            success: true,
            message: None,
            count: Some(data.len()),
            data: Some(data),
        }
    }
}

impl ApiData<()> {
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let body = serde_json::to_value(ApiData::ok(42)).unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "data": 42}));
    }

    #[test]
    fn list_envelope_carries_count() {
        let body = serde_json::to_value(ApiData::listed(vec![1, 2, 3])).unwrap();
        assert_eq!(body["count"], 3);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn message_only_has_no_data_key() {
        let body = serde_json::to_value(ApiData::message_only("done")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": true, "message": "done"})
        );
    }
}
