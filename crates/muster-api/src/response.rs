// Standard API response wrapper
//
// CONVENTION: every endpoint (except 204 deletes) wraps its payload in
// ApiResponse<T>. Never return raw data.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope shared by every JSON response
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

/// Machine-readable error code plus human message
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    fn now() -> Self {
        Self {
            page: None,
            page_size: None,
            total: None,
            timestamp: Utc::now(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(ResponseMeta::now()),
        }
    }

    pub fn paginated(data: T, page: u32, page_size: u32, total: usize) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(ResponseMeta {
                page: Some(page),
                page_size: Some(page_size),
                total: Some(total),
                ..ResponseMeta::now()
            }),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: code.into(),
                message: message.into(),
            }),
            meta: Some(ResponseMeta::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error() {
        let json = serde_json::to_value(ApiResponse::success("hi")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "hi");
        assert!(json.get("error").is_none());
        assert!(json["meta"]["timestamp"].is_string());
    }

    #[test]
    fn error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::error("EVENT_FULL", "full")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "EVENT_FULL");
        assert_eq!(json["error"]["message"], "full");
    }

    #[test]
    fn paginated_envelope_carries_camel_case_meta() {
        let json = serde_json::to_value(ApiResponse::paginated(vec![1, 2], 2, 10, 42)).unwrap();
        assert_eq!(json["meta"]["page"], 2);
        assert_eq!(json["meta"]["pageSize"], 10);
        assert_eq!(json["meta"]["total"], 42);
    }
}
