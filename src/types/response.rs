use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Notification returned for an accepted form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NoticeResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Login successful! (Demo)")]
    pub message: String,
}

impl NoticeResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

impl IntoResponse for NoticeResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_serialization() {
        let body = serde_json::to_value(NoticeResponse::new("Login successful! (Demo)")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": true, "message": "Login successful! (Demo)"})
        );
    }
}
