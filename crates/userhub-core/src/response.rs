//! The uniform success envelope.
//!
//! Every successful response has the shape
//! `{ "success": true, "data"?: ..., "message"?: "...", "errors": [] }`.
//! Failures use the same shape via [`crate::AppError`].

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: Vec::new(),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_envelope_omits_message() {
        let value = serde_json::to_value(ApiResponse::data(json!({"id": 1}))).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "data": {"id": 1}, "errors": []})
        );
    }

    #[test]
    fn test_message_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::message("User registered successfully"))
            .unwrap();
        assert_eq!(
            value,
            json!({"success": true, "message": "User registered successfully", "errors": []})
        );
    }
}
