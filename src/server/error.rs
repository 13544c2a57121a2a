//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::storage::StoreError;


/// An error rendered as `{"error": code, "message": ...}` with an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}


impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }
}


impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.code, "message": self.message }));
        (self.status, body).into_response()
    }
}


impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidName => {
                ApiError::bad_request("invalid_name", "Name must be 1-80 characters.")
            }
            StoreError::InvalidMask => ApiError::bad_request(
                "invalid_mask",
                "Weekly mask must be 7 characters of 0 and 1.",
            ),
            StoreError::NotFound(what) => {
                ApiError::not_found(format!("{} not found.", capitalize(what)))
            }
            StoreError::DuplicateCompletion => ApiError::new(
                StatusCode::CONFLICT,
                "duplicate",
                "Already completed for that date.",
            ),
            StoreError::InsufficientCoins { balance, cost } => ApiError::new(
                StatusCode::CONFLICT,
                "insufficient_coins",
                format!("Costs {cost} coins but the balance is {balance}."),
            ),
            StoreError::Sqlite(e) => {
                error!(error = %e, "storage failure");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", "Storage error.")
            }
            StoreError::Io(e) => {
                error!(error = %e, "io failure");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", "Storage error.")
            }
        }
    }
}


fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::NotFound("habit"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "not_found");
        assert_eq!(err.message, "Habit not found.");

        let err = ApiError::from(StoreError::DuplicateCompletion);
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, "duplicate");

        let err = ApiError::from(StoreError::InsufficientCoins { balance: 5, cost: 10 });
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, "insufficient_coins");

        let err = ApiError::from(StoreError::InvalidName);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
