use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    ConfigError(String),
    InternalError(String),
    NotFound(String),
    BadRequest(String),
    Validation {
        code: &'static str,
        message: String,
    },
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "Database error: {}", e),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation { code, message } => {
                write!(f, "Validation error [{}]: {}", code, message)
            }
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error_message) = match self {
            AppError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "Failed to reach the data store",
                )
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "Server configuration error",
                )
            }
            AppError::InternalError(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, None, msg.as_str())
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, None, msg.as_str()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, None, msg.as_str()),
            AppError::Validation { code, ref message } => {
                (StatusCode::BAD_REQUEST, Some(code), message.as_str())
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, None, msg.as_str()),
            AppError::Unauthorized(ref msg) => (StatusCode::UNAUTHORIZED, None, msg.as_str()),
            AppError::Forbidden(ref msg) => (StatusCode::FORBIDDEN, None, msg.as_str()),
        };

        let body = match code {
            Some(code) => Json(json!({
                "success": false,
                "error": error_message,
                "code": code,
            })),
            None => Json(json!({
                "success": false,
                "error": error_message,
            })),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use axum::{http::StatusCode, response::IntoResponse};

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = AppError::Validation {
            code: "MISSING_FIELDS",
            message: "customerId, productId, and amount required".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failures_map_to_internal_server_error() {
        let err = AppError::DatabaseError(sqlx::Error::RowNotFound);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn remaining_variants_map_to_expected_statuses() {
        let cases = [
            (
                AppError::NotFound("x".to_string()).into_response().status(),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::BadRequest("x".to_string()).into_response().status(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Conflict("x".to_string()).into_response().status(),
                StatusCode::CONFLICT,
            ),
            (
                AppError::Unauthorized("x".to_string())
                    .into_response()
                    .status(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::Forbidden("x".to_string()).into_response().status(),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::InternalError("x".to_string())
                    .into_response()
                    .status(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (got, expected) in cases {
            assert_eq!(got, expected);
        }
    }
}
