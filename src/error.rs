use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::pricing::{EstimateError, EstimateField};

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration error
    ConfigError(String),
    /// Calculator selection does not resolve against the catalog
    InvalidParameters(EstimateField),
    /// Malformed client input outside the calculator
    ValidationError { field: &'static str, message: String },
    /// Requested record does not exist
    NotFound(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidParameters(_) => write!(f, "Invalid calculator parameters"),
            Self::ValidationError { field, message } => {
                write!(f, "Validation error ({}): {}", field, message)
            }
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidParameters(_) => StatusCode::BAD_REQUEST,
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            // Internal details stay in the logs
            Self::ConfigError(_) | Self::InternalError(_) => {
                tracing::error!(error = %self, "Request failed");
                "Internal server error".to_string()
            }
            Self::ValidationError { message, .. } => message.clone(),
            Self::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        };

        let mut error = json!({
            "message": message,
            "type": error_type_name(&self),
        });
        if let Some(field) = error_field(&self) {
            error["field"] = json!(field);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::ConfigError(_) => "config_error",
        AppError::InvalidParameters(_) => "invalid_parameters",
        AppError::ValidationError { .. } => "validation_error",
        AppError::NotFound(_) => "not_found",
        AppError::InternalError(_) => "internal_error",
    }
}

fn error_field(error: &AppError) -> Option<&'static str> {
    match error {
        AppError::InvalidParameters(field) => Some(field.as_str()),
        AppError::ValidationError { field, .. } => Some(*field),
        _ => None,
    }
}

// Implement conversions from common error types
impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        Self::InvalidParameters(err.field())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError {
            field: "body",
            message: rejection.body_text(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::InternalError(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InternalError(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::NotFound("quote 42".to_string());
        assert_eq!(error.to_string(), "Not found: quote 42");
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(
            error_type_name(&AppError::InvalidParameters(EstimateField::Fabric)),
            "invalid_parameters"
        );
        assert_eq!(error_type_name(&AppError::NotFound("x".to_string())), "not_found");
    }

    #[test]
    fn test_estimate_error_conversion_keeps_field() {
        let err: AppError = EstimateError::InvalidParameters {
            field: EstimateField::Branding,
        }
        .into();
        assert!(matches!(err, AppError::InvalidParameters(EstimateField::Branding)));
    }

    #[tokio::test]
    async fn test_invalid_parameters_response() {
        let response = AppError::InvalidParameters(EstimateField::Category).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["type"], "invalid_parameters");
        assert_eq!(json["error"]["field"], "category");
        assert_eq!(json["error"]["message"], "Invalid calculator parameters");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::InternalError("disk I/O error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "Internal server error");
    }
}
