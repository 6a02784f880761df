use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound { message: String, details: Value },
    Upstream { message: String, status: Option<u16> },
    Transform(String),
    Cache(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::NotFound { message, .. } => write!(f, "Data not found: {}", message),
            ApiError::Upstream { message, status: Some(code) } => {
                write!(f, "Upstream error ({}): {}", code, message)
            }
            ApiError::Upstream { message, status: None } => {
                write!(f, "Upstream error: {}", message)
            }
            ApiError::Transform(msg) => write!(f, "Transform error: {}", msg),
            ApiError::Cache(msg) => write!(f, "Cache error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Wire envelope: every failure leaves the service as
/// `{message, error_code, details}` rather than a bare string.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error_code: &'static str,
    pub details: Value,
}

impl ApiError {
    fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg)
            | ApiError::Transform(msg)
            | ApiError::Cache(msg)
            | ApiError::Internal(msg) => msg,
            ApiError::NotFound { message, .. } => message,
            ApiError::Upstream { message, .. } => message,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "DATA_NOT_FOUND",
            ApiError::Upstream { .. }
            | ApiError::Transform(_)
            | ApiError::Cache(_)
            | ApiError::Internal(_) => "DATABASE_ERROR",
        }
    }

    pub fn error_body(&self) -> ErrorBody {
        let details = match self {
            ApiError::NotFound { details, .. } => details.clone(),
            ApiError::Upstream { status: Some(code), .. } => json!({ "status_code": code }),
            _ => json!({}),
        };

        ErrorBody {
            message: self.message().to_string(),
            error_code: self.error_code(),
            details,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. }
            | ApiError::Transform(_)
            | ApiError::Cache(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(self.error_body())
    }
}

impl From<redis::RedisError> for ApiError {
    fn from(err: redis::RedisError) -> Self {
        ApiError::Cache(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_carries_status_in_details() {
        let err = ApiError::Upstream {
            message: "Failed to fetch gdp_growth data from external API".to_string(),
            status: Some(500),
        };

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.error_body();
        assert_eq!(body.error_code, "DATABASE_ERROR");
        assert_eq!(body.details, json!({ "status_code": 500 }));
    }

    #[test]
    fn validation_error_maps_to_bad_request() {
        let err = ApiError::Validation("page must be at least 1".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_body().error_code, "VALIDATION_ERROR");
    }

    #[test]
    fn not_found_keeps_its_details() {
        let err = ApiError::NotFound {
            message: "Province 'Nova Scotia' is not supported".to_string(),
            details: json!({ "province": "Nova Scotia" }),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let body = err.error_body();
        assert_eq!(body.error_code, "DATA_NOT_FOUND");
        assert_eq!(body.details["province"], "Nova Scotia");
    }
}
