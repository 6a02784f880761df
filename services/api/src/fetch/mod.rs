pub mod fetcher;
pub mod jurisdiction;
pub mod metrics;
pub mod transform;

pub use fetcher::DataFetcher;
pub use jurisdiction::Jurisdiction;
pub use metrics::{Metric, MetricRoute, VALID_METRICS};

use serde_json::Value;
use std::fmt;

use crate::error::ApiError;

/// Tagged fetch outcome so callers can tell a missing dataset from a broken
/// upstream from a malformed body, instead of one collapsed failure kind.
#[derive(Debug)]
pub enum FetchError {
    NotFound { message: String, details: Value },
    Upstream { message: String, status: Option<u16> },
    Transform { message: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound { message, .. } => write!(f, "{}", message),
            FetchError::Upstream { message, status: Some(code) } => {
                write!(f, "{} (status {})", message, code)
            }
            FetchError::Upstream { message, status: None } => write!(f, "{}", message),
            FetchError::Transform { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Upstream {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound { message, details } => ApiError::NotFound { message, details },
            FetchError::Upstream { message, status } => ApiError::Upstream { message, status },
            FetchError::Transform { message } => ApiError::Transform(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use serde_json::json;

    #[test]
    fn upstream_kind_surfaces_as_server_error_with_status() {
        let err: ApiError = FetchError::Upstream {
            message: "Failed to fetch inflation_rate data from external API".to_string(),
            status: Some(500),
        }
        .into();

        assert_eq!(err.status_code().as_u16(), 500);
        assert_eq!(err.error_body().details, json!({ "status_code": 500 }));
    }

    #[test]
    fn not_found_kind_stays_not_found() {
        let err: ApiError = FetchError::NotFound {
            message: "Province 'Nova Scotia' is not supported".to_string(),
            details: json!({ "province": "Nova Scotia" }),
        }
        .into();

        assert_eq!(err.status_code().as_u16(), 404);
        assert_eq!(err.error_body().error_code, "DATA_NOT_FOUND");
    }
}
