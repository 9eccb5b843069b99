use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown model {value:?} (expected one of: {expected})")]
    UnknownModel {
        value: String,
        expected: &'static str,
    },
}

/// Rejections produced before a request reaches a model.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Valid JSON that does not fit the request schema.
    #[error("request body does not match the schema: {0}")]
    Schema(String),

    /// Not JSON at all, wrong content type, or over the size limit.
    #[error("malformed request body: {0}")]
    Malformed(String),

    #[error("endpoint not found")]
    NotFound,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Schema(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Malformed(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(err) if err.is_data() => ApiError::Schema(err.to_string()),
            other => ApiError::Malformed(other.to_string()),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub timestamp: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
