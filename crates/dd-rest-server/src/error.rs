//! Server error types and handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Server result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be parsed
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Clone(#[from] dd_repo::FetchError),

    #[error(transparent)]
    Upload(#[from] dd_store::StoreError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Wire shape shared by every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Clone(_) => StatusCode::BAD_REQUEST,
            ApiError::Upload(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::InvalidRequest(msg) => ErrorBody {
                message: None,
                error: msg.clone(),
            },
            ApiError::Clone(err) => ErrorBody {
                message: Some("Error cloning repository".to_string()),
                error: err.to_string(),
            },
            ApiError::Upload(err) => ErrorBody {
                message: Some("Error uploading artifacts".to_string()),
                error: err.to_string(),
            },
            ApiError::Internal(msg) => ErrorBody {
                message: None,
                error: msg.clone(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Convert any error to ApiError
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Convert IO errors
impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(format!("IO error: {}", err))
    }
}
