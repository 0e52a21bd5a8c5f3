//! API error types.

use crate::pickups::PickupError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use signcast_directory::DirectoryError;
use signcast_pack::PackError;

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Candidate names for ambiguous lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("packager error: {0}")]
    Pack(#[from] PackError),

    #[error("pickup lookup error: {0}")]
    Pickup(#[from] PickupError),

    #[error("core error: {0}")]
    Core(#[from] signcast_core::Error),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::BadRequest(_) => "bad_request",
            Self::Forbidden(_) => "forbidden",
            Self::Internal(_) => "internal_error",
            Self::Directory(e) => match e {
                DirectoryError::NotFound(_) => "not_found",
                DirectoryError::NotDeployed(_) => "not_deployed",
                DirectoryError::Forbidden(_) => "forbidden",
                _ => "directory_error",
            },
            Self::Pack(e) => match e {
                PackError::Content { .. } => "content_unavailable",
                _ => "pack_error",
            },
            Self::Pickup(e) => match e {
                PickupError::NoLocationFound(_) => "no_location",
                PickupError::AmbiguousLocations { .. } => "ambiguous_location",
                PickupError::Upstream(_) => "upstream_error",
            },
            Self::Core(_) => "core_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Directory(e) => match e {
                DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
                DirectoryError::NotDeployed(_) => StatusCode::BAD_REQUEST,
                DirectoryError::Forbidden(_) => StatusCode::FORBIDDEN,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Pack(e) => match e {
                // A vanished upstream file or failed feed fetch is the
                // collaborator's fault, not ours.
                PackError::Content { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Pickup(e) => match e {
                PickupError::NoLocationFound(_) => StatusCode::NOT_FOUND,
                PickupError::AmbiguousLocations { .. } => StatusCode::CONFLICT,
                PickupError::Upstream(_) => StatusCode::BAD_GATEWAY,
            },
            // Core errors reaching the HTTP layer are malformed inputs
            // (client manifest JSON, fingerprint hex).
            Self::Core(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn candidates(&self) -> Option<Vec<String>> {
        match self {
            Self::Pickup(PickupError::AmbiguousLocations { candidates, .. }) => {
                Some(candidates.clone())
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            candidates: self.candidates(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
