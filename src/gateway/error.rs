//! Gateway error type and its HTTP mapping.
//!
//! Client-supplied identifier inconsistencies map to 400 with a
//! machine-readable error key; absent entities map to 404; anything the
//! store reports is logged and surfaced as a bare 500. All 400s are
//! raised before any mutation is attempted.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use super::alerts::entity_failure_alert;
use crate::store::StoreError;

/// Machine-readable error keys for identifier validation failures.
pub mod error_keys {
    /// Create request carried an id.
    pub const ID_EXISTS: &str = "idexists";
    /// Update request body carried no id.
    pub const ID_NULL: &str = "idnull";
    /// Body id disagrees with the path id.
    pub const ID_INVALID: &str = "idinvalid";
    /// Path id does not exist in storage.
    pub const ID_NOT_FOUND: &str = "idnotfound";
}

/// Failure of a resource operation.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{message}")]
    BadRequest {
        entity_name: &'static str,
        key: &'static str,
        message: &'static str,
    },

    #[error("entity not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResourceError {
    pub fn bad_request(
        entity_name: &'static str,
        key: &'static str,
        message: &'static str,
    ) -> Self {
        Self::BadRequest {
            entity_name,
            key,
            message,
        }
    }
}

/// JSON body for 400 responses.
#[derive(Debug, Serialize)]
pub struct BadRequestBody {
    pub entity_name: &'static str,
    pub error_key: &'static str,
    pub message: &'static str,
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest {
                entity_name,
                key,
                message,
            } => {
                let headers = entity_failure_alert(entity_name, key);
                let body = BadRequestBody {
                    entity_name,
                    error_key: key,
                    message,
                };
                (StatusCode::BAD_REQUEST, headers, Json(body)).into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Store(e) => {
                tracing::error!("store error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
