//! Framework-level request body validation.
//!
//! [`ValidatedJson`] rejects malformed JSON and entity-constraint
//! violations before a handler ever runs, so handlers only deal with
//! identifier semantics.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs `validator` constraints after deserializing.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection for [`ValidatedJson`].
pub struct BodyRejection {
    pub message: String,
}

impl axum::response::IntoResponse for BodyRejection {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "message": self.message })),
        )
            .into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value): Json<T> =
            Json::from_request(req, state)
                .await
                .map_err(|e| BodyRejection {
                    message: format!("Invalid JSON: {}", e),
                })?;

        value.validate().map_err(|e| BodyRejection {
            message: e.to_string(),
        })?;

        Ok(ValidatedJson(value))
    }
}
