//! HTTP mapping for `AcctError`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use acctgate_core::error::{AcctError, ClientCode};

/// Newtype so the HTTP mapping lives in the gateway, not in core.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AcctError);

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError(AcctError::BadRequest(e.body_text()))
    }
}

// Ids are integers; any other segment names no account.
impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        tracing::debug!(error = %e.body_text(), "unparseable account id");
        ApiError(AcctError::NotFound)
    }
}

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::DuplicateEmail | ClientCode::InvalidInvitation | ClientCode::BadRequest => {
            StatusCode::BAD_REQUEST
        }
        ClientCode::AuthFailed => StatusCode::UNAUTHORIZED,
        ClientCode::Forbidden | ClientCode::OldPasswordRequired | ClientCode::IncorrectPassword => {
            StatusCode::FORBIDDEN
        }
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let message = match &self.0 {
            AcctError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                "internal error".to_string()
            }
            AcctError::Unavailable(detail) => {
                tracing::warn!(%detail, "store unavailable");
                self.0.to_string()
            }
            other => other.to_string(),
        };
        let body = Json(json!({
            "error": code.as_str(),
            "message": message,
        }));
        (status_for(code), body).into_response()
    }
}
