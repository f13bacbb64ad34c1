use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use acctgate_core::error::{AcctError, Result};
use acctgate_core::Requester;

use crate::api::error::ApiError;
use crate::app_state::AppState;

/// Requester resolved from `Authorization: Bearer <token>`.
///
/// Handlers take this as an argument and hand the inner [`Requester`] to the
/// policy explicitly.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Requester);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, ApiError> {
        let token = bearer_token(parts)?;
        let requester = resolve_requester(state, token).await?;
        Ok(Authenticated(requester))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str> {
    let raw = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AcctError::AuthFailed)?
        .to_str()
        .map_err(|_| AcctError::AuthFailed)?;

    let (scheme, token) = raw.split_once(' ').ok_or(AcctError::AuthFailed)?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return Err(AcctError::AuthFailed);
    }
    Ok(token.trim())
}

/// Token -> account id -> current record. A token for a vanished account is
/// treated like a bad token.
pub async fn resolve_requester(state: &AppState, token: &str) -> Result<Requester> {
    let id = state.tokens().verify(token)?;
    let policy = state.policy();
    let account = policy
        .store()
        .find_by_id(id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(account_id = id, "token for unknown account");
            AcctError::AuthFailed
        })?;
    Ok(Requester::new(account))
}
