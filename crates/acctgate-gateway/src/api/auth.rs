//! Password login: exchanges credentials for a bearer token.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use acctgate_core::error::AcctError;

use super::error::ApiError;
use super::AccountView;
use crate::app_state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub grant_type: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub account: AccountView,
    pub token_type: &'static str,
    pub access_token: String,
    pub expires_in: u64,
}

pub async fn login(
    State(app): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    let Json(req) = body?;
    if req.grant_type != "password" {
        let msg = format!("unsupported grant_type: {}", req.grant_type);
        return Err(AcctError::BadRequest(msg).into());
    }

    let started = Instant::now();
    let res = app.policy().authenticate(&req.email, &req.password).await;
    app.metrics().record("login", &res, started.elapsed());
    let account = res?;

    let access_token = app.tokens().issue(account.id)?;
    tracing::info!(account_id = account.id, "token issued");

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            account: AccountView::from(&account),
            token_type: "Bearer",
            access_token,
            expires_in: app.tokens().ttl().as_secs(),
        }),
    ))
}
