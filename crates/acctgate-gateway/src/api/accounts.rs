//! `/v1/users` handlers.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use acctgate_core::{AccountId, AccountPatch, CreateAccount};

use super::error::ApiError;
use super::{validate, AccountView};
use crate::app_state::AppState;
use crate::context::Authenticated;

pub async fn create_account(
    State(app): State<AppState>,
    body: Result<Json<CreateAccount>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountView>), ApiError> {
    let Json(req) = body?;
    validate::signup(&req)?;

    let started = Instant::now();
    let res = app.policy().create(req).await;
    app.metrics().record("create", &res, started.elapsed());

    let account = res?;
    Ok((StatusCode::CREATED, Json(AccountView::from(&account))))
}

pub async fn get_account(
    State(app): State<AppState>,
    Authenticated(requester): Authenticated,
    path: Result<Path<AccountId>, PathRejection>,
) -> Result<Json<AccountView>, ApiError> {
    let Path(id) = path?;
    let started = Instant::now();
    let res = app.policy().read(&requester, id).await;
    app.metrics().record("read", &res, started.elapsed());

    Ok(Json(AccountView::from(&res?)))
}

pub async fn update_account(
    State(app): State<AppState>,
    Authenticated(requester): Authenticated,
    path: Result<Path<AccountId>, PathRejection>,
    body: Result<Json<AccountPatch>, JsonRejection>,
) -> Result<Json<AccountView>, ApiError> {
    let Path(id) = path?;
    let Json(patch) = body?;
    validate::patch(&patch)?;

    let started = Instant::now();
    let res = app.policy().update(&requester, id, patch).await;
    app.metrics().record("update", &res, started.elapsed());

    Ok(Json(AccountView::from(&res?)))
}
