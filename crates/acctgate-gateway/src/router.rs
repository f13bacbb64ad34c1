//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/users", post(api::accounts::create_account))
        .route(
            "/v1/users/:id",
            get(api::accounts::get_account).patch(api::accounts::update_account),
        )
        .route("/v1/auth/login", post(api::auth::login))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
