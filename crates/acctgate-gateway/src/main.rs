//! acctgate gateway binary.
//!
//! - Config: `ACCTGATE_CONFIG` or `./acctgate.yaml` (strict parsing + validate)
//! - Routes: /v1/users, /v1/users/:id, /v1/auth/login, /healthz, /metrics
//! - Logging: `RUST_LOG` env filter

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use acctgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "acctgate-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = config::config_path();
    let cfg = config::load_from_file(&path)?;
    let state = app_state::AppState::new(cfg)?;
    let listen: SocketAddr = state.cfg().gateway.listen.parse()?;

    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "acctgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
