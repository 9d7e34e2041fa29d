// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use actuator_sample::config::state::AppState;
use actuator_sample::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;
    info!(
        service = state.environment.service.name(),
        environment = %state.environment.environment,
        "Configuration loaded"
    );

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    let app: Router = server::create_app(state);

    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
