// Actuator route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates the router for the operational endpoints under `/actuator`
pub fn actuator_routes() -> Router<AppState> {
    Router::new()
        .route("/actuator", get(handler::links_handler))
        .route("/actuator/health", get(handler::health_handler))
        .route("/actuator/health/{component}", get(handler::health_component_handler))
        .route("/actuator/info", get(handler::info_handler))
}
