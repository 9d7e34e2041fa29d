// Actuator endpoint handlers

use axum::{
    extract::{Path, State},
    http::{header::HOST, HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::actuator::{health::{CompositeHealth, Health}, info::Info};
use crate::config::state::AppState;
use crate::utils::error_handler::AppError;

/// Discovery document listing the actuator endpoints
#[instrument(skip_all)]
pub async fn links_handler(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    let env = &state.environment;

    let host: String = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{}:{}", env.host, env.port));

    let base: String = format!("{}://{}/actuator", env.protocol, host);

    Json(json!({
        "_links": {
            "self": { "href": base, "templated": false },
            "health": { "href": format!("{base}/health"), "templated": false },
            "health-path": { "href": format!("{base}/health/{{*path}}"), "templated": true },
            "info": { "href": format!("{base}/info"), "templated": false },
        }
    }))
}

/// Aggregated health of every registered indicator
#[instrument(skip_all)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<CompositeHealth>) {
    let (code, composite) = state.actuator.health_report();
    debug!(status = ?composite.status, "Health checked");

    (code, Json(composite))
}

/// Health of a single named indicator
#[instrument(skip(state))]
pub async fn health_component_handler(
    State(state): State<AppState>,
    Path(component): Path<String>,
) -> Result<(StatusCode, Json<Health>), AppError> {
    let health: Health = state
        .actuator
        .health()
        .component(&component)
        .ok_or_else(|| AppError::NotFound(format!("No health component named '{component}'")))?;

    Ok((health.status().http_status(), Json(health)))
}

#[instrument(skip_all)]
pub async fn info_handler(State(state): State<AppState>) -> Json<Info> {
    Json(state.actuator.info())
}
