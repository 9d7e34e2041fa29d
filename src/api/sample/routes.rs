// Root route definitions

use axum::{
    routing::{any, get},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates the router for the greeting, message echo and error demo endpoints
pub fn sample_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::hello_handler).post(handler::message_handler))
        // Any method reaches the error demo
        .route("/foo", any(handler::foo_handler))
}
