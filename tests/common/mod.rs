//! tests/common/mod.rs
//! A shared test helper to spawn the service on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;

use actuator_sample::config::{environment::EnvironmentVariables, state::AppState};
use actuator_sample::core::server::create_app;
use axum::{serve, Router};
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the app with default configuration and returns its base URL.
pub fn spawn_app() -> String {
    spawn_app_with(&[])
}

/// Spawns the app with the given environment overrides.
pub fn spawn_app_with(overrides: &[(&str, &str)]) -> String {
    let state: AppState = state_with(overrides);

    // * Build the application exactly like main() does.
    spawn_router(create_app(state))
}

/// Builds application state from the given environment overrides.
pub fn state_with(overrides: &[(&str, &str)]) -> AppState {
    let vars: HashMap<String, String> = overrides
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    let env: EnvironmentVariables =
        EnvironmentVariables::from_vars(&vars).expect("Invalid test configuration");
    AppState::new(env).expect("Failed to build state")
}

/// Serves an already built router on an ephemeral port and returns its base URL.
pub fn spawn_router(app: Router) -> String {
    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}

/// Sends a JSON body to `POST /` and returns the response.
pub async fn post_json(base_url: &str, body: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/", base_url))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .send()
        .await
        .expect("Failed to execute request.")
}

/// Reads a response body as JSON.
pub async fn json_body(resp: reqwest::Response) -> serde_json::Value {
    let body: String = resp.text().await.unwrap();
    serde_json::from_str(&body).unwrap()
}
