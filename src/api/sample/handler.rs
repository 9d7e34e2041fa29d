// Handlers for the root endpoints

use std::convert::Infallible;

use axum::{extract::{rejection::JsonRejection, State}, Json};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::models::message::{GreetingResponse, Message, MessageResponse};
use crate::services::{mapper::to_message_response, validation::Validate};
use crate::utils::error_handler::AppError;

/// Returns the fixed greeting
#[instrument(skip(state))]
pub async fn hello_handler(State(state): State<AppState>) -> Json<GreetingResponse> {
    info!("Greeting requested");

    Json(GreetingResponse {
        message: state.greeting.greeting().to_string(),
    })
}

/// Echoes a validated message back with a title and the current date
#[instrument(skip_all)]
pub async fn message_handler(
    payload: Result<Json<Message>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(message) = payload?;
    message.validate()?;

    let response: MessageResponse = to_message_response(Some(&message))
        .ok_or_else(|| anyhow::anyhow!("message mapping produced no response"))?;

    info!(length = response.message.len(), "Message accepted");
    Ok(Json(response))
}

/// Always fails. Exists to exercise the error translation end to end.
pub fn trigger_error() -> Result<Infallible, AppError> {
    Err(AppError::ServerFault("Server error".to_string()))
}

#[instrument]
pub async fn foo_handler() -> Result<String, AppError> {
    trigger_error().map(|never| match never {})
}
