// Response logging middleware
// Buffers each final response, logs it as indented JSON and passes it on untouched

use axum::{
    body::{Body, Bytes},
    http::{Method, Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tracing::{debug, Level};

use crate::utils::error_handler::AppError;
use crate::utils::utils::to_two_space_indented_json;

/// Logs the response body in a readable form, falling back to raw text
fn log_formatted_response(method: &Method, path: &str, status: StatusCode, body: &Bytes) {
    let rendered: String = match serde_json::from_slice::<Value>(body) {
        Ok(json) => to_two_space_indented_json(&json)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned()),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };

    debug!(%method, path, status = status.as_u16(), "\nFinal response:\n{}", rendered);
}

/// Middleware that logs every response leaving the router
pub async fn response_logger(req: Request<Body>, next: Next) -> Response<Body> {
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;

    if !tracing::enabled!(Level::DEBUG) {
        return response;
    }

    let (parts, body) = response.into_parts();

    let bytes: Bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => return AppError::from(anyhow::Error::from(err)).into_response(),
    };

    log_formatted_response(&method, &path, parts.status, &bytes);

    Response::from_parts(parts, Body::from(bytes))
}
