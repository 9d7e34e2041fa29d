// Start of file: /src/utils/error_handler.rs

// * Every failure leaves the service through `AppError`, which owns the one
// * translation from error kind to HTTP response.

use std::{collections::BTreeMap, error::Error, fmt};

use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    BoxError, Json,
};
use chrono::Utc;
// * Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use serde::Serialize;
// * tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

use crate::services::validation::ValidationErrors;

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug)]
pub enum AppError {
    /// A caller supplied something unusable.
    InvalidArgument(String),
    /// One or more fields failed validation.
    Validation(ValidationErrors),
    /// A deliberate server-side failure whose message is safe to return.
    ServerFault(String),
    /// Anything unclassified. The cause is logged, never returned.
    Internal(anyhow::Error),
    NotFound(String),
    PayloadTooLarge,
    RequestTimeout,
}

/// JSON body shared by every error response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl AppError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AppError::InvalidArgument(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ServerFault(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::ServerFault(_) => "SERVER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            AppError::RequestTimeout => "REQUEST_TIMEOUT",
        }
    }

    fn error_label(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation Failed",
            other => other
                .status_code()
                .canonical_reason()
                .unwrap_or("Unknown Error"),
        }
    }

    // ? What the caller is allowed to see
    fn public_message(&self) -> Option<String> {
        match self {
            AppError::InvalidArgument(message)
            | AppError::ServerFault(message)
            | AppError::NotFound(message) => Some(message.clone()),
            AppError::Internal(_) => Some(INTERNAL_ERROR_MESSAGE.to_string()),
            AppError::PayloadTooLarge => Some("Request body too large".to_string()),
            AppError::RequestTimeout => Some("Request timed out".to_string()),
            AppError::Validation(_) => None,
        }
    }

    /// Builds the response body, stamped with the current time.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            timestamp: Utc::now().to_rfc3339(),
            status: self.status_code().as_u16(),
            error: self.error_label().to_string(),
            message: self.public_message(),
            error_type: self.error_type().to_string(),
            errors: match self {
                AppError::Validation(errors) => Some(errors.field_messages()),
                _ => None,
            },
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            AppError::Validation(errors) => write!(f, "{errors}"),
            AppError::ServerFault(message) => write!(f, "server fault: {message}"),
            AppError::Internal(err) => write!(f, "internal error: {err:#}"),
            AppError::NotFound(message) => write!(f, "not found: {message}"),
            AppError::PayloadTooLarge => f.write_str("payload too large"),
            AppError::RequestTimeout => f.write_str("request timed out"),
        }
    }
}

impl Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(err) => error!(error = ?err, "Unhandled error while serving request"),
            AppError::ServerFault(message) => error!("Server fault: {message}"),
            other => warn!(error_type = other.error_type(), "{other}"),
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::InvalidArgument(rejection.body_text())
    }
}

/// Maps errors raised by tower layers (timeouts, body limits) to responses.
pub async fn handle_global_error(err: BoxError) -> AppError {
    // ! 413 if the body was too large
    if find_cause::<LengthLimitError>(&*err).is_some() || err.is::<LengthLimitError>() {
        return AppError::PayloadTooLarge;
    }

    // ! 408 if the request took too long
    if err.is::<Elapsed>() {
        return AppError::RequestTimeout;
    }

    // ! Otherwise, 500
    AppError::Internal(anyhow::anyhow!(err))
}

/// Answers every request that matched no route.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Walks the source chain looking for a specific error type.
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::FieldError;

    #[test]
    fn invalid_argument_body() {
        let err = AppError::invalid_argument("Server error");
        let body = err.body();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body.status, 400);
        assert_eq!(body.error, "Bad Request");
        assert_eq!(body.message.as_deref(), Some("Server error"));
        assert_eq!(body.error_type, "INVALID_ARGUMENT");
        assert!(body.errors.is_none());
    }

    #[test]
    fn validation_body_lists_fields_first_message_first() {
        let mut errors = ValidationErrors::default();
        errors.push(FieldError::new("value", "Message.value.empty", "Message value cannot be empty"));
        errors.push(FieldError::new("value", "NotBlank", "Message value cannot be blank"));

        let body = AppError::from(errors).body();
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(body.status, 400);
        assert_eq!(json["error"], "Validation Failed");
        assert_eq!(json["errorType"], "VALIDATION_ERROR");
        assert_eq!(json["errors"]["value"], "Message value cannot be empty");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn internal_errors_hide_their_cause() {
        let err = AppError::from(anyhow::anyhow!("database password is hunter2"));
        let body = err.body();

        assert_eq!(body.status, 500);
        assert_eq!(body.error, "Internal Server Error");
        assert_eq!(body.message.as_deref(), Some("An unexpected error occurred"));
        assert_eq!(body.error_type, "INTERNAL_ERROR");
        assert!(!serde_json::to_string(&body).unwrap().contains("hunter2"));
    }

    #[test]
    fn server_fault_keeps_its_message() {
        let body = AppError::ServerFault("Server error".into()).body();
        assert_eq!(body.status, 500);
        assert_eq!(body.message.as_deref(), Some("Server error"));
    }

    #[tokio::test]
    async fn layer_errors_are_classified() {
        let timeout: BoxError = Box::new(Elapsed::new());
        assert!(matches!(handle_global_error(timeout).await, AppError::RequestTimeout));

        let other: BoxError = "boom".into();
        assert!(matches!(handle_global_error(other).await, AppError::Internal(_)));
    }

    #[test]
    fn find_cause_walks_the_chain() {
        #[derive(Debug)]
        struct Outer(std::io::Error);

        impl fmt::Display for Outer {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("outer")
            }
        }

        impl Error for Outer {
            fn source(&self) -> Option<&(dyn Error + 'static)> {
                Some(&self.0)
            }
        }

        let err = Outer(std::io::Error::other("inner"));
        assert!(find_cause::<std::io::Error>(&err).is_some());
        assert!(find_cause::<fmt::Error>(&err).is_none());
    }
}

// End of file: /src/utils/error_handler.rs
