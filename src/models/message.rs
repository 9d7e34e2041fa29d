// Start of file: /src/models/message.rs

/*
    * Request and response bodies for the root endpoints.
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /`. A missing or `null` value is kept as `None` so it can
/// be rejected by validation rather than by deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub value: Option<String>,
}

impl Message {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub title: String,
    pub date: DateTime<Utc>,
}

// Body of `GET /`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}


// End of file: /src/models/message.rs
