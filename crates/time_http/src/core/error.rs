use std::net::SocketAddr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

// Error codes
const ERROR_UNKNOWN_TIME_ZONE: &str = "unknown_time_zone";

/// Errors raised while resolving times
#[derive(Debug, thiserror::Error)]
pub enum TimeServerError {
    #[error("Unknown time zone: {identifier}")]
    UnknownZone { identifier: String },
}

impl IntoResponse for TimeServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            TimeServerError::UnknownZone { identifier } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": ERROR_UNKNOWN_TIME_ZONE,
                    "message": message,
                    "timeZone": identifier,
                })),
            )
                .into_response(),
        }
    }
}

/// Errors that stop the server from starting or keep it from serving
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type TimeServerResult<T> = Result<T, TimeServerError>;
pub type StartupResult<T> = Result<T, StartupError>;
