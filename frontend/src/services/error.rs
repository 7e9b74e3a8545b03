//! Failures of backend calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response (backend down, CORS, offline).
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("employee not found")]
    NotFound,

    /// Any other non-success status. `message` is the backend's explanation
    /// when it sent one.
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON shape we expected.
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Builds the error for a non-success response from its status and body.
    /// A JSON body with a `message` field contributes just that field.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 404 {
            return ServiceError::NotFound;
        }
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        ServiceError::Status { status, message }
    }
}
