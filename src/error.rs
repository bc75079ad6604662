use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Raised while filling in or submitting a form, before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Profile is incomplete: {0} is required")]
    IncompleteProfile(&'static str),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Current email and password are required")]
    MissingAuthCredentials,

    #[error("Invalid {field}: {value}")]
    InvalidOption { field: &'static str, value: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Form was already submitted")]
    SessionFinished,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },
}

impl ClientError {
    /// Message shown to the user. Transport failures are not told apart.
    pub fn notice(&self) -> String {
        match self {
            ClientError::Form(err) => err.to_string(),
            ClientError::Request(_) | ClientError::Status { .. } => {
                "Request failed, please try again later.".to_string()
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} must be a valid port number, got {value:?}")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Failure while relaying a request to an upstream service.
#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned invalid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        error!("Error forwarding request: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal Server Error"
            })),
        )
            .into_response()
    }
}
