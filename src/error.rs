use miette::{Diagnostic, Result};
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(hi_canvas::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(hi_canvas::config))]
    Config(String),

    /// Non-2xx response from the Canvas API
    #[error("Canvas API error: HTTP {status} - {body}")]
    #[diagnostic(code(hi_canvas::request))]
    Request { status: u16, body: String },

    /// Network-level failure before a response was received
    #[error("HTTP transport error: {0}")]
    #[diagnostic(code(hi_canvas::transport))]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    #[diagnostic(code(hi_canvas::url))]
    Url(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(hi_canvas::serialization))]
    Serialization(String),

    #[error(transparent)]
    #[diagnostic(code(hi_canvas::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(hi_canvas::other))]
    Other(String),
}

// Implement From for JSON serialization errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type CanvasResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create request errors from a response status and body
pub fn request_error(status: StatusCode, body: String) -> Error {
    Error::Request {
        status: status.as_u16(),
        body,
    }
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
