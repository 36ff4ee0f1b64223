//! Error types
//!
//! Validation failures are caught client-side before any network call is
//! made; submission failures carry the server's message when it sent one.

use std::fmt;

/// Failures raised by the book-set composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerError {
    /// One or more required scalar fields empty
    MissingField,
    /// No books selected
    EmptySelection,
    /// The persistence API rejected the submission
    Submission(String),
}

impl fmt::Display for ComposerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposerError::MissingField => write!(f, "All fields are required"),
            ComposerError::EmptySelection => write!(f, "Please select at least one book"),
            ComposerError::Submission(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ComposerError {}

/// Failures raised by the HTTP client.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, ...)
    Request(String),
    /// Non-2xx response, with the server's error message when the body had one
    Api { status: u16, message: Option<String> },
    /// Body did not match the expected shape
    Decode(String),
}

impl ApiError {
    /// The server-provided message, if the error body carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Api {
                status,
                message: Some(msg),
            } => write!(f, "API error {}: {}", status, msg),
            ApiError::Api {
                status,
                message: None,
            } => write!(f, "API error {}", status),
            ApiError::Decode(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// Conversion from reqwest errors (used in the api layer)
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}
