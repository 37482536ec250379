//! # Mollie Error Types
//!
//! Typed error handling for the mollie-rs client.
//! Every API operation returns `Result<T, MollieError>`.
//!
//! The variants follow the failure taxonomy of the client:
//!
//! - [`MollieError::Validation`]: rejected locally, no request was sent
//! - [`MollieError::Configuration`]: the client could not be built
//! - [`MollieError::Transport`]: the request never produced a response
//! - [`MollieError::Api`]: the API answered with a non-2xx status
//! - [`MollieError::MalformedResponse`]: a response body could not be read

use serde::Deserialize;
use thiserror::Error;

/// Core error type for all Mollie operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MollieError {
    /// Client-side validation failed before any network call
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Missing or malformed client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// DNS, connection or timeout failure
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response from the API
    #[error("{detail}")]
    Api {
        status: u16,
        title: Option<String>,
        detail: String,
        field: Option<String>,
    },

    /// Response body could not be parsed
    #[error("{message}")]
    MalformedResponse { status: Option<u16>, message: String },
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}

impl MollieError {
    /// Validation error without an associated field
    pub fn validation(message: impl Into<String>) -> Self {
        MollieError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Validation error pointing at the offending request field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        MollieError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// Uses the structured `detail` when the body parses as an API error,
    /// otherwise falls back to a generic description with the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) if parsed.detail.is_some() => MollieError::Api {
                status,
                title: parsed.title,
                detail: parsed.detail.unwrap_or_default(),
                field: parsed.field,
            },
            Ok(parsed) => MollieError::Api {
                status,
                detail: generic_detail(status, parsed.title.as_deref()),
                title: parsed.title,
                field: parsed.field,
            },
            Err(_) => MollieError::Api {
                status,
                title: None,
                detail: generic_detail(status, None),
                field: None,
            },
        }
    }

    /// Human-readable message, suitable for display or logging
    pub fn message(&self) -> String {
        match self {
            MollieError::Validation { message, .. } => message.clone(),
            MollieError::Api { detail, .. } => detail.clone(),
            MollieError::MalformedResponse { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status code, when a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MollieError::Api { status, .. } => Some(*status),
            MollieError::MalformedResponse { status, .. } => *status,
            _ => None,
        }
    }

    /// Name of the request field that caused the problem, if known
    pub fn field(&self) -> Option<&str> {
        match self {
            MollieError::Validation { field, .. } | MollieError::Api { field, .. } => {
                field.as_deref()
            }
            _ => None,
        }
    }

    /// Returns true if the error was raised before any request was sent
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            MollieError::Validation { .. } | MollieError::Configuration(_)
        )
    }

    /// Returns true for a 404 from the API
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

fn generic_detail(status: u16, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("The API returned HTTP {} ({}) without details", status, title),
        None => format!("The API returned HTTP {} without details", status),
    }
}

/// Result type alias for Mollie operations
pub type MollieResult<T> = Result<T, MollieError>;
