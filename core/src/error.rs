//! Error types for the storefront client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because pages render a distinct "not
//! found" panel for it, while every other failed fetch shows an inline error.
//! Consumers only ever see the `Display` text, so the messages below are part
//! of the contract and are pinned by tests.

use std::fmt;

use thiserror::Error;

/// Single-resource endpoints that can answer 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    University,
    Hostel,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::University => write!(f, "University"),
            Resource::Hostel => write!(f, "Hostel"),
        }
    }
}

/// Errors returned by `StorefrontClient` parse methods and `Storefront` calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend returned 404 for a single-resource fetch.
    #[error("{resource} not found")]
    NotFound { resource: Resource },

    /// Any other non-2xx status, or an envelope with `success: false`.
    #[error("{0}")]
    RequestFailed(String),

    /// A successful booking response whose body is not JSON.
    #[error("{0}")]
    UnexpectedFormat(String),

    /// The response body could not be decoded into the expected wire type.
    #[error("failed to decode response: {0}")]
    Deserialization(String),

    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request: {0}")]
    Serialization(String),

    /// The transport failed before a response was received.
    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_resource() {
        let err = ApiError::NotFound {
            resource: Resource::University,
        };
        assert_eq!(err.to_string(), "University not found");
        assert!(err.is_not_found());

        let err = ApiError::NotFound {
            resource: Resource::Hostel,
        };
        assert_eq!(err.to_string(), "Hostel not found");
    }

    #[test]
    fn request_failed_displays_message_verbatim() {
        let err = ApiError::RequestFailed("Failed to load hostel (500)".to_string());
        assert_eq!(err.to_string(), "Failed to load hostel (500)");
        assert!(!err.is_not_found());
    }
}
