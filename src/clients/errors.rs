//! HTTP-specific error types for the Printify API SDK.
//!
//! This module contains error types for HTTP operations: non-success
//! responses, request validation failures, and transport errors.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Nothing is retried. Every failure reaches the caller as one of these.
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The response body is kept verbatim; the SDK does not interpret it.
///
/// # Example
///
/// ```rust
/// use printify_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: r#"{"error":"Not found"}"#.to_string(),
///     request_id: None,
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("Printify API responded with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body, empty if it could not be read.
    pub body: String,
    /// Value of the `X-Request-Id` response header, if present.
    pub request_id: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before the request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Cannot send a request with an empty path.")]
    EmptyPath,

    /// A header name or value is not valid in an HTTP request.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The name of the offending header.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, timeout, or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if this error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_and_body_in_message() {
        let error = HttpResponseError {
            code: 404,
            body: r#"{"error":"Not Found"}"#.to_string(),
            request_id: None,
        };
        assert_eq!(
            error.to_string(),
            r#"Printify API responded with status 404: {"error":"Not Found"}"#
        );
    }

    #[test]
    fn test_http_error_status_only_for_responses() {
        let error = HttpError::Response(HttpResponseError {
            code: 500,
            body: String::new(),
            request_id: Some("req-1".to_string()),
        });
        assert_eq!(error.status(), Some(500));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use post without specifying data."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            body: "test".to_string(),
            request_id: None,
        };
        let _ = response_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid_error;
    }
}
