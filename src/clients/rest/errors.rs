//! REST-specific error types for the Printify API SDK.
//!
//! This module contains the error type returned by every
//! [`PrintifyClient`](crate::clients::rest::PrintifyClient) operation.
//!
//! # Error Handling
//!
//! - [`RestError::Config`]: The client could not be constructed from its configuration
//! - [`RestError::InvalidPath`]: A raw request path is empty
//! - [`RestError::MissingIdentifier`] / [`RestError::EmptyIdentifier`]: A path
//!   template could not be filled in
//! - [`RestError::Serialization`]: The request body could not be serialized to JSON
//! - [`RestError::Http`]: Wraps transport failures and non-2xx responses
//!
//! All variants except [`RestError::Http`] are raised before any request is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::clients::rest::RestError;
//!
//! match client.get_order_by_id("123", "456").await {
//!     Ok(body) => println!("Order: {}", body),
//!     Err(e) if e.status() == Some(404) => println!("No such order"),
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for Printify REST API operations.
///
/// # Example
///
/// ```rust
/// use printify_api::clients::rest::RestError;
///
/// let error = RestError::EmptyIdentifier { name: "shop_id" };
/// assert!(error.to_string().contains("shop_id"));
/// assert_eq!(error.status(), None);
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The REST API path is invalid.
    ///
    /// Returned when a path is empty after stripping leading slashes.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A path template references an identifier that was not supplied.
    #[error("Missing identifier '{name}' for REST API path")]
    MissingIdentifier {
        /// The placeholder name from the template.
        name: String,
    },

    /// No path in a resource's table matches the operation and identifiers.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource name (e.g., "Product").
        resource: &'static str,
        /// The operation being attempted (e.g., "find").
        operation: &'static str,
    },

    /// An identifier was supplied but is empty.
    #[error("Identifier '{name}' cannot be empty")]
    EmptyIdentifier {
        /// The name of the empty identifier.
        name: &'static str,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code if the API answered with a non-2xx response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
