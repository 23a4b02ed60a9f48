//! HTTP client types for Printify API communication.
//!
//! This module provides the HTTP client layer for making authenticated
//! requests to the Printify API.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API with its raw body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::PrintifyClient`]: Higher-level client with one method per operation
//! - [`rest::RestError`]: REST-specific error type
//!
//! # Request Lifecycle
//!
//! Every request is sent exactly once:
//!
//! - **2xx**: The response is returned with its body untouched
//! - **Any other status**: [`HttpError::Response`] with the status code and body
//! - **Transport failure**: [`HttpError::Network`], never retried

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_BASE_PATH, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;

// Re-export REST client types at the clients module level
pub use rest::{PrintifyClient, RestError};
