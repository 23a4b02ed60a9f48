//! REST API client for the Printify API.
//!
//! This module provides [`PrintifyClient`], built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`PrintifyClient`]: One method per Printify operation plus raw
//!   `get()`, `post()`, `put()`, `delete()` verbs
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::PrintifyClient;
//!
//! let client = PrintifyClient::new("personal-access-token")?;
//!
//! // Named operation
//! let products = client.get_products("123").await?;
//!
//! // Raw verb for an endpoint without a named method
//! let blueprints = client.get("catalog/blueprints.json").await?;
//! ```
//!
//! # Path Handling
//!
//! Paths are relative to `/v1`. Leading slashes are stripped; everything else
//! is sent as given.

mod client;
mod errors;

pub use client::PrintifyClient;
pub use errors::RestError;
