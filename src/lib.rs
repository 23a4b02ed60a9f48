//! # Printify API Rust SDK
//!
//! A Rust SDK for the [Printify API](https://developers.printify.com/#v1-api-reference),
//! covering shops, orders and products.
//!
//! ## Overview
//!
//! This SDK provides:
//! - [`PrintifyClient`] with one async method per Printify operation
//! - Bearer-token authentication applied to every request
//! - JSON request bodies, either fixed-shape ([`rest::ShopConnection`],
//!   [`rest::OrdersPullFeed`]) or any caller value implementing `Serialize`
//! - Raw response bodies returned as text, untouched
//! - Typed errors separating configuration, serialization, transport and
//!   HTTP status failures
//!
//! The SDK does not retry, cache, paginate or parse responses. Each call is
//! exactly one HTTP request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use printify_api::PrintifyClient;
//!
//! let client = PrintifyClient::new("personal-access-token")?;
//!
//! let shops = client.get_shops().await?;
//! println!("{shops}");
//!
//! let product = serde_json::json!({"title": "Mug", "blueprint_id": 68});
//! let created = client.create_product("123", &product).await?;
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use printify_api::{AccessToken, PrintifyConfig};
//!
//! let config = PrintifyConfig::builder()
//!     .access_token(AccessToken::new("personal-access-token").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use printify_api::RestError;
//!
//! match client.get_order_by_id("123", "abc").await {
//!     Ok(body) => println!("{body}"),
//!     Err(e) if e.status() == Some(404) => println!("order not found"),
//!     Err(RestError::Http(e)) => println!("request failed: {e}"),
//!     Err(e) => println!("request not sent: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Tokens, hosts and identifiers are checked before sending
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Every operation is an `async fn`

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{AccessToken, HostUrl, PrintifyConfig, PrintifyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export REST client types
pub use clients::{PrintifyClient, RestError};
