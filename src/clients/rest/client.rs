//! REST client implementation for the Printify API.
//!
//! This module provides the [`PrintifyClient`] type. The named operations
//! (shops, orders, products) are defined next to their path tables in
//! [`crate::rest::resources`]; this file holds construction and the raw verbs
//! they are built on.

use serde::Serialize;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, API_BASE_PATH};
use crate::config::{AccessToken, PrintifyConfig};

/// REST API client for the Printify API.
///
/// Every method maps to exactly one HTTP request. Successful calls return the
/// raw response body text; any failure is returned as a [`RestError`].
///
/// # Thread Safety
///
/// `PrintifyClient` is `Send + Sync` and holds no mutable state, so a single
/// instance can serve concurrent calls from many tasks.
///
/// # Example
///
/// ```rust,ignore
/// use printify_api::PrintifyClient;
///
/// let client = PrintifyClient::new("personal-access-token")?;
///
/// let shops = client.get_shops().await?;
/// let order = client.get_order_by_id("123", "5a96f649b2439217d070f507").await?;
///
/// let body = serde_json::json!({"title": "Mug"});
/// let created = client.create_product("123", &body).await?;
/// ```
#[derive(Debug)]
pub struct PrintifyClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify PrintifyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintifyClient>();
};

impl PrintifyClient {
    /// Creates a new client authenticated with the given access token.
    ///
    /// Uses the default host and no timeout. No network activity happens here.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the token is empty, or
    /// [`RestError::Http`] if the transport cannot be initialized.
    pub fn new(access_token: impl Into<String>) -> Result<Self, RestError> {
        let config = PrintifyConfig::builder()
            .access_token(AccessToken::new(access_token)?)
            .build()?;

        Self::from_config(&config)
    }

    /// Creates a new client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the transport cannot be initialized.
    pub fn from_config(config: &PrintifyConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(API_BASE_PATH, config)?;

        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path relative to `/v1` (e.g., "shops.json")
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(&self, path: &str) -> Result<String, RestError> {
        self.send(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// The body is serialized before anything is sent, keeping the field order
    /// of the value.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialization`] if the body cannot be serialized.
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"title": "Mug"});
    /// let response = client.post("shops/123/products.json", &body).await?;
    /// ```
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<String, RestError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    /// Sends a PUT request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialization`] if the body cannot be serialized.
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<String, RestError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str) -> Result<String, RestError> {
        self.send(HttpMethod::Delete, path, None).await
    }

    /// Sends a request whose body, if any, is already serialized JSON.
    pub(crate) async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<String, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        let response = self.http_client.request(request).await?;
        Ok(response.into_body())
    }
}

/// Strips leading slashes so `"/shops.json"` and `"shops.json"` resolve alike.
///
/// The rest of the path is kept byte-for-byte.
fn normalize_path(path: &str) -> Result<&str, RestError> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed)
}
