//! HTTP client for Printify API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Printify API. Each call to [`HttpClient::request`] performs
//! exactly one round-trip; nothing is retried.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, JSON_CONTENT_TYPE};
use crate::clients::http_response::HttpResponse;
use crate::config::PrintifyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base path of version 1 of the Printify API.
pub const API_BASE_PATH: &str = "/v1";

/// HTTP client for making requests to the Printify API.
///
/// The client handles:
/// - Base URI construction from the configured host
/// - Default headers including `Authorization`, `Accept`, and `User-Agent`
/// - Turning non-2xx responses into [`HttpResponseError`]
///
/// Default headers are fixed at construction. The access token is never read
/// again afterwards and never shows up in `Debug` output.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Concurrent requests share the underlying
/// connection pool and only read the client's state.
///
/// # Example
///
/// ```rust,ignore
/// use printify_api::{AccessToken, PrintifyConfig};
/// use printify_api::clients::{HttpClient, HttpRequest, HttpMethod, API_BASE_PATH};
///
/// let config = PrintifyConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(API_BASE_PATH, &config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "shops.json")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.printify.com`).
    base_uri: String,
    /// Base path (e.g., "/v1").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// No network activity happens here.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/v1")
    /// * `config` - Configuration providing the token, host and transport settings
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS backend initialization failure).
    pub fn new(base_path: impl Into<String>, config: &PrintifyConfig) -> Result<Self, HttpError> {
        let base_path = base_path.into().trim_end_matches('/').to_string();
        let base_uri = config.host().base_uri().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Printify API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer_header(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        tracing::debug!(base_uri = %base_uri, base_path = %base_path, "Created Printify HTTP client");

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_uri, self.base_path, path)
    }

    /// Sends an HTTP request to the Printify API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`), before anything is sent
    /// - A transport error occurs, including a configured timeout (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);
        let headers = self.merge_headers(&request)?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .headers(headers);

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending Printify API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());

        if !res.status().is_success() {
            // The status is the error; a body that fails to read is reported as empty
            let body = res.text().await.unwrap_or_default();
            let request_id = res_headers
                .get("x-request-id")
                .and_then(|values| values.first())
                .cloned();

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                status = code,
                "Printify API request failed"
            );

            return Err(HttpError::Response(HttpResponseError {
                code,
                body,
                request_id,
            }));
        }

        let body = res.text().await?;

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Printify API request succeeded"
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Merges default, content-type and extra headers for one request.
    ///
    /// Header names compare case-insensitively, so an extra header replaces a
    /// default one instead of being sent alongside it. An extra
    /// `Authorization` header is dropped; the configured token always wins.
    fn merge_headers(&self, request: &HttpRequest) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            insert_header(&mut headers, name, value)?;
        }

        if request.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        if let Some(extra) = &request.extra_headers {
            for (name, value) in extra {
                if name.eq_ignore_ascii_case(AUTHORIZATION.as_str()) {
                    tracing::debug!(path = %request.path, "Ignoring Authorization header supplied with request");
                    continue;
                }
                insert_header(&mut headers, name, value)?;
            }
        }

        Ok(headers)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Inserts a header, replacing any value already stored under the same name.
fn insert_header(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
) -> Result<(), InvalidHttpRequestError> {
    let invalid = || InvalidHttpRequestError::InvalidHeader {
        name: name.to_string(),
    };
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
    let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
    headers.insert(header_name, header_value);
    Ok(())
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "Bearer *****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("base_path", &self.base_path)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}
