//! HTTP response types for the Printify API SDK.
//!
//! This module provides the [`HttpResponse`] type. Bodies are kept as the raw
//! text the server sent; callers decide how to parse them.

use std::collections::HashMap;

/// An HTTP response from the Printify API.
///
/// Header names are stored lowercase; a header may carry multiple values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Useful to include when reporting problems to Printify support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}
