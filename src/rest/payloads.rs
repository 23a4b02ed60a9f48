//! Request bodies with a fixed shape.
//!
//! Operations whose body is built by the SDK (shop connections and the
//! pull-orders feed) use these structs. Field names and nesting match what the
//! Printify endpoints expect; serialization keeps declaration order.
//!
//! Operations that forward a caller-supplied body (orders, products) take any
//! `T: Serialize` instead, typically a `serde_json::Value`.

use std::fmt;

use serde::Serialize;

/// Body of the connect / update shop connection endpoints.
///
/// # Example
///
/// ```rust
/// use printify_api::rest::ShopConnection;
///
/// let connection = ShopConnection::new("ext1", true, "MyShop");
/// assert_eq!(
///     serde_json::to_string(&connection).unwrap(),
///     r#"{"externalShopId":"ext1","externalStatus":{"enabled":true},"externalName":"MyShop"}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConnection<'a> {
    /// The shop's identifier on the external sales channel.
    pub external_shop_id: &'a str,
    /// Whether the connection is enabled.
    pub external_status: ExternalStatus,
    /// The shop's display name on the external sales channel.
    pub external_name: &'a str,
}

impl<'a> ShopConnection<'a> {
    /// Creates a connection body.
    #[must_use]
    pub const fn new(external_shop_id: &'a str, enabled: bool, external_name: &'a str) -> Self {
        Self {
            external_shop_id,
            external_status: ExternalStatus { enabled },
            external_name,
        }
    }
}

/// Status block nested in [`ShopConnection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExternalStatus {
    /// Whether the connection is enabled.
    pub enabled: bool,
}

/// Body of the pull-orders feed endpoint.
///
/// Tells Printify where to poll for orders and how to authenticate there.
///
/// # Example
///
/// ```rust
/// use printify_api::rest::OrdersPullFeed;
/// use serde_json::json;
///
/// let headers = [json!({"X-Api-Key": "abc"})];
/// let feed = OrdersPullFeed::new("https://shop.example.com/orders", "user", "pass", &headers);
/// assert_eq!(
///     serde_json::to_string(&feed).unwrap(),
///     r#"{"url":"https://shop.example.com/orders","auth":{"basic":{"username":"user","password":"pass"},"headers":[{"X-Api-Key":"abc"}]}}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrdersPullFeed<'a> {
    /// The URL Printify polls for orders.
    pub url: &'a str,
    /// Credentials used when polling.
    pub auth: FeedAuth<'a>,
}

impl<'a> OrdersPullFeed<'a> {
    /// Creates a pull-orders feed body.
    #[must_use]
    pub const fn new(
        url: &'a str,
        username: &'a str,
        password: &'a str,
        headers: &'a [serde_json::Value],
    ) -> Self {
        Self {
            url,
            auth: FeedAuth {
                basic: BasicAuth { username, password },
                headers,
            },
        }
    }
}

/// Authentication block nested in [`OrdersPullFeed`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedAuth<'a> {
    /// HTTP basic credentials.
    pub basic: BasicAuth<'a>,
    /// Extra headers sent with each poll, passed through as given.
    pub headers: &'a [serde_json::Value],
}

/// HTTP basic credentials nested in [`FeedAuth`].
///
/// The password is masked in `Debug` output.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BasicAuth<'a> {
    /// Basic auth username.
    pub username: &'a str,
    /// Basic auth password.
    pub password: &'a str,
}

impl fmt::Debug for BasicAuth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shop_connection_serializes_camel_case_in_order() {
        let connection = ShopConnection::new("ext1", true, "MyShop");
        let json = serde_json::to_string(&connection).unwrap();

        assert_eq!(
            json,
            r#"{"externalShopId":"ext1","externalStatus":{"enabled":true},"externalName":"MyShop"}"#
        );
    }

    #[test]
    fn test_shop_connection_disabled() {
        let connection = ShopConnection::new("ext2", false, "Other");
        let value = serde_json::to_value(connection).unwrap();

        assert_eq!(value["externalStatus"]["enabled"], json!(false));
    }

    #[test]
    fn test_pull_feed_with_no_headers_sends_empty_array() {
        let feed = OrdersPullFeed::new("https://example.com/feed", "u", "p", &[]);
        let value = serde_json::to_value(feed).unwrap();

        assert_eq!(
            value,
            json!({
                "url": "https://example.com/feed",
                "auth": {
                    "basic": {"username": "u", "password": "p"},
                    "headers": []
                }
            })
        );
    }

    #[test]
    fn test_basic_auth_debug_masks_password() {
        let auth = BasicAuth {
            username: "user",
            password: "hunter2",
        };
        let debug_str = format!("{auth:?}");

        assert!(debug_str.contains("user"));
        assert!(!debug_str.contains("hunter2"));
    }
}
