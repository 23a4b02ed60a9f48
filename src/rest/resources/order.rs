//! Order endpoints.
//!
//! Orders live under a shop. Besides listing, fetching and creating orders,
//! a shop can register a pull-orders feed: a URL Printify polls for new orders
//! using the supplied credentials.

use serde::Serialize;

use crate::clients::{PrintifyClient, RestError};
use crate::rest::payloads::OrdersPullFeed;
use crate::rest::{ResourceOperation, ResourcePath};

const ORDER: &str = "Order";
const ORDERS_PULL_FEED: &str = "OrdersPullFeed";

/// Paths for orders of a shop.
pub const ORDER_PATHS: &[ResourcePath] = &[
    ResourcePath::new(
        ResourceOperation::All,
        &["shop_id"],
        "shops/{shop_id}/orders.json",
    ),
    ResourcePath::new(
        ResourceOperation::Find,
        &["shop_id", "order_id"],
        "shops/{shop_id}/orders/{order_id}.json",
    ),
    ResourcePath::new(
        ResourceOperation::Create,
        &["shop_id"],
        "shops/{shop_id}/orders.json",
    ),
];

/// Paths for a shop's pull-orders feed.
pub const ORDERS_PULL_FEED_PATHS: &[ResourcePath] = &[ResourcePath::new(
    ResourceOperation::Create,
    &["shop_id"],
    "shops/{shop_id}/orders-pull-feed.json",
)];

impl PrintifyClient {
    /// Lists the orders of a shop.
    ///
    /// Sends `GET /v1/shops/{shop_id}/orders.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if `shop_id` is empty.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn get_orders(&self, shop_id: &str) -> Result<String, RestError> {
        self.call(
            ORDER,
            ORDER_PATHS,
            ResourceOperation::All,
            &[("shop_id", shop_id)],
        )
        .await
    }

    /// Fetches a single order.
    ///
    /// Sends `GET /v1/shops/{shop_id}/orders/{order_id}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if an identifier is empty.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn get_order_by_id(&self, shop_id: &str, order_id: &str) -> Result<String, RestError> {
        self.call(
            ORDER,
            ORDER_PATHS,
            ResourceOperation::Find,
            &[("shop_id", shop_id), ("order_id", order_id)],
        )
        .await
    }

    /// Creates an order.
    ///
    /// Sends `POST /v1/shops/{shop_id}/orders.json`. The body is forwarded as
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if `shop_id` is empty.
    /// Returns [`RestError::Serialization`] if `order` cannot be serialized.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let order = serde_json::json!({
    ///     "external_id": "2750e210-39bb-11e9-a503-452618153e4a",
    ///     "line_items": [{"product_id": "5bfd0b66a342bcc9b5563216", "variant_id": 17887, "quantity": 1}],
    ///     "address_to": {"first_name": "John", "last_name": "Smith", "country": "US"}
    /// });
    /// let body = client.create_order("123", &order).await?;
    /// ```
    pub async fn create_order<B>(&self, shop_id: &str, order: &B) -> Result<String, RestError>
    where
        B: Serialize + ?Sized,
    {
        self.call_with_body(
            ORDER,
            ORDER_PATHS,
            ResourceOperation::Create,
            &[("shop_id", shop_id)],
            order,
        )
        .await
    }

    /// Registers a pull-orders feed for a shop.
    ///
    /// Sends `POST /v1/shops/{shop_id}/orders-pull-feed.json` with an
    /// [`OrdersPullFeed`] body. `headers` is passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if `shop_id` is empty.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn submit_pull_orders_feed(
        &self,
        shop_id: &str,
        url: &str,
        username: &str,
        password: &str,
        headers: &[serde_json::Value],
    ) -> Result<String, RestError> {
        let feed = OrdersPullFeed::new(url, username, password, headers);
        self.call_with_body(
            ORDERS_PULL_FEED,
            ORDERS_PULL_FEED_PATHS,
            ResourceOperation::Create,
            &[("shop_id", shop_id)],
            &feed,
        )
        .await
    }
}
