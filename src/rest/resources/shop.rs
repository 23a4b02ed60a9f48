//! Shop endpoints.
//!
//! A shop is a seller's storefront. Shops are listed account-wide; a shop's
//! connection to an external sales channel is created and updated through
//! `shops/{shop_id}/connection.json`.

use crate::clients::{PrintifyClient, RestError};
use crate::rest::payloads::ShopConnection;
use crate::rest::{ResourceOperation, ResourcePath};

const SHOP: &str = "Shop";
const SHOP_CONNECTION: &str = "ShopConnection";

/// Paths for the shop collection.
pub const SHOP_PATHS: &[ResourcePath] =
    &[ResourcePath::new(ResourceOperation::All, &[], "shops.json")];

/// Paths for a shop's external connection.
pub const SHOP_CONNECTION_PATHS: &[ResourcePath] = &[
    ResourcePath::new(
        ResourceOperation::Create,
        &["shop_id"],
        "shops/{shop_id}/connection.json",
    ),
    ResourcePath::new(
        ResourceOperation::Update,
        &["shop_id"],
        "shops/{shop_id}/connection.json",
    ),
];

impl PrintifyClient {
    /// Lists the shops of the authenticated account.
    ///
    /// Sends `GET /v1/shops.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn get_shops(&self) -> Result<String, RestError> {
        self.call(SHOP, SHOP_PATHS, ResourceOperation::All, &[])
            .await
    }

    /// Connects a shop to an external sales channel.
    ///
    /// Sends `POST /v1/shops/{shop_id}/connection.json` with a
    /// [`ShopConnection`] body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if `shop_id` is empty.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = client.connect_shop("s1", "ext1", true, "MyShop").await?;
    /// ```
    pub async fn connect_shop(
        &self,
        shop_id: &str,
        external_shop_id: &str,
        enabled: bool,
        external_name: &str,
    ) -> Result<String, RestError> {
        let connection = ShopConnection::new(external_shop_id, enabled, external_name);
        self.call_with_body(
            SHOP_CONNECTION,
            SHOP_CONNECTION_PATHS,
            ResourceOperation::Create,
            &[("shop_id", shop_id)],
            &connection,
        )
        .await
    }

    /// Updates a shop's connection to an external sales channel.
    ///
    /// Sends `PUT /v1/shops/{shop_id}/connection.json` with the same body
    /// shape as [`connect_shop`](Self::connect_shop).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if `shop_id` is empty.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn update_shop(
        &self,
        shop_id: &str,
        external_shop_id: &str,
        enabled: bool,
        external_name: &str,
    ) -> Result<String, RestError> {
        let connection = ShopConnection::new(external_shop_id, enabled, external_name);
        self.call_with_body(
            SHOP_CONNECTION,
            SHOP_CONNECTION_PATHS,
            ResourceOperation::Update,
            &[("shop_id", shop_id)],
            &connection,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::rest::resources::resolve_path;

    #[test]
    fn test_list_shops_path() {
        let (method, path) = resolve_path(SHOP, SHOP_PATHS, ResourceOperation::All, &[]).unwrap();

        assert_eq!(method, HttpMethod::Get);
        assert_eq!(path, "shops.json");
    }

    #[test]
    fn test_connection_paths_share_template_with_different_methods() {
        let ids = [("shop_id", "s1")];

        let (method, path) = resolve_path(
            SHOP_CONNECTION,
            SHOP_CONNECTION_PATHS,
            ResourceOperation::Create,
            &ids,
        )
        .unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, "shops/s1/connection.json");

        let (method, path) = resolve_path(
            SHOP_CONNECTION,
            SHOP_CONNECTION_PATHS,
            ResourceOperation::Update,
            &ids,
        )
        .unwrap();
        assert_eq!(method, HttpMethod::Put);
        assert_eq!(path, "shops/s1/connection.json");
    }

    #[tokio::test]
    async fn test_connect_shop_rejects_empty_shop_id_before_sending() {
        let client = PrintifyClient::new("token").unwrap();

        let result = client.connect_shop("", "ext1", true, "MyShop").await;

        assert!(matches!(
            result,
            Err(RestError::EmptyIdentifier { name: "shop_id" })
        ));
    }
}
