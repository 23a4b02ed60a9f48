//! Product endpoints.

use serde::Serialize;

use crate::clients::{PrintifyClient, RestError};
use crate::rest::{ResourceOperation, ResourcePath};

const PRODUCT: &str = "Product";

/// Paths for products of a shop.
pub const PRODUCT_PATHS: &[ResourcePath] = &[
    ResourcePath::new(
        ResourceOperation::All,
        &["shop_id"],
        "shops/{shop_id}/products.json",
    ),
    ResourcePath::new(
        ResourceOperation::Find,
        &["shop_id", "product_id"],
        "shops/{shop_id}/products/{product_id}.json",
    ),
    ResourcePath::new(
        ResourceOperation::Create,
        &["shop_id"],
        "shops/{shop_id}/products.json",
    ),
    ResourcePath::new(
        ResourceOperation::Update,
        &["shop_id", "product_id"],
        "shops/{shop_id}/products/{product_id}.json",
    ),
    ResourcePath::new(
        ResourceOperation::Delete,
        &["shop_id", "product_id"],
        "shops/{shop_id}/products/{product_id}.json",
    ),
];

impl PrintifyClient {
    /// Lists the products of a shop.
    ///
    /// Sends `GET /v1/shops/{shop_id}/products.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if `shop_id` is empty.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn get_products(&self, shop_id: &str) -> Result<String, RestError> {
        self.call(
            PRODUCT,
            PRODUCT_PATHS,
            ResourceOperation::All,
            &[("shop_id", shop_id)],
        )
        .await
    }

    /// Fetches a single product.
    ///
    /// Sends `GET /v1/shops/{shop_id}/products/{product_id}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if an identifier is empty.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn get_product_by_id(
        &self,
        shop_id: &str,
        product_id: &str,
    ) -> Result<String, RestError> {
        self.call(
            PRODUCT,
            PRODUCT_PATHS,
            ResourceOperation::Find,
            &[("shop_id", shop_id), ("product_id", product_id)],
        )
        .await
    }

    /// Creates a product.
    ///
    /// Sends `POST /v1/shops/{shop_id}/products.json` with `product` as the body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if `shop_id` is empty.
    /// Returns [`RestError::Serialization`] if `product` cannot be serialized.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = client
    ///     .create_product("123", &serde_json::json!({"title": "Mug"}))
    ///     .await?;
    /// ```
    pub async fn create_product<B>(&self, shop_id: &str, product: &B) -> Result<String, RestError>
    where
        B: Serialize + ?Sized,
    {
        self.call_with_body(
            PRODUCT,
            PRODUCT_PATHS,
            ResourceOperation::Create,
            &[("shop_id", shop_id)],
            product,
        )
        .await
    }

    /// Updates a product.
    ///
    /// Sends `PUT /v1/shops/{shop_id}/products/{product_id}.json` with
    /// `product` as the body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if an identifier is empty.
    /// Returns [`RestError::Serialization`] if `product` cannot be serialized.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn update_product<B>(
        &self,
        shop_id: &str,
        product_id: &str,
        product: &B,
    ) -> Result<String, RestError>
    where
        B: Serialize + ?Sized,
    {
        self.call_with_body(
            PRODUCT,
            PRODUCT_PATHS,
            ResourceOperation::Update,
            &[("shop_id", shop_id), ("product_id", product_id)],
            product,
        )
        .await
    }

    /// Deletes a product.
    ///
    /// Sends `DELETE /v1/shops/{shop_id}/products/{product_id}.json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyIdentifier`] if an identifier is empty.
    /// Returns [`RestError::Http`] for transport failures and non-2xx responses.
    pub async fn delete_product(
        &self,
        shop_id: &str,
        product_id: &str,
    ) -> Result<String, RestError> {
        self.call(
            PRODUCT,
            PRODUCT_PATHS,
            ResourceOperation::Delete,
            &[("shop_id", shop_id), ("product_id", product_id)],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::rest::resources::resolve_path;
    use std::collections::HashMap;

    #[test]
    fn test_product_paths_for_every_operation() {
        let ids = [("shop_id", "1"), ("product_id", "p9")];
        let cases = [
            (ResourceOperation::All, HttpMethod::Get, "shops/1/products.json"),
            (ResourceOperation::Find, HttpMethod::Get, "shops/1/products/p9.json"),
            (ResourceOperation::Create, HttpMethod::Post, "shops/1/products.json"),
            (ResourceOperation::Update, HttpMethod::Put, "shops/1/products/p9.json"),
            (ResourceOperation::Delete, HttpMethod::Delete, "shops/1/products/p9.json"),
        ];

        for (operation, expected_method, expected_path) in cases {
            let (method, path) = resolve_path(PRODUCT, PRODUCT_PATHS, operation, &ids).unwrap();
            assert_eq!(method, expected_method, "{}", operation.as_str());
            assert_eq!(path, expected_path, "{}", operation.as_str());
        }
    }

    #[tokio::test]
    async fn test_create_product_surfaces_serialization_error_before_sending() {
        let client = PrintifyClient::new("token").unwrap();

        // JSON object keys must be strings
        let mut product = HashMap::new();
        product.insert((1, 2), "not representable");

        let result = client.create_product("1", &product).await;

        assert!(matches!(result, Err(RestError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_delete_product_rejects_empty_shop_id() {
        let client = PrintifyClient::new("token").unwrap();

        let result = client.delete_product("", "p1").await;

        assert!(matches!(
            result,
            Err(RestError::EmptyIdentifier { name: "shop_id" })
        ));
    }
}
