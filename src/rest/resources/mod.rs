//! Printify API resources.
//!
//! Each submodule declares the path table of one area of the API and the
//! [`PrintifyClient`] methods built on it:
//!
//! | Module | Methods |
//! |---|---|
//! | `shop` | `get_shops`, `connect_shop`, `update_shop` |
//! | `order` | `get_orders`, `get_order_by_id`, `create_order`, `submit_pull_orders_feed` |
//! | `product` | `get_products`, `get_product_by_id`, `create_product`, `update_product`, `delete_product` |
//!
//! All methods return the raw response body. Identifiers are inserted into
//! the path verbatim and must be non-empty; bodies are serialized before any
//! request is sent.

mod order;
mod product;
mod shop;

pub use order::{ORDERS_PULL_FEED_PATHS, ORDER_PATHS};
pub use product::PRODUCT_PATHS;
pub use shop::{SHOP_CONNECTION_PATHS, SHOP_PATHS};

use serde::Serialize;

use crate::clients::{HttpMethod, PrintifyClient, RestError};
use crate::rest::{build_path, get_path, ResourceOperation, ResourcePath};

/// Resolves the method and filled-in path for an operation on a resource.
///
/// # Errors
///
/// Returns [`RestError::PathResolutionFailed`] if the table has no entry for
/// the operation and IDs, or an identifier error from [`build_path`].
pub(crate) fn resolve_path(
    resource: &'static str,
    paths: &[ResourcePath],
    operation: ResourceOperation,
    ids: &[(&'static str, &str)],
) -> Result<(HttpMethod, String), RestError> {
    let available_ids: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();

    let path = get_path(paths, operation, &available_ids).ok_or(
        RestError::PathResolutionFailed {
            resource,
            operation: operation.as_str(),
        },
    )?;

    Ok((path.http_method(), build_path(path.template, ids)?))
}

impl PrintifyClient {
    /// Performs a body-less operation from a resource path table.
    pub(crate) async fn call(
        &self,
        resource: &'static str,
        paths: &[ResourcePath],
        operation: ResourceOperation,
        ids: &[(&'static str, &str)],
    ) -> Result<String, RestError> {
        let (method, path) = resolve_path(resource, paths, operation, ids)?;
        self.send(method, &path, None).await
    }

    /// Performs an operation from a resource path table with a JSON body.
    pub(crate) async fn call_with_body<B>(
        &self,
        resource: &'static str,
        paths: &[ResourcePath],
        operation: ResourceOperation,
        ids: &[(&'static str, &str)],
        body: &B,
    ) -> Result<String, RestError>
    where
        B: Serialize + ?Sized,
    {
        let (method, path) = resolve_path(resource, paths, operation, ids)?;
        let body = serde_json::to_string(body)?;
        self.send(method, &path, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_reports_unsupported_operation() {
        let result = resolve_path("Shop", SHOP_PATHS, ResourceOperation::Delete, &[]);

        assert!(matches!(
            result,
            Err(RestError::PathResolutionFailed {
                resource: "Shop",
                operation: "delete"
            })
        ));
    }

    #[test]
    fn test_resolve_path_rejects_empty_identifier() {
        let result = resolve_path(
            "Product",
            PRODUCT_PATHS,
            ResourceOperation::Find,
            &[("shop_id", "1"), ("product_id", "")],
        );

        assert!(matches!(
            result,
            Err(RestError::EmptyIdentifier { name: "product_id" })
        ));
    }
}
