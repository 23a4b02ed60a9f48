//! Path building infrastructure for Printify REST resources.
//!
//! Each resource declares a table of [`ResourcePath`]s, one per operation it
//! supports. [`get_path`] picks the entry for an operation and
//! [`build_path`] fills the template's `{name}` placeholders.
//!
//! # Example
//!
//! ```rust
//! use printify_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//!
//! const PATHS: &[ResourcePath] = &[ResourcePath::new(
//!     ResourceOperation::Find,
//!     &["shop_id", "order_id"],
//!     "shops/{shop_id}/orders/{order_id}.json",
//! )];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["shop_id", "order_id"]).unwrap();
//! let url = build_path(path.template, &[("shop_id", "123"), ("order_id", "abc")]).unwrap();
//! assert_eq!(url, "shops/123/orders/abc.json");
//! ```

use crate::clients::{HttpMethod, RestError};

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID.
    Find,
    /// List all resources.
    All,
    /// Create a new resource.
    Create,
    /// Update an existing resource.
    Update,
    /// Delete a resource.
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method this operation is sent with.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates are relative to the API base path and use `{name}` placeholders,
/// e.g. `shops/{shop_id}/products/{product_id}.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["shop_id", "product_id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so resource tables can be declared as constants.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            ids,
            template,
        }
    }

    /// Returns the HTTP method for this path, implied by its operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        self.operation.http_method()
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose required IDs are all available, the
/// one requiring the most IDs wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a path from a template by interpolating IDs.
///
/// The template is scanned once, left to right. Values are inserted verbatim
/// and never scanned again, so an ID that itself contains `{...}` comes out
/// unchanged. A `{` without a closing `}` is kept as literal text.
///
/// # Errors
///
/// Returns [`RestError::MissingIdentifier`] if a placeholder has no value and
/// [`RestError::EmptyIdentifier`] if its value is empty.
///
/// # Example
///
/// ```rust
/// use printify_api::rest::build_path;
///
/// let url = build_path(
///     "shops/{shop_id}/products/{product_id}.json",
///     &[("shop_id", "1"), ("product_id", "{shop_id}")],
/// )
/// .unwrap();
/// assert_eq!(url, "shops/1/products/{shop_id}.json");
/// ```
pub fn build_path(template: &str, ids: &[(&'static str, &str)]) -> Result<String, RestError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return Ok(result);
        };

        let name = &after[..end];
        let (key, value) = ids
            .iter()
            .find(|(key, _)| *key == name)
            .ok_or_else(|| RestError::MissingIdentifier {
                name: name.to_string(),
            })?;

        if value.is_empty() {
            return Err(RestError::EmptyIdentifier { name: *key });
        }

        result.push_str(value);
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
