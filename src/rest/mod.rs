//! REST resource infrastructure for the Printify API.
//!
//! This module provides:
//!
//! - **Path building**: [`ResourcePath`] tables, [`get_path`] and [`build_path`]
//! - **Request bodies**: fixed-shape payloads such as [`ShopConnection`] and
//!   [`OrdersPullFeed`]
//! - **[`resources`]**: the shop, order and product operations of
//!   [`PrintifyClient`](crate::PrintifyClient)
//!
//! # Example
//!
//! ```rust,ignore
//! use printify_api::PrintifyClient;
//!
//! let client = PrintifyClient::new("personal-access-token")?;
//!
//! client.connect_shop("123", "ext-1", true, "My Store").await?;
//! let product = client.get_product_by_id("123", "5d39b159e7c48c000728c89f").await?;
//! client.delete_product("123", "5d39b159e7c48c000728c89f").await?;
//! ```

mod path;
mod payloads;

pub mod resources;

pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use payloads::{BasicAuth, ExternalStatus, FeedAuth, OrdersPullFeed, ShopConnection};
