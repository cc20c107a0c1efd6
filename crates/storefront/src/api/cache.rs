//! Cache value types for the catalog cache.

use std::sync::Arc;

use super::types::{Category, Product};

/// Values stored in the catalog cache.
///
/// Wrapped in `Arc` so cache hits clone a pointer, not the catalog.
#[derive(Clone)]
pub(super) enum CacheValue {
    Products(Arc<Vec<Product>>),
    Categories(Arc<Vec<Category>>),
}
