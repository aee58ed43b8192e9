//! Catalog port.

use async_trait::async_trait;

use vitrine_core::types::CatalogProduct;

use crate::error::PortResult;

/// Read access to the product catalog.
///
/// The client consults this port before any cart mutation that references
/// a product, so stale UI state never becomes a cart line.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetches a single product.
    ///
    /// ## Returns
    /// `Ok(None)` when the product id is unknown. Unknown is a normal
    /// answer, not a failure.
    async fn fetch_product(&self, product_id: &str) -> PortResult<Option<CatalogProduct>>;

    /// Lists every product the catalog currently carries, including
    /// inactive ones. Callers filter for their surface.
    async fn list_products(&self) -> PortResult<Vec<CatalogProduct>>;
}
