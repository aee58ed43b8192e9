//! # Product Commands
//!
//! Catalog browsing for the storefront grid and the product detail page.

use tracing::debug;

use vitrine_core::types::CatalogProduct;

use crate::error::ApiError;
use crate::storefront::Storefront;

impl Storefront {
    /// Lists the products the storefront grid shows.
    ///
    /// Inactive products are filtered out here; they remain reachable by
    /// id for old deep links.
    pub async fn browse_products(&self) -> Result<Vec<CatalogProduct>, ApiError> {
        debug!("browse_products command");

        let listing = self.catalog.list_products().await?;
        Ok(listing.into_iter().filter(|p| p.is_active).collect())
    }

    /// Fetches one product for the detail page.
    pub async fn get_product(&self, product_id: &str) -> Result<CatalogProduct, ApiError> {
        debug!(product_id = %product_id, "get_product command");

        self.catalog
            .fetch_product(product_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Product", product_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
