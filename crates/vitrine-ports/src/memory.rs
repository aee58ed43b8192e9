//! In-memory port adapters.
//!
//! These back the walkthrough binary and stand in for a real backend in
//! the client test suite. Both adapters carry an offline toggle so tests
//! can exercise the unavailable path without any network machinery.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use vitrine_core::types::{
    CatalogProduct, OrderDraft, OrderReceipt, OrderStatus, OrderSummary,
};

use crate::catalog::CatalogPort;
use crate::error::{PortError, PortResult};
use crate::order::OrderPort;

// =============================================================================
// Catalog
// =============================================================================

/// Catalog adapter over a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<String, CatalogProduct>>,
    offline: AtomicBool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one product. Reseeding an id replaces it.
    pub fn with_product(mut self, product: CatalogProduct) -> Self {
        self.products
            .get_mut()
            .insert(product.id.clone(), product);
        self
    }

    /// The demo catalog the walkthrough binary browses.
    ///
    /// Includes one sold-out product and one inactive product so every
    /// fulfillment branch is reachable from seeded data.
    pub fn with_demo_catalog() -> Self {
        let seed = [
            ("prod-1001", "Aurora Mechanical Keyboard", "/images/keyboard.png", 29999, 24, true),
            ("prod-1002", "Atlas USB-C Hub", "/images/hub.png", 19999, 40, true),
            ("prod-1003", "Nimbus Wireless Mouse", "/images/mouse.png", 4999, 120, true),
            ("prod-1004", "Solace Laptop Stand", "/images/stand.png", 8900, 0, true),
            ("prod-1005", "Helios 4K Webcam", "/images/webcam.png", 15900, 8, true),
            ("prod-1006", "Drift Mousepad", "/images/mousepad.png", 1500, 33, false),
        ];

        let mut catalog = Self::new();
        for (id, title, image, price_cents, stock, is_active) in seed {
            catalog = catalog.with_product(CatalogProduct {
                id: id.to_string(),
                title: title.to_string(),
                image: image.to_string(),
                price_cents,
                stock,
                is_active,
            });
        }
        catalog
    }

    /// Simulates losing the backend. Every call fails until turned back on.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> PortResult<()> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(PortError::Unavailable("catalog offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogPort for InMemoryCatalog {
    async fn fetch_product(&self, product_id: &str) -> PortResult<Option<CatalogProduct>> {
        self.ensure_online()?;
        let products = self.products.read().await;
        Ok(products.get(product_id).cloned())
    }

    async fn list_products(&self) -> PortResult<Vec<CatalogProduct>> {
        self.ensure_online()?;
        let products = self.products.read().await;
        let mut listing: Vec<CatalogProduct> = products.values().cloned().collect();
        // HashMap order is arbitrary; the storefront wants a stable listing
        listing.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(listing)
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Order book adapter, partitioned by customer id.
///
/// Each customer's orders are kept newest first.
#[derive(Debug, Default)]
pub struct InMemoryOrders {
    orders: RwLock<HashMap<String, Vec<OrderSummary>>>,
    offline: AtomicBool,
}

impl InMemoryOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates losing the backend. Every call fails until turned back on.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> PortResult<()> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(PortError::Unavailable("order service offline".to_string()));
        }
        Ok(())
    }

    /// Order numbers look like `ORD20260822A1B2C3D4`: a date part for
    /// humans, a random part for uniqueness.
    fn next_order_number() -> String {
        let date = Utc::now().format("%Y%m%d");
        let suffix = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
        format!("ORD{}{}", date, suffix)
    }
}

#[async_trait]
impl OrderPort for InMemoryOrders {
    async fn place_order(&self, customer_id: &str, draft: &OrderDraft) -> PortResult<OrderReceipt> {
        self.ensure_online()?;

        // The backend re-checks the arithmetic; a client is free to send
        // any numbers it likes.
        if draft.items.is_empty() {
            return Err(PortError::Rejected {
                reason: "order has no items".to_string(),
            });
        }
        if !draft.totals_add_up() {
            return Err(PortError::Rejected {
                reason: "order totals do not add up".to_string(),
            });
        }

        let receipt = OrderReceipt {
            order_number: Self::next_order_number(),
            total_cents: draft.total_cents,
            placed_at: Utc::now(),
        };

        let summary = OrderSummary {
            order_number: receipt.order_number.clone(),
            status: OrderStatus::Paid,
            total_cents: draft.total_cents,
            item_count: draft.items.len(),
            placed_at: receipt.placed_at,
        };

        let mut orders = self.orders.write().await;
        orders
            .entry(customer_id.to_string())
            .or_default()
            .insert(0, summary);

        info!(
            order_number = %receipt.order_number,
            total_cents = draft.total_cents,
            "order placed"
        );
        Ok(receipt)
    }

    async fn fetch_orders(
        &self,
        customer_id: &str,
        limit: u32,
        offset: u32,
    ) -> PortResult<Vec<OrderSummary>> {
        self.ensure_online()?;
        let orders = self.orders.read().await;
        let page = orders
            .get(customer_id)
            .map(|history| {
                history
                    .iter()
                    .skip(offset as usize)
                    .take(limit as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(page)
    }

    async fn fetch_order(
        &self,
        customer_id: &str,
        order_number: &str,
    ) -> PortResult<Option<OrderSummary>> {
        self.ensure_online()?;
        let orders = self.orders.read().await;
        let found = orders
            .get(customer_id)
            .and_then(|history| history.iter().find(|o| o.order_number == order_number))
            .cloned();
        Ok(found)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::cart::LineItem;

    fn draft() -> OrderDraft {
        let items = vec![
            LineItem::new("1", "prod-1001", "Keyboard", "/images/keyboard.png", 29999, 2),
            LineItem::new("2", "prod-1002", "Hub", "/images/hub.png", 19999, 1),
        ];
        let subtotal: i64 = items.iter().map(|i| i.line_total_cents()).sum();
        OrderDraft {
            items,
            subtotal_cents: subtotal,
            shipping_fee_cents: 0,
            discount_cents: 0,
            total_cents: subtotal,
            shipping_address: None,
        }
    }

    #[tokio::test]
    async fn test_unknown_product_is_none_not_error() {
        let catalog = InMemoryCatalog::with_demo_catalog();
        let found = catalog.fetch_product("prod-9999").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_offline_catalog_is_unavailable() {
        let catalog = InMemoryCatalog::with_demo_catalog();
        catalog.set_offline(true);

        let err = catalog.fetch_product("prod-1001").await.unwrap_err();
        assert!(matches!(err, PortError::Unavailable(_)));

        catalog.set_offline(false);
        assert!(catalog.fetch_product("prod-1001").await.is_ok());
    }

    #[tokio::test]
    async fn test_listing_is_sorted_by_id() {
        let catalog = InMemoryCatalog::with_demo_catalog();
        let listing = catalog.list_products().await.unwrap();
        assert_eq!(listing.len(), 6);
        let ids: Vec<&str> = listing.iter().map(|p| p.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_place_order_assigns_number_and_paid_status() {
        let orders = InMemoryOrders::new();
        let receipt = orders.place_order("user-1", &draft()).await.unwrap();

        assert!(receipt.order_number.starts_with("ORD"));
        assert_eq!(receipt.order_number.len(), 19);
        assert_eq!(receipt.total_cents, 79997);

        let summary = orders
            .fetch_order("user-1", &receipt.order_number)
            .await
            .unwrap()
            .expect("order exists for its owner");
        assert_eq!(summary.status, OrderStatus::Paid);
        assert_eq!(summary.item_count, 2);
    }

    #[tokio::test]
    async fn test_rejects_draft_with_broken_totals() {
        let orders = InMemoryOrders::new();
        let mut bad = draft();
        bad.total_cents += 1;

        let err = orders.place_order("user-1", &bad).await.unwrap_err();
        assert!(matches!(err, PortError::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_rejects_empty_draft() {
        let orders = InMemoryOrders::new();
        let mut empty = draft();
        empty.items.clear();
        empty.subtotal_cents = 0;
        empty.total_cents = 0;

        let err = orders.place_order("user-1", &empty).await.unwrap_err();
        assert!(matches!(err, PortError::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_history_is_newest_first_with_paging() {
        let orders = InMemoryOrders::new();
        let first = orders.place_order("user-1", &draft()).await.unwrap();
        let second = orders.place_order("user-1", &draft()).await.unwrap();
        let third = orders.place_order("user-1", &draft()).await.unwrap();

        let page = orders.fetch_orders("user-1", 2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].order_number, third.order_number);
        assert_eq!(page[1].order_number, second.order_number);

        let rest = orders.fetch_orders("user-1", 2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].order_number, first.order_number);
    }

    #[tokio::test]
    async fn test_orders_are_scoped_to_customer() {
        let orders = InMemoryOrders::new();
        let receipt = orders.place_order("user-1", &draft()).await.unwrap();

        assert!(orders.fetch_orders("user-2", 20, 0).await.unwrap().is_empty());
        let cross = orders
            .fetch_order("user-2", &receipt.order_number)
            .await
            .unwrap();
        assert!(cross.is_none());
    }
}
