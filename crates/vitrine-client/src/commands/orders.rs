//! # Order Commands
//!
//! Storefront commands for the shopper's order history. Both commands are
//! scoped to the session's customer id; one shopper can never page through
//! another's orders.

use tracing::debug;

use vitrine_core::types::OrderSummary;

use crate::error::ApiError;
use crate::storefront::Storefront;

impl Storefront {
    /// Pages through this shopper's orders, newest first.
    ///
    /// ## Arguments
    /// * `limit` - Page size (default: 20)
    /// * `offset` - Orders to skip (default: 0)
    pub async fn order_history(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<OrderSummary>, ApiError> {
        let limit = limit.unwrap_or(20);
        let offset = offset.unwrap_or(0);
        debug!(limit = %limit, offset = %offset, "order_history command");

        let history = self
            .orders
            .fetch_orders(self.auth.customer_id(), limit, offset)
            .await?;
        Ok(history)
    }

    /// Fetches one of this shopper's orders by number.
    pub async fn get_order(&self, order_number: &str) -> Result<OrderSummary, ApiError> {
        debug!(order_number = %order_number, "get_order command");

        self.orders
            .fetch_order(self.auth.customer_id(), order_number)
            .await?
            .ok_or_else(|| ApiError::not_found("Order", order_number))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use vitrine_core::cart::LineItem;
    use vitrine_core::types::{OrderDraft, OrderStatus};
    use vitrine_ports::{InMemoryCatalog, InMemoryOrders, OrderPort, RecordingNotifier};

    use crate::error::ErrorCode;
    use crate::state::AuthContext;

    fn storefront() -> (Storefront, Arc<InMemoryOrders>) {
        let orders = Arc::new(InMemoryOrders::new());
        let shop = Storefront::new(
            AuthContext::guest(),
            Arc::new(InMemoryCatalog::with_demo_catalog()),
            orders.clone(),
            Arc::new(RecordingNotifier::new()),
        );
        (shop, orders)
    }

    fn draft() -> OrderDraft {
        let items = vec![LineItem::new(
            "1", "prod-1003", "Nimbus Wireless Mouse", "/images/mouse.png", 4999, 1,
        )];
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
    async fn test_order_history_pages_newest_first() {
        let (shop, orders) = storefront();
        let customer = shop.auth().customer_id().to_string();
        let first = orders.place_order(&customer, &draft()).await.unwrap();
        let second = orders.place_order(&customer, &draft()).await.unwrap();

        let history = shop.order_history(None, None).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].order_number, second.order_number);

        let page = shop.order_history(Some(1), Some(1)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].order_number, first.order_number);
    }

    #[tokio::test]
    async fn test_get_order_unknown_is_not_found() {
        let (shop, _) = storefront();
        let err = shop.get_order("ORD20260101DEADBEEF").await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));
    }

    #[tokio::test]
    async fn test_history_reflects_a_finished_checkout() {
        let (shop, _) = storefront();
        shop.add_to_cart("prod-1001", Some(2)).await.unwrap();
        shop.begin_checkout().unwrap();
        shop.checkout_next().unwrap();
        shop.submit_shipping_address(&json!({
            "full_name": "Ada Lovelace",
            "phone": "+44 20 7946 0999",
            "line1": "12 Analytical Way",
            "city": "London",
            "postal_code": "EC1A 1BB",
        }))
        .unwrap();
        shop.checkout_next().unwrap();
        let receipt = shop
            .confirm_payment(&json!({
                "card_number": "4242424242424242",
                "expiry": "12/29",
                "cvc": "123",
                "cardholder": "Ada Lovelace",
            }))
            .await
            .unwrap();

        let order = shop.get_order(&receipt.order_number).await.unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.total_cents, 59998);
        assert_eq!(order.item_count, 1);

        let history = shop.order_history(None, None).await.unwrap();
        assert_eq!(history.len(), 1);
    }
}
