//! Order port.

use async_trait::async_trait;

use vitrine_core::types::{OrderDraft, OrderReceipt, OrderSummary};

use crate::error::PortResult;

/// Order placement and history, scoped to one customer.
///
/// `customer_id` is whatever the auth context reports: a user id for a
/// signed-in shopper, a session id for a guest. The port treats it as an
/// opaque partition key.
#[async_trait]
pub trait OrderPort: Send + Sync {
    /// Places an order from a finished checkout.
    ///
    /// The draft carries the snapshot lines and the totals the shopper
    /// confirmed. Implementations verify the arithmetic and reject drafts
    /// that do not add up.
    ///
    /// ## Returns
    /// The receipt with the assigned order number.
    async fn place_order(&self, customer_id: &str, draft: &OrderDraft) -> PortResult<OrderReceipt>;

    /// Pages through the customer's orders, newest first.
    async fn fetch_orders(
        &self,
        customer_id: &str,
        limit: u32,
        offset: u32,
    ) -> PortResult<Vec<OrderSummary>>;

    /// Fetches one order by number.
    ///
    /// ## Returns
    /// `Ok(None)` when the number is unknown or belongs to someone else.
    async fn fetch_order(
        &self,
        customer_id: &str,
        order_number: &str,
    ) -> PortResult<Option<OrderSummary>>;
}
