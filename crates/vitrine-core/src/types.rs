//! # Domain Types
//!
//! Core domain types for the Vitrine storefront.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Domain Type Flow                                   │
//! │                                                                         │
//! │  CatalogProduct ──add to cart──► LineItem (cart.rs)                     │
//! │        │                             │                                  │
//! │        │ browse views                │ checkout snapshot                │
//! │        ▼                             ▼                                  │
//! │   Catalog UI                    OrderDraft ──place order──► OrderReceipt│
//! │                                                                  │      │
//! │                                   order history ◄── OrderSummary ┘      │
//! │                                                                         │
//! │  ShippingAddress: parsed from the validated shipping form (forms.rs)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types here are plain data: construction and field access only.
//! Behavior lives in [`crate::cart`] and [`crate::checkout`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::LineItem;
use crate::money::Money;

// =============================================================================
// Catalog Product
// =============================================================================

/// A product as served by the catalog service.
///
/// The storefront trusts these values as given; it never edits catalog data.
/// When a product is added to the cart its display fields and price are
/// frozen into a [`LineItem`], so later catalog updates do not rewrite carts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogProduct {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display title shown in catalog and cart views.
    pub title: String,

    /// Image URI, treated as an opaque string.
    pub image: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units currently available for sale.
    pub stock: i64,

    /// Whether the product is purchasable (soft delete / delisted).
    pub is_active: bool,
}

impl CatalogProduct {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the requested quantity can be fulfilled from stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        self.is_active && self.stock >= quantity
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a placed order, as shown in the order-history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created, payment not yet settled.
    Pending,
    /// Payment settled; order awaiting fulfilment.
    Paid,
    /// Order handed to the carrier.
    Shipped,
    /// Order delivered and closed.
    Completed,
    /// Order cancelled before fulfilment.
    Cancelled,
}

impl OrderStatus {
    /// Whether the order can still move to another status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Shipping Address
// =============================================================================

/// A delivery address captured by the shipping form.
///
/// Constructed only from a form payload that already passed the
/// `shipping_address` schema (see [`crate::forms`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingAddress {
    pub full_name: String,
    pub phone: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
}

// =============================================================================
// Order Draft
// =============================================================================

/// The finalized purchase a checkout submits to the order service.
///
/// Totals are carried explicitly so the receiving side can verify that
/// `subtotal + shipping - discount = total` before accepting the order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderDraft {
    /// Snapshot of the purchased line items (taken at checkout entry).
    pub items: Vec<LineItem>,

    /// Sum of line totals over the snapshot.
    pub subtotal_cents: i64,

    /// Shipping fee applied at checkout.
    pub shipping_fee_cents: i64,

    /// Absolute discount applied at checkout.
    pub discount_cents: i64,

    /// Amount charged: subtotal + shipping - discount, floored at zero.
    pub total_cents: i64,

    /// Delivery address, when the shipping form was submitted.
    pub shipping_address: Option<ShippingAddress>,
}

impl OrderDraft {
    /// Total units across all snapshot lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity()).sum()
    }

    /// Checks the internal consistency of the carried totals.
    pub fn totals_add_up(&self) -> bool {
        let computed: i64 = self.items.iter().map(|i| i.line_total_cents()).sum();
        self.subtotal_cents == computed
            && self.total_cents
                == Money::from_cents(
                    self.subtotal_cents + self.shipping_fee_cents - self.discount_cents,
                )
                .floor_at_zero()
                .cents()
    }
}

// =============================================================================
// Order Receipt
// =============================================================================

/// Returned by the order service when an order is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderReceipt {
    /// Platform order number, e.g. `ORD20260822A1B2C3D4`.
    pub order_number: String,

    /// Amount charged in cents.
    pub total_cents: i64,

    /// When the order was accepted.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Order Summary
// =============================================================================

/// One row of the order-history view.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    /// Platform order number.
    pub order_number: String,

    /// Current status of the order.
    pub status: OrderStatus,

    /// Amount charged in cents.
    pub total_cents: i64,

    /// Number of distinct line items in the order.
    pub item_count: usize,

    /// When the order was accepted.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64, is_active: bool) -> CatalogProduct {
        CatalogProduct {
            id: "p1".to_string(),
            title: "Mechanical Keyboard".to_string(),
            image: "/img/kb.png".to_string(),
            price_cents: 29999,
            stock,
            is_active,
        }
    }

    #[test]
    fn test_can_fulfill() {
        assert!(product(5, true).can_fulfill(5));
        assert!(!product(5, true).can_fulfill(6));
        assert!(!product(5, false).can_fulfill(1));
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Paid.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_order_draft_totals_add_up() {
        let items = vec![
            LineItem::new("l1", "p1", "Keyboard", "/img/kb.png", 29999, 2),
            LineItem::new("l2", "p2", "Hub", "/img/hub.png", 19999, 1),
        ];
        let draft = OrderDraft {
            items,
            subtotal_cents: 79997,
            shipping_fee_cents: 0,
            discount_cents: 0,
            total_cents: 79997,
            shipping_address: None,
        };
        assert!(draft.totals_add_up());
        assert_eq!(draft.total_quantity(), 3);

        let mut broken = draft.clone();
        broken.total_cents = 80000;
        assert!(!broken.totals_add_up());
    }
}
