//! # Cart Commands
//!
//! Storefront commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │ Browsing │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │          │     │          │     │  Wizard  │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       begin_checkout                     │
//! │                   update_cart_item  (checkout.rs)                      │
//! │                   remove_from_cart                                      │
//! │                   set_item_selected                                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use vitrine_core::cart::{Cart, LineItem};
use vitrine_core::error::CoreError;
use vitrine_core::validation;
use vitrine_ports::Toast;

use crate::error::ApiError;
use crate::state::CartTotals;
use crate::storefront::Storefront;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

impl Storefront {
    /// Gets the current cart contents.
    ///
    /// ## User Workflow
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  Cart Page                                                              │
    /// │                                                                         │
    /// │  ┌────────────────────────────────────────────────────────────────┐    │
    /// │  │  CART                                    2 items, 1 selected   │    │
    /// │  ├────────────────────────────────────────────────────────────────┤    │
    /// │  │  [x] Aurora Mechanical Keyboard   x2             $599.98       │    │
    /// │  │  [ ] Atlas USB-C Hub              x1             $199.99       │    │
    /// │  ├────────────────────────────────────────────────────────────────┤    │
    /// │  │  Selected total                                  $599.98       │    │
    /// │  │  [ Checkout selected ]                                         │    │
    /// │  └────────────────────────────────────────────────────────────────┘    │
    /// │                                                                         │
    /// │  invoke('get_cart') → { items: [...], totals: {...} }                   │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Returns
    /// Current cart with items and calculated totals
    pub fn get_cart(&self) -> CartResponse {
        debug!("get_cart command");
        self.cart.with_cart(|c| CartResponse::from(c))
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - The catalog is consulted first; stale product tiles never become
    ///   cart lines
    /// - If the product is already in the cart: quantities merge (capped
    ///   at the per-line maximum)
    /// - If not: added as a new, selected line
    /// - Price is "frozen" at time of adding (won't change if the catalog
    ///   price updates)
    /// - Stock must cover what is already in the cart plus this add
    ///
    /// ## Arguments
    /// * `product_id` - Catalog product id to add
    /// * `quantity` - Quantity to add (default: 1)
    ///
    /// ## Returns
    /// Updated cart with all items and totals
    pub async fn add_to_cart(
        &self,
        product_id: &str,
        quantity: Option<i64>,
    ) -> Result<CartResponse, ApiError> {
        let quantity = quantity.unwrap_or(1);
        debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

        validation::validate_quantity(quantity)?;

        let product = self
            .catalog
            .fetch_product(product_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;

        if !product.is_active {
            return Err(ApiError::validation("Product is not available"));
        }

        let already_in_cart = self.cart.with_cart(|c| {
            c.items
                .iter()
                .find(|line| line.product_id == product_id)
                .map(|line| line.quantity())
                .unwrap_or(0)
        });
        let requested = already_in_cart + quantity;
        if !product.can_fulfill(requested) {
            return Err(CoreError::InsufficientStock {
                title: product.title.clone(),
                available: product.stock,
                requested,
            }
            .into());
        }

        let line = LineItem::from_product(Uuid::new_v4().to_string(), &product, quantity);
        let response = self.cart.with_cart_mut(|c| {
            c.add_item(line);
            CartResponse::from(&*c)
        });

        self.notifier
            .notify(Toast::success(format!("Added {} to cart", product.title)));
        Ok(response)
    }

    /// Updates the quantity of a cart line.
    ///
    /// ## Behavior
    /// - Values outside the allowed range clamp to the nearest bound
    /// - An unknown line id changes nothing; the current cart comes back
    ///   as-is
    ///
    /// ## Arguments
    /// * `line_id` - Cart line to update
    /// * `quantity` - New quantity
    ///
    /// ## Returns
    /// Updated cart
    pub fn update_cart_item(&self, line_id: &str, quantity: i64) -> CartResponse {
        debug!(line_id = %line_id, quantity = %quantity, "update_cart_item command");

        self.cart.with_cart_mut(|c| {
            c.set_quantity(line_id, quantity);
            CartResponse::from(&*c)
        })
    }

    /// Removes a cart line.
    ///
    /// ## Behavior
    /// - Removing a line that exists confirms itself with a toast
    /// - Removing an unknown id is a no-op; no toast, no error
    ///
    /// ## Arguments
    /// * `line_id` - Cart line to remove
    ///
    /// ## Returns
    /// Updated cart
    pub fn remove_from_cart(&self, line_id: &str) -> CartResponse {
        debug!(line_id = %line_id, "remove_from_cart command");

        let (removed, response) = self.cart.with_cart_mut(|c| {
            let removed = c.remove(line_id);
            (removed, CartResponse::from(&*c))
        });

        if let Some(line) = removed {
            self.notifier
                .notify(Toast::info(format!("Removed {} from cart", line.title)));
        }
        response
    }

    /// Sets one line's selection flag.
    ///
    /// Only selected lines count toward the cart total and enter checkout.
    pub fn set_item_selected(&self, line_id: &str, selected: bool) -> CartResponse {
        debug!(line_id = %line_id, selected = %selected, "set_item_selected command");

        self.cart.with_cart_mut(|c| {
            c.set_selected(line_id, selected);
            CartResponse::from(&*c)
        })
    }

    /// Sets every line's selection flag, the "select all" checkbox.
    pub fn set_all_selected(&self, selected: bool) -> CartResponse {
        debug!(selected = %selected, "set_all_selected command");

        self.cart.with_cart_mut(|c| {
            c.set_all_selected(selected);
            CartResponse::from(&*c)
        })
    }

    /// Clears all items from the cart.
    ///
    /// ## Returns
    /// Empty cart
    pub fn clear_cart(&self) -> CartResponse {
        debug!("clear_cart command");

        self.cart.with_cart_mut(|c| {
            c.clear();
            CartResponse::from(&*c)
        })
    }

    /// Merges a guest session's saved cart into this one.
    ///
    /// ## When Used
    /// The shopper signs in and the shell loads the cart persisted under
    /// the guest storage key. Quantities for the same product merge and
    /// cap; the account cart's prices and selections win.
    ///
    /// ## Returns
    /// Updated cart
    pub fn absorb_guest_cart(&self, guest: Cart) -> CartResponse {
        let lines = guest.item_count();
        debug!(lines = %lines, "absorb_guest_cart command");

        let response = self.cart.with_cart_mut(|c| {
            c.merge(guest);
            CartResponse::from(&*c)
        });

        if lines > 0 {
            self.notifier.notify(Toast::info(
                "Saved items from your guest session were added to the cart",
            ));
        }
        response
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use vitrine_core::money::Money;
    use vitrine_ports::{InMemoryCatalog, InMemoryOrders, RecordingNotifier};

    use crate::error::ErrorCode;
    use crate::state::AuthContext;

    fn storefront() -> (Storefront, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let storefront = Storefront::new(
            AuthContext::guest(),
            Arc::new(InMemoryCatalog::with_demo_catalog()),
            Arc::new(InMemoryOrders::new()),
            notifier.clone(),
        );
        (storefront, notifier)
    }

    #[tokio::test]
    async fn test_add_to_cart_freezes_price_and_merges() {
        let (shop, notifier) = storefront();

        let cart = shop.add_to_cart("prod-1001", Some(2)).await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].unit_price_cents, 29999);
        assert_eq!(cart.items[0].quantity(), 2);
        assert!(cart.items[0].selected);

        let cart = shop.add_to_cart("prod-1001", Some(3)).await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity(), 5);

        assert_eq!(
            notifier.messages(),
            vec![
                "Added Aurora Mechanical Keyboard to cart",
                "Added Aurora Mechanical Keyboard to cart"
            ]
        );
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_product() {
        let (shop, _) = storefront();
        let err = shop.add_to_cart("prod-9999", None).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));
        assert!(err.message.contains("prod-9999"));
    }

    #[tokio::test]
    async fn test_add_to_cart_inactive_product_is_rejected() {
        let (shop, _) = storefront();
        let err = shop.add_to_cart("prod-1006", Some(1)).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::ValidationError));
    }

    #[tokio::test]
    async fn test_add_to_cart_rejects_nonpositive_quantity() {
        let (shop, _) = storefront();
        let err = shop.add_to_cart("prod-1001", Some(0)).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::ValidationError));
    }

    #[tokio::test]
    async fn test_add_to_cart_enforces_stock_across_adds() {
        let (shop, _) = storefront();

        // prod-1004 is seeded sold out
        let err = shop.add_to_cart("prod-1004", Some(1)).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::InsufficientStock));

        // prod-1005 has 8 in stock: 5 now, 4 more would make 9
        shop.add_to_cart("prod-1005", Some(5)).await.unwrap();
        let err = shop.add_to_cart("prod-1005", Some(4)).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::InsufficientStock));
        assert!(err.message.contains("8 available, 9 requested"));
    }

    #[tokio::test]
    async fn test_update_cart_item_clamps_and_ignores_unknown() {
        let (shop, _) = storefront();
        let cart = shop.add_to_cart("prod-1001", Some(2)).await.unwrap();
        let line_id = cart.items[0].id.clone();

        let cart = shop.update_cart_item(&line_id, 500);
        assert_eq!(cart.items[0].quantity(), 100);

        let cart = shop.update_cart_item("ghost", 7);
        assert_eq!(cart.items[0].quantity(), 100);
    }

    #[tokio::test]
    async fn test_remove_toasts_once() {
        let (shop, notifier) = storefront();
        let cart = shop.add_to_cart("prod-1002", None).await.unwrap();
        let line_id = cart.items[0].id.clone();

        let cart = shop.remove_from_cart(&line_id);
        assert!(cart.items.is_empty());

        // Second remove of the same id: no error, no second toast
        shop.remove_from_cart(&line_id);
        assert_eq!(
            notifier.messages(),
            vec!["Added Atlas USB-C Hub to cart", "Removed Atlas USB-C Hub from cart"]
        );
    }

    #[tokio::test]
    async fn test_selection_drives_selected_total() {
        let (shop, _) = storefront();
        shop.add_to_cart("prod-1001", Some(2)).await.unwrap();
        let cart = shop.add_to_cart("prod-1002", Some(1)).await.unwrap();
        let hub_id = cart.items[1].id.clone();

        let cart = shop.set_item_selected(&hub_id, false);
        assert_eq!(cart.totals.selected_count, 1);
        assert_eq!(cart.totals.selected_total, Money::from_cents(59998));

        let cart = shop.set_item_selected(&hub_id, true);
        assert_eq!(cart.totals.selected_count, 2);
        assert_eq!(cart.totals.selected_total, Money::from_cents(79997));
    }

    #[tokio::test]
    async fn test_set_all_selected_and_clear() {
        let (shop, _) = storefront();
        shop.add_to_cart("prod-1001", None).await.unwrap();
        shop.add_to_cart("prod-1002", None).await.unwrap();

        let cart = shop.set_all_selected(false);
        assert_eq!(cart.totals.selected_count, 0);
        assert_eq!(cart.totals.selected_total, Money::zero());

        let cart = shop.clear_cart();
        assert!(cart.items.is_empty());
        assert_eq!(cart.totals.item_count, 0);
    }

    #[tokio::test]
    async fn test_absorb_guest_cart_merges_lines() {
        let (shop, notifier) = storefront();
        shop.add_to_cart("prod-1001", Some(2)).await.unwrap();

        let mut guest = Cart::default();
        guest.add_item(LineItem::new(
            "guest-1", "prod-1001", "Aurora Mechanical Keyboard", "/images/keyboard.png", 27999, 3,
        ));
        guest.add_item(LineItem::new(
            "guest-2", "prod-1003", "Nimbus Wireless Mouse", "/images/mouse.png", 4999, 1,
        ));

        let cart = shop.absorb_guest_cart(guest);
        assert_eq!(cart.items.len(), 2);
        // Account line keeps its frozen price; quantities merge
        assert_eq!(cart.items[0].unit_price_cents, 29999);
        assert_eq!(cart.items[0].quantity(), 5);
        assert!(notifier
            .messages()
            .iter()
            .any(|m| m.contains("guest session")));
    }

    #[tokio::test]
    async fn test_offline_catalog_maps_to_service_unavailable() {
        let catalog = Arc::new(InMemoryCatalog::with_demo_catalog());
        let shop = Storefront::new(
            AuthContext::guest(),
            catalog.clone(),
            Arc::new(InMemoryOrders::new()),
            Arc::new(RecordingNotifier::new()),
        );

        catalog.set_offline(true);
        let err = shop.add_to_cart("prod-1001", None).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::ServiceUnavailable));
    }
}
