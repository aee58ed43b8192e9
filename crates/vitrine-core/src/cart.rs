//! # Cart Ledger
//!
//! The cart as a flat ledger of line items with per-line selection.
//!
//! ## Ledger Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  Frontend Action          Ledger Operation         Result               │
//! │  ───────────────          ────────────────         ──────               │
//! │                                                                         │
//! │  Click "Add to cart" ────► add_item(line) ───────► merge or push        │
//! │                                                                         │
//! │  Change quantity ────────► set_quantity(id, n) ──► clamped to [1,100]   │
//! │                                                                         │
//! │  Toggle checkbox ────────► set_selected(id, b) ──► included in total?   │
//! │                                                                         │
//! │  "Select all" ───────────► set_all_selected(b) ──► every line           │
//! │                                                                         │
//! │  Click remove ───────────► remove(id) ───────────► Some(line) | None    │
//! │                                                                         │
//! │  Clear cart ─────────────► clear() ──────────────► empty ledger         │
//! │                                                                         │
//! │  NOTE: unknown line ids are silent no-ops, never errors. The ledger     │
//! │        is a total function over its item list.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection Set
//! Only lines with `selected == true` count toward [`Cart::total_cents`] and
//! [`Cart::selected_count`]. This powers partial checkout: the shopper keeps
//! items in the cart while paying for a subset.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CatalogProduct;
use crate::{MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};

/// Clamps a requested quantity into the allowed per-line range.
#[inline]
fn clamp_quantity(qty: i64) -> i64 {
    qty.clamp(MIN_LINE_QUANTITY, MAX_LINE_QUANTITY)
}

/// Clamps quantity on the way in from JSON too, so a hand-crafted payload
/// cannot smuggle an out-of-range value past the ledger.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let qty = i64::deserialize(deserializer)?;
    Ok(clamp_quantity(qty))
}

// =============================================================================
// Line Item
// =============================================================================

/// One entry in the cart ledger.
///
/// ## Design Notes
/// - `id`: identifies the cart entry itself, distinct from `product_id`
/// - `title`, `image`, `unit_price_cents`: frozen copies of catalog data
///   taken when the item was added. The cart displays consistent data even
///   if the catalog changes afterwards.
/// - `quantity` is private: every way to set it clamps to `[1, 100]`, so the
///   invariant holds no matter what the quantity widget sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Cart entry ID (UUID, minted by the caller when the line is created).
    pub id: String,

    /// Catalog product this line refers to.
    pub product_id: String,

    /// Display title at time of adding (frozen).
    pub title: String,

    /// Image URI at time of adding (frozen, opaque).
    pub image: String,

    /// Price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price_cents: i64,

    /// Units of this product in the cart. Always within `[1, 100]`.
    #[serde(deserialize_with = "deserialize_quantity")]
    quantity: i64,

    /// Whether this line counts toward the ledger total.
    pub selected: bool,
}

impl LineItem {
    /// Creates a line item, clamping quantity into `[1, 100]` and flooring a
    /// negative price at zero. New lines start selected.
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
        unit_price_cents: i64,
        quantity: i64,
    ) -> Self {
        LineItem {
            id: id.into(),
            product_id: product_id.into(),
            title: title.into(),
            image: image.into(),
            unit_price_cents: unit_price_cents.max(0),
            quantity: clamp_quantity(quantity),
            selected: true,
        }
    }

    /// Creates a line item from a catalog product.
    ///
    /// ## Price Freezing
    /// Title, image, and price are captured at this moment. If the catalog
    /// entry changes later, this line retains the original values.
    pub fn from_product(id: impl Into<String>, product: &CatalogProduct, quantity: i64) -> Self {
        LineItem::new(
            id,
            product.id.clone(),
            product.title.clone(),
            product.image.clone(),
            product.price_cents,
            quantity,
        )
    }

    /// Current quantity, always within `[1, 100]`.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Sets the quantity, clamping into `[1, 100]`.
    ///
    /// Passing 0 or a negative value clamps to 1: removing a line is an
    /// explicit [`Cart::remove`], never a quantity side effect.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = clamp_quantity(quantity);
    }

    /// The unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity) in cents.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// The line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart ledger.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again merges
///   quantities into the existing line)
/// - Every quantity is within `[1, 100]` at all times
/// - Operations on unknown line ids are silent no-ops
/// - List order is stable; only `remove` shrinks the list
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the ledger, in insertion order.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a line to the cart, merging with an existing line for the same
    /// product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantities are summed and clamped to 100;
    ///   the existing line keeps its id, frozen price, and selection flag
    /// - New product: the line is appended as-is
    ///
    /// ## Returns
    /// The id of the line that now holds the product.
    pub fn add_item(&mut self, item: LineItem) -> String {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.set_quantity(existing.quantity + item.quantity);
            return existing.id.clone();
        }

        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Sets the quantity of a line, clamped to `[1, 100]`.
    ///
    /// ## Behavior
    /// - Unknown id: silent no-op
    /// - 0, negative, or > 100: clamped, never an error
    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.set_quantity(quantity);
        }
    }

    /// Removes a line from the cart by its line id.
    ///
    /// ## Behavior
    /// Idempotent: removing an unknown id returns `None` and changes nothing.
    /// The removed line is handed back so the caller can surface a
    /// confirmation message naming the product.
    pub fn remove(&mut self, id: &str) -> Option<LineItem> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Sets the selection flag of one line. Unknown id: silent no-op.
    pub fn set_selected(&mut self, id: &str, selected: bool) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.selected = selected;
        }
    }

    /// Applies the selection flag to every line.
    pub fn set_all_selected(&mut self, selected: bool) {
        for item in &mut self.items {
            item.selected = selected;
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Merges another cart into this one.
    ///
    /// ## When Used
    /// A guest signs in: the anonymous cart is folded into the account cart.
    ///
    /// ## Behavior
    /// - Shared products: quantities are summed and clamped to 100; this
    ///   cart's line (id, frozen price, selection) wins
    /// - Products only in `other`: appended in their original order
    pub fn merge(&mut self, other: Cart) {
        for item in other.items {
            self.add_item(item);
        }
    }

    /// Returns the number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines (selected or not).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Returns the number of selected lines.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|i| i.selected).count()
    }

    /// Clones the selected lines, in ledger order.
    ///
    /// This is the checkout snapshot source: the clones are decoupled from
    /// further cart mutation.
    pub fn selected_items(&self) -> Vec<LineItem> {
        self.items.iter().filter(|i| i.selected).cloned().collect()
    }

    /// Calculates the ledger total in cents: Σ unit price × quantity over
    /// the selected lines only.
    pub fn total_cents(&self) -> i64 {
        self.items
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.line_total_cents())
            .sum()
    }

    /// The ledger total as Money.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price_cents: i64, quantity: i64, selected: bool) -> LineItem {
        let mut item = LineItem::new(
            id,
            format!("product-{}", id),
            format!("Product {}", id),
            format!("/img/{}.png", id),
            price_cents,
            quantity,
        );
        item.selected = selected;
        item
    }

    /// The worked storefront scenario: $299.99 × 2 selected plus
    /// $199.99 × 1 unselected.
    #[test]
    fn test_total_counts_selected_lines_only() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 29999, 2, true));
        cart.add_item(line("2", 19999, 1, false));

        assert_eq!(cart.total_cents(), 59998); // $599.98
        assert_eq!(cart.selected_count(), 1);

        cart.set_selected("2", true);
        assert_eq!(cart.total_cents(), 79997); // $799.97
        assert_eq!(cart.selected_count(), 2);
    }

    #[test]
    fn test_unselected_quantity_change_does_not_affect_total() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 29999, 2, true));
        cart.add_item(line("2", 19999, 1, false));

        let before = cart.total_cents();
        cart.set_quantity("2", 40);
        assert_eq!(cart.total_cents(), before);
    }

    #[test]
    fn test_set_quantity_clamps_to_bounds() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 999, 5, true));

        cart.set_quantity("1", 0);
        assert_eq!(cart.items[0].quantity(), 1);

        cart.set_quantity("1", -7);
        assert_eq!(cart.items[0].quantity(), 1);

        cart.set_quantity("1", 101);
        assert_eq!(cart.items[0].quantity(), 100);

        cart.set_quantity("1", 42);
        assert_eq!(cart.items[0].quantity(), 42);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_silent_noop() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 999, 5, true));

        cart.set_quantity("missing", 10);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity(), 5);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 999, 1, true));
        cart.add_item(line("2", 499, 1, true));

        let removed = cart.remove("1");
        assert_eq!(removed.map(|i| i.id), Some("1".to_string()));
        assert_eq!(cart.item_count(), 1);

        // Second remove of the same id: no-op, not an error
        assert!(cart.remove("1").is_none());
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].id, "2");
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_lines() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 100, 1, true));
        cart.add_item(line("2", 200, 1, true));
        cart.add_item(line("3", 300, 1, true));

        cart.remove("2");

        let ids: Vec<&str> = cart.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_set_all_selected() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 100, 1, false));
        cart.add_item(line("2", 200, 1, true));
        cart.add_item(line("3", 300, 1, false));

        cart.set_all_selected(true);
        assert_eq!(cart.selected_count(), cart.item_count());

        cart.set_all_selected(false);
        assert_eq!(cart.selected_count(), 0);
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 100, 1, true));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_add_same_product_merges_into_existing_line() {
        let mut cart = Cart::new();
        let first_id = cart.add_item(line("1", 999, 2, true));
        // Same product (product-1), different line id and later price
        let mut dup = line("9", 1299, 3, true);
        dup.product_id = "product-1".to_string();
        let merged_id = cart.add_item(dup);

        assert_eq!(first_id, "1");
        assert_eq!(merged_id, "1"); // existing line wins
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity(), 5);
        // Frozen price from the first add survives
        assert_eq!(cart.items[0].unit_price_cents, 999);
    }

    #[test]
    fn test_add_merge_clamps_quantity_at_100() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 999, 60, true));

        let mut dup = line("9", 999, 60, true);
        dup.product_id = "product-1".to_string();
        cart.add_item(dup);

        assert_eq!(cart.items[0].quantity(), 100);
    }

    #[test]
    fn test_new_line_clamps_quantity_and_price() {
        let item = LineItem::new("1", "p1", "Thing", "/img/t.png", -500, 0);
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.unit_price_cents, 0);

        let big = LineItem::new("2", "p2", "Bulk", "/img/b.png", 100, 5000);
        assert_eq!(big.quantity(), 100);
    }

    #[test]
    fn test_selected_items_are_decoupled_clones() {
        let mut cart = Cart::new();
        cart.add_item(line("1", 29999, 2, true));
        cart.add_item(line("2", 19999, 1, false));

        let snapshot = cart.selected_items();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "1");

        // Mutating the cart afterwards does not touch the snapshot
        cart.set_quantity("1", 9);
        assert_eq!(snapshot[0].quantity(), 2);
    }

    #[test]
    fn test_merge_guest_cart() {
        let mut account = Cart::new();
        account.add_item(line("a1", 999, 2, false)); // product-a1
        account.add_item(line("a2", 499, 1, true));

        let mut guest = Cart::new();
        let mut overlap = line("g1", 1099, 3, true);
        overlap.product_id = "product-a1".to_string();
        guest.add_item(overlap);
        guest.add_item(line("g2", 2599, 1, true));

        account.merge(guest);

        // Shared product: quantity summed, account line keeps id/price/flag
        assert_eq!(account.item_count(), 3);
        assert_eq!(account.items[0].id, "a1");
        assert_eq!(account.items[0].quantity(), 5);
        assert_eq!(account.items[0].unit_price_cents, 999);
        assert!(!account.items[0].selected);

        // Guest-only product appended at the end
        assert_eq!(account.items[2].id, "g2");
    }

    #[test]
    fn test_quantity_clamped_on_deserialization() {
        let json = r#"{
            "id": "1",
            "productId": "p1",
            "title": "Thing",
            "image": "/img/t.png",
            "unitPriceCents": 999,
            "quantity": 5000,
            "selected": true
        }"#;
        let item: LineItem = serde_json::from_str(json).expect("valid line item JSON");
        assert_eq!(item.quantity(), 100);
    }
}
