//! Cart state.
//!
//! Wraps the cart ledger in `Arc<Mutex<_>>` so command handlers on any
//! thread get exclusive access through the two closure helpers. The ledger
//! logic itself lives in vitrine-core; this file only owns the locking.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use vitrine_core::cart::Cart;
use vitrine_core::money::Money;

/// Derived numbers the shell renders next to the cart icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of lines in the ledger.
    pub item_count: usize,
    /// Sum of quantities across all lines.
    pub total_quantity: i64,
    /// Number of selected lines.
    pub selected_count: usize,
    /// Sum over selected lines only; this is the cart page total.
    pub selected_total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            selected_count: cart.selected_count(),
            selected_total: cart.total(),
        }
    }
}

/// Shared, lockable handle to the session's cart.
#[derive(Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a closure with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Runs a closure with mutable access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}
