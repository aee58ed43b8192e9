//! # Commands Module
//!
//! All commands exposed to the browser shell, grouped by feature and
//! implemented as methods on [`Storefront`](crate::storefront::Storefront).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── products.rs  ◄─── Catalog browsing
//! ├── cart.rs      ◄─── Cart ledger manipulation
//! ├── checkout.rs  ◄─── Checkout wizard and payment
//! └── orders.rs    ◄─── Order history
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Browser Shell                                                          │
//! │  ─────────────                                                          │
//! │  const cart = await invoke('add_to_cart', {                             │
//! │    productId: 'prod-1001',                                              │
//! │    quantity: 2                                                          │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC bridge)                                                  │
//! │         ▼                                                               │
//! │  Storefront Method                                                      │
//! │  ─────────────────                                                      │
//! │  async fn add_to_cart(                                                  │
//! │      &self,                   ◄── auth, state and ports live here       │
//! │      product_id: &str,        ◄── from invoke params                    │
//! │      quantity: Option<i64>,   ◄── optional param                        │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Shell receives: { items: [...], totals: {...} }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;

pub use cart::CartResponse;
pub use checkout::CheckoutResponse;
