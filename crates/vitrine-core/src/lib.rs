//! # vitrine-core: Pure Business Logic for the Vitrine Storefront
//!
//! This crate is the **heart** of the storefront client. It contains all
//! cart, checkout, and form logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Vitrine Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser Frontend                             │   │
//! │  │    Catalog UI ──► Cart UI ──► Checkout Stepper ──► Orders UI   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command calls                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vitrine-client                               │   │
//! │  │    add_to_cart, begin_checkout, confirm_payment, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Catalog  │  │   Money   │  │   Cart    │  │  Wizard   │  │   │
//! │  │   │  Orders   │  │  (cents)  │  │ LineItem  │  │   steps   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   forms   │  │ validation│                                 │   │
//! │  │   │  schemas  │  │   rules   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vitrine-ports                                │   │
//! │  │         Catalog / Order / Notification seams + adapters         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogProduct, OrderSummary, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart ledger: line items, quantities, selection totals
//! - [`checkout`] - The linear checkout wizard over a cart snapshot
//! - [`forms`] - Explicit per-form schemas validated before side effects
//! - [`error`] - Domain error types
//! - [`validation`] - Field and business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, storage, and clock-dependent randomness are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Clamp, Don't Trust**: Quantity and price bounds are enforced in this crate,
//!    never delegated to input widgets
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::cart::{Cart, LineItem};
//!
//! let mut cart = Cart::new();
//! cart.add_item(LineItem::new("l1", "p1", "Mechanical Keyboard", "/img/kb.png", 29999, 2));
//! cart.add_item(LineItem::new("l2", "p2", "USB-C Hub", "/img/hub.png", 19999, 1));
//! cart.set_selected("l2", false);
//!
//! // Only selected lines count toward the ledger total
//! assert_eq!(cart.total_cents(), 59998); // $599.98
//! assert_eq!(cart.selected_count(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod forms;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Money` instead of
// `use vitrine_core::money::Money`

pub use cart::{Cart, LineItem};
pub use checkout::{CheckoutWizard, WizardStep};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum quantity of a single line item.
///
/// ## Business Reason
/// A line with zero quantity is not a line; removing an item is an explicit
/// delete operation, never a side effect of typing 0 in the quantity box.
pub const MIN_LINE_QUANTITY: i64 = 1;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// The ledger clamps to this bound itself rather than trusting the quantity
/// widget's min/max attributes.
pub const MAX_LINE_QUANTITY: i64 = 100;
