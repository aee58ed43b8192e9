//! # State Module
//!
//! Session-scoped state for the storefront client.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct owning everything, each concern gets its own
//! state type. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: States can be constructed and inspected in isolation
//! 3. **Reduced Contention**: Cart and checkout locks are independent
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Storefront                                │   │
//! │  │  auth / cart / checkout, one per shopper session                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ AuthContext  │  │  CartState   │  │  CheckoutState   │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Guest or    │  │  Arc<Mutex<  │  │  Arc<Mutex<      │              │
//! │  │  SignedIn    │  │    Cart      │  │    Option<       │              │
//! │  │  (read-only) │  │  >>          │  │    Session>>>    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • AuthContext: immutable for the life of the session                  │
//! │  • CartState / CheckoutState: Arc<Mutex<T>> for exclusive access       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod checkout;
mod session;

pub use cart::{CartState, CartTotals};
pub use checkout::{CheckoutSession, CheckoutState};
pub use session::{AuthContext, UserSummary};
