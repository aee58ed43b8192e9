//! # Vitrine Client
//!
//! The storefront command layer. The browser shell invokes these commands;
//! everything else (pure logic, backend access) lives below.
//!
//! ## Module Overview
//! - [`storefront`]: the [`Storefront`] aggregate the shell holds
//! - [`commands`]: one module per command family (cart, checkout, orders,
//!   products), implemented as methods on [`Storefront`]
//! - [`state`]: session-scoped state (auth context, cart, checkout)
//! - [`error`]: [`ApiError`], the serializable failure every command returns
//!
//! ## Command Shape
//! Commands take plain arguments, return serializable DTOs, and report
//! failures as [`ApiError`] with a machine-readable code. Anything the
//! shopper should celebrate or regret also lands as a toast through the
//! injected notifier.

pub mod commands;
pub mod error;
pub mod state;
pub mod storefront;

pub use commands::{CartResponse, CheckoutResponse};
pub use error::{ApiError, ErrorCode};
pub use state::{AuthContext, UserSummary};
pub use storefront::Storefront;
