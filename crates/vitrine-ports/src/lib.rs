//! # Vitrine Ports
//!
//! Async boundary between the storefront client and its backend.
//!
//! Every remote interaction the client performs goes through one of the
//! traits in this crate. The traits are object safe and injected as
//! `Arc<dyn ...>`, so the client never knows whether it is talking to a
//! real HTTP backend or to the in-memory adapters.
//!
//! ## Module Overview
//! - [`catalog`]: product lookup and listing ([`CatalogPort`])
//! - [`order`]: order placement and history ([`OrderPort`])
//! - [`notify`]: toast fan-out to the UI shell ([`Notifier`])
//! - [`memory`]: in-memory adapters for demos and tests
//! - [`error`]: the port failure type ([`PortError`])
//!
//! ## Design Principles
//! 1. **Explicit outcomes**: every port call returns [`PortResult`]; the
//!    client decides how a failure surfaces to the shopper.
//! 2. **Core stays pure**: ports own the clock, the randomness, and the
//!    network. Nothing in vitrine-core can reach any of them.
//! 3. **Adapters are fixtures**: the in-memory implementations take the
//!    place of mocks in the client test suite (seeded stock, an offline
//!    toggle) and back the walkthrough binary.

pub mod catalog;
pub mod error;
pub mod memory;
pub mod notify;
pub mod order;

// Re-export the port surface at the crate root.
pub use catalog::CatalogPort;
pub use error::{PortError, PortResult};
pub use memory::{InMemoryCatalog, InMemoryOrders};
pub use notify::{ChannelNotifier, Notifier, RecordingNotifier, Toast, ToastLevel, TracingNotifier};
pub use order::OrderPort;
