//! The storefront aggregate.

use std::sync::Arc;

use vitrine_ports::{CatalogPort, Notifier, OrderPort};

use crate::state::{AuthContext, CartState, CheckoutState};

/// Everything one shopper session needs, wired together.
///
/// The shell constructs a `Storefront` when the page loads (or when the
/// auth context changes) and invokes commands on it. Ports arrive as trait
/// objects, so tests hand in the in-memory adapters and production hands
/// in the real backend.
pub struct Storefront {
    pub(crate) auth: AuthContext,
    pub(crate) catalog: Arc<dyn CatalogPort>,
    pub(crate) orders: Arc<dyn OrderPort>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) cart: CartState,
    pub(crate) checkout: CheckoutState,
}

impl Storefront {
    /// Builds a storefront with an empty cart and no checkout in progress.
    pub fn new(
        auth: AuthContext,
        catalog: Arc<dyn CatalogPort>,
        orders: Arc<dyn OrderPort>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Storefront {
            auth,
            catalog,
            orders,
            notifier,
            cart: CartState::new(),
            checkout: CheckoutState::new(),
        }
    }

    /// The identity this session acts under. Read-only: swapping identity
    /// means building a new storefront.
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }
}
