//! Checkout state.
//!
//! At most one checkout session exists per client. Beginning a new
//! checkout replaces any session in progress; abandoning or completing
//! one leaves the slot empty again.

use std::sync::{Arc, Mutex};

use vitrine_core::checkout::CheckoutWizard;
use vitrine_core::types::ShippingAddress;

/// One checkout in progress: the wizard plus what the shopper has
/// submitted so far.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub wizard: CheckoutWizard,
    pub shipping_address: Option<ShippingAddress>,
}

impl CheckoutSession {
    pub fn new(wizard: CheckoutWizard) -> Self {
        CheckoutSession {
            wizard,
            shipping_address: None,
        }
    }
}

/// Shared, lockable slot for the session (if any).
#[derive(Clone, Default)]
pub struct CheckoutState {
    session: Arc<Mutex<Option<CheckoutSession>>>,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a session, replacing whatever was there.
    pub fn begin(&self, session: CheckoutSession) {
        let mut slot = self.session.lock().expect("Checkout mutex poisoned");
        *slot = Some(session);
    }

    /// Removes and returns the session.
    pub fn end(&self) -> Option<CheckoutSession> {
        let mut slot = self.session.lock().expect("Checkout mutex poisoned");
        slot.take()
    }

    pub fn is_active(&self) -> bool {
        let slot = self.session.lock().expect("Checkout mutex poisoned");
        slot.is_some()
    }

    /// Runs a closure with read access to the session.
    ///
    /// ## Returns
    /// `None` when no checkout is in progress.
    pub fn with_session<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&CheckoutSession) -> R,
    {
        let slot = self.session.lock().expect("Checkout mutex poisoned");
        slot.as_ref().map(f)
    }

    /// Runs a closure with mutable access to the session.
    ///
    /// ## Returns
    /// `None` when no checkout is in progress.
    pub fn with_session_mut<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut CheckoutSession) -> R,
    {
        let mut slot = self.session.lock().expect("Checkout mutex poisoned");
        slot.as_mut().map(f)
    }
}
