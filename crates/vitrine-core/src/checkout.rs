//! # Checkout Wizard
//!
//! A linear three-step checkout over a snapshot of cart lines.
//!
//! ## Step Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Wizard Steps                                │
//! │                                                                         │
//! │            next()            next()                                     │
//! │  ┌──────────┐───►┌──────────┐───►┌──────────────┐                      │
//! │  │  Review  │    │ Payment  │    │ Confirmation │──confirm_payment()   │
//! │  │  (0)     │◄───│  (1)     │◄───│  (2)         │        │             │
//! │  └──────────┘    └──────────┘    └──────────────┘        ▼             │
//! │       ▲   prev()        prev()         │            settled = true     │
//! │       │                                │            (wizard freezes)   │
//! │       └────────────── reset() ─────────┘                               │
//! │                                                                         │
//! │  • Steps advance by exactly one; skipping is impossible by construction │
//! │  • next() at Confirmation is a pure no-op: payment is its own explicit  │
//! │    action, never a side effect of navigation                            │
//! │  • Once settled, every transition is a no-op and confirm errors         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! The wizard owns clones of the lines that were selected when checkout
//! began. Cart mutations after entry do not reach the wizard, and the
//! wizard's total counts EVERY snapshot line (the selection concept stays
//! behind in the cart).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::LineItem;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Wizard Step
// =============================================================================

/// The current stage of the linear checkout sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Shopper reviews the snapshot lines and totals.
    Review,
    /// Shopper provides shipping and payment details.
    Payment,
    /// Final confirmation; the explicit confirm action lives here.
    Confirmation,
}

impl WizardStep {
    /// The step index the UI stepper renders: 0, 1, or 2.
    #[inline]
    pub const fn index(&self) -> u8 {
        match self {
            WizardStep::Review => 0,
            WizardStep::Payment => 1,
            WizardStep::Confirmation => 2,
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Review
    }
}

// =============================================================================
// Checkout Wizard
// =============================================================================

/// The checkout wizard state.
///
/// ## Invariants
/// - `step` moves by exactly ±1 (or back to Review via `reset`), never skips
/// - Confirmation is terminal for `next()`
/// - `shipping_fee_cents` and `discount_cents` are non-negative
/// - After `confirm_payment` succeeds the wizard is settled: navigation
///   freezes and a second confirm is rejected
///
/// All fields are private so the invariants cannot be bypassed; this is the
/// same discipline [`Money`] applies to its cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutWizard {
    step: WizardStep,
    items: Vec<LineItem>,
    shipping_fee_cents: i64,
    discount_cents: i64,
    settled: bool,
}

impl CheckoutWizard {
    /// Starts a wizard at Review over a snapshot of lines.
    ///
    /// The caller decides which lines belong in the snapshot (normally the
    /// cart's selected lines) and whether an empty snapshot is acceptable.
    pub fn new(items: Vec<LineItem>) -> Self {
        CheckoutWizard {
            step: WizardStep::Review,
            items,
            shipping_fee_cents: 0,
            discount_cents: 0,
            settled: false,
        }
    }

    /// Sets the shipping fee. Negative values floor at zero.
    pub fn with_shipping_fee(mut self, cents: i64) -> Self {
        self.shipping_fee_cents = cents.max(0);
        self
    }

    /// Sets the absolute discount. Negative values floor at zero.
    pub fn with_discount(mut self, cents: i64) -> Self {
        self.discount_cents = cents.max(0);
        self
    }

    /// The current step.
    #[inline]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The current step index (0, 1, or 2).
    #[inline]
    pub fn step_index(&self) -> u8 {
        self.step.index()
    }

    /// The snapshot lines, in cart order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of snapshot lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The shipping fee in cents.
    #[inline]
    pub fn shipping_fee_cents(&self) -> i64 {
        self.shipping_fee_cents
    }

    /// The absolute discount in cents.
    #[inline]
    pub fn discount_cents(&self) -> i64 {
        self.discount_cents
    }

    /// Whether payment has been confirmed.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advances one step. At Confirmation this is a pure no-op.
    ///
    /// ## Returns
    /// The step after the transition.
    pub fn next(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Review => WizardStep::Payment,
            WizardStep::Payment => WizardStep::Confirmation,
            WizardStep::Confirmation => WizardStep::Confirmation,
        };
        self.step
    }

    /// Steps back by one. No-op at Review, and frozen once settled (the
    /// order has already been placed; there is nothing to go back to).
    ///
    /// ## Returns
    /// The step after the transition.
    pub fn prev(&mut self) -> WizardStep {
        if !self.settled {
            self.step = match self.step {
                WizardStep::Review => WizardStep::Review,
                WizardStep::Payment => WizardStep::Review,
                WizardStep::Confirmation => WizardStep::Payment,
            };
        }
        self.step
    }

    /// Returns to the Review step. No-op once settled.
    pub fn reset(&mut self) {
        if !self.settled {
            self.step = WizardStep::Review;
        }
    }

    /// Checks that payment may be confirmed right now.
    ///
    /// ## Why Separate From confirm_payment
    /// The surrounding session verifies eligibility, then performs the
    /// (fallible, async) order placement, and only settles the wizard once
    /// the order service accepted. A failed placement must leave the wizard
    /// confirmable for a retry.
    pub fn ensure_payable(&self) -> CoreResult<()> {
        if self.settled {
            return Err(CoreError::AlreadyPaid);
        }
        if self.step != WizardStep::Confirmation {
            return Err(CoreError::PaymentNotReady { step: self.step });
        }
        Ok(())
    }

    /// Confirms payment: valid only at Confirmation, and only once.
    ///
    /// This settles the wizard. Placing the order and emitting the terminal
    /// notification are the caller's side of the contract.
    pub fn confirm_payment(&mut self) -> CoreResult<()> {
        self.ensure_payable()?;
        self.settled = true;
        Ok(())
    }

    /// Sum of line totals over the whole snapshot, in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// The amount to charge, in cents: subtotal + shipping - discount,
    /// floored at zero.
    ///
    /// Every snapshot line counts; checkout has no selection concept.
    pub fn total_cents(&self) -> i64 {
        Money::from_cents(self.subtotal_cents() + self.shipping_fee_cents - self.discount_cents)
            .floor_at_zero()
            .cents()
    }

    /// The amount to charge as Money.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
