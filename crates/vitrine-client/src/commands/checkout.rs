//! # Checkout Commands
//!
//! Storefront commands driving the checkout wizard from entry to receipt.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  begin_checkout                                                         │
//! │       │  snapshots the cart's selected lines                            │
//! │       ▼                                                                 │
//! │  ┌──────────┐  checkout_next   ┌──────────┐  checkout_next  ┌─────────┐│
//! │  │  Review  │ ───────────────► │ Payment  │ ──────────────► │ Confirm ││
//! │  │          │ ◄─────────────── │          │ ◄────────────── │         ││
//! │  └──────────┘  checkout_prev   └──────────┘  checkout_prev  └────┬────┘│
//! │                                     │                            │     │
//! │                          submit_shipping_address        confirm_payment│
//! │                          (schema-checked form)          (schema-checked│
//! │                                                          card form)    │
//! │                                                               │        │
//! │                                                               ▼        │
//! │                                            OrderPort::place_order      │
//! │                                            purchased lines leave cart  │
//! │                                            "Payment confirmed" toast   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use vitrine_core::cart::LineItem;
use vitrine_core::checkout::{CheckoutWizard, WizardStep};
use vitrine_core::forms::{self, FormSchema};
use vitrine_core::types::{OrderDraft, OrderReceipt, ShippingAddress};
use vitrine_ports::Toast;

use crate::error::ApiError;
use crate::state::CheckoutSession;
use crate::storefront::Storefront;

/// Checkout response the wizard screens render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub step: WizardStep,
    pub step_index: u8,
    pub items: Vec<LineItem>,
    pub subtotal_cents: i64,
    pub shipping_fee_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub settled: bool,
    pub shipping_address: Option<ShippingAddress>,
}

impl From<&CheckoutSession> for CheckoutResponse {
    fn from(session: &CheckoutSession) -> Self {
        let wizard = &session.wizard;
        CheckoutResponse {
            step: wizard.step(),
            step_index: wizard.step_index(),
            items: wizard.items().to_vec(),
            subtotal_cents: wizard.subtotal_cents(),
            shipping_fee_cents: wizard.shipping_fee_cents(),
            discount_cents: wizard.discount_cents(),
            total_cents: wizard.total_cents(),
            settled: wizard.is_settled(),
            shipping_address: session.shipping_address.clone(),
        }
    }
}

impl Storefront {
    fn no_checkout() -> ApiError {
        ApiError::checkout("No checkout in progress")
    }

    /// Starts a checkout over the cart's selected lines.
    ///
    /// ## Behavior
    /// - The selected lines are snapshotted: later cart edits do not reach
    ///   the wizard
    /// - Every snapshot line counts toward the checkout total; selection
    ///   stays a cart concept
    /// - An existing checkout session is replaced
    ///
    /// ## Returns
    /// The wizard at the Review step
    pub fn begin_checkout(&self) -> Result<CheckoutResponse, ApiError> {
        debug!("begin_checkout command");

        let snapshot = self.cart.with_cart(|c| c.selected_items());
        if snapshot.is_empty() {
            return Err(ApiError::validation("No items selected for checkout"));
        }

        let session = CheckoutSession::new(CheckoutWizard::new(snapshot));
        let response = CheckoutResponse::from(&session);
        self.checkout.begin(session);
        Ok(response)
    }

    /// Gets the checkout in progress.
    pub fn get_checkout(&self) -> Result<CheckoutResponse, ApiError> {
        debug!("get_checkout command");

        self.checkout
            .with_session(|s| CheckoutResponse::from(s))
            .ok_or_else(Self::no_checkout)
    }

    /// Advances the wizard one step. At the final step this is a no-op;
    /// payment only happens through [`confirm_payment`](Self::confirm_payment).
    pub fn checkout_next(&self) -> Result<CheckoutResponse, ApiError> {
        debug!("checkout_next command");

        self.checkout
            .with_session_mut(|s| {
                s.wizard.next();
                CheckoutResponse::from(&*s)
            })
            .ok_or_else(Self::no_checkout)
    }

    /// Steps the wizard back by one. No-op at Review.
    pub fn checkout_prev(&self) -> Result<CheckoutResponse, ApiError> {
        debug!("checkout_prev command");

        self.checkout
            .with_session_mut(|s| {
                s.wizard.prev();
                CheckoutResponse::from(&*s)
            })
            .ok_or_else(Self::no_checkout)
    }

    /// Stores the shipping address for the checkout in progress.
    ///
    /// ## Behavior
    /// The form is checked against the shipping address schema first; on
    /// any field failure nothing is stored and every broken field is
    /// reported in one message.
    ///
    /// ## Arguments
    /// * `form` - JSON object with the shipping address fields
    pub fn submit_shipping_address(&self, form: &Value) -> Result<CheckoutResponse, ApiError> {
        debug!("submit_shipping_address command");

        if !self.checkout.is_active() {
            return Err(Self::no_checkout());
        }

        FormSchema::shipping_address()
            .validate(form)
            .map_err(|errors| ApiError::form(&errors))?;
        let address = forms::parse_shipping_address(form);

        self.checkout
            .with_session_mut(|s| {
                s.shipping_address = Some(address);
                CheckoutResponse::from(&*s)
            })
            .ok_or_else(Self::no_checkout)
    }

    /// Confirms payment for the checkout in progress.
    ///
    /// ## Behavior
    /// 1. The card form is checked against its schema, then dropped; card
    ///    data never reaches a port or a log line
    /// 2. The wizard must be at the final step, not yet settled, with a
    ///    shipping address submitted
    /// 3. The order is placed through the order port; if that fails the
    ///    wizard stays confirmable so the shopper can retry
    /// 4. On success the wizard settles, the purchased lines leave the
    ///    cart, and a confirmation toast fires
    ///
    /// ## Arguments
    /// * `payment_form` - JSON object with the card fields
    ///
    /// ## Returns
    /// The receipt with the assigned order number
    pub async fn confirm_payment(&self, payment_form: &Value) -> Result<OrderReceipt, ApiError> {
        debug!("confirm_payment command");

        FormSchema::payment_card()
            .validate(payment_form)
            .map_err(|errors| ApiError::form(&errors))?;

        let draft = self
            .checkout
            .with_session(|s| -> Result<OrderDraft, ApiError> {
                s.wizard.ensure_payable()?;
                let address = s.shipping_address.clone().ok_or_else(|| {
                    ApiError::validation("Shipping address has not been submitted")
                })?;
                Ok(OrderDraft {
                    items: s.wizard.items().to_vec(),
                    subtotal_cents: s.wizard.subtotal_cents(),
                    shipping_fee_cents: s.wizard.shipping_fee_cents(),
                    discount_cents: s.wizard.discount_cents(),
                    total_cents: s.wizard.total_cents(),
                    shipping_address: Some(address),
                })
            })
            .ok_or_else(Self::no_checkout)?;
        let draft = draft?;

        let receipt = self
            .orders
            .place_order(self.auth.customer_id(), &draft)
            .await?;

        // The order exists now; settle the wizard so it freezes.
        self.checkout
            .with_session_mut(|s| s.wizard.confirm_payment())
            .ok_or_else(Self::no_checkout)?
            .map_err(ApiError::from)?;

        // Purchased lines leave the cart; unselected lines stay.
        self.cart.with_cart_mut(|c| {
            for line in &draft.items {
                c.remove(&line.id);
            }
        });

        info!(
            order_number = %receipt.order_number,
            total_cents = receipt.total_cents,
            "checkout settled"
        );
        self.notifier.notify(Toast::success(format!(
            "Payment confirmed: order {}",
            receipt.order_number
        )));
        Ok(receipt)
    }

    /// Drops the checkout in progress, settled or not.
    ///
    /// ## Returns
    /// Whether a session existed
    pub fn abandon_checkout(&self) -> bool {
        debug!("abandon_checkout command");
        self.checkout.end().is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
