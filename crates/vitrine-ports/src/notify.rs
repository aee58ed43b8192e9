//! Toast notifications.
//!
//! Cart and checkout operations confirm themselves to the shopper through
//! short toast messages ("Added Keyboard to cart", "Payment confirmed").
//! The [`Notifier`] trait decouples emitting a toast from however the UI
//! shell chooses to render one.
//!
//! Three implementations ship here:
//! - [`ChannelNotifier`]: forwards toasts over a channel the shell drains
//! - [`TracingNotifier`]: logs toasts, for headless runs
//! - [`RecordingNotifier`]: collects toasts in memory, for assertions

use std::sync::Mutex;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{info, warn};

// =============================================================================
// Toast
// =============================================================================

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    /// An operation completed (green check in the shell).
    Success,
    /// Neutral information.
    Info,
    /// An operation failed in a way the shopper should see.
    Error,
}

/// A short, transient message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Toast {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// Sink for toasts.
///
/// Emitting is fire-and-forget: operations never fail because a toast had
/// nowhere to go.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Forwards toasts over an unbounded channel.
///
/// The UI shell holds the receiving end and drains it into its toast
/// overlay.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Toast>,
}

impl ChannelNotifier {
    /// Creates the notifier and the receiver the shell drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelNotifier { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, toast: Toast) {
        // A dropped receiver means no shell is listening; the toast is
        // discarded.
        let _ = self.tx.send(toast);
    }
}

/// Logs toasts instead of displaying them.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Error => warn!(toast = %toast.message, "notification"),
            _ => info!(toast = %toast.message, "notification"),
        }
    }
}

/// Collects toasts in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, in order.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().expect("Toast mutex poisoned").clone()
    }

    /// Just the message strings, in order.
    pub fn messages(&self) -> Vec<String> {
        self.toasts()
            .into_iter()
            .map(|toast| toast.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().expect("Toast mutex poisoned").push(toast);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
