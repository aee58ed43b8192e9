//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vitrine                                │
//! │                                                                         │
//! │  Browser Shell               Client Commands                            │
//! │  ─────────────               ───────────────                            │
//! │                                                                         │
//! │  invoke('add_to_cart')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Method                                                  │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Port Error? ──── PortError::Unavailable("...") ────┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Core Error? ──── CoreError::InsufficientStock ── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('add_to_cart')                                          │
//! │  } catch (e) {                                                          │
//! │    // e.message = "Product not found: prod-9999"                        │
//! │    // e.code = "NOT_FOUND"                                              │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use vitrine_core::error::{CoreError, ValidationError};
use vitrine_ports::PortError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the shell receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "postal_code is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('confirm_payment', { form });
/// } catch (e) {
///   switch (e.code) {
///     case 'VALIDATION_ERROR':
///       markBrokenFields(e.message);
///       break;
///     case 'SERVICE_UNAVAILABLE':
///       offerRetry();
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Checkout session missing or in the wrong step
    CheckoutError,

    /// Requested quantity exceeds available stock
    InsufficientStock,

    /// Payment processing error
    PaymentError,

    /// Backend unreachable, worth retrying
    ServiceUnavailable,

    /// Business logic error (422)
    BusinessLogic,

    /// Internal client error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a checkout error.
    pub fn checkout(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CheckoutError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Collapses a form's collected field errors into one validation error.
    ///
    /// The shell splits on `"; "` to mark individual fields.
    pub fn form(errors: &[ValidationError]) -> Self {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientStock {
                title,
                available,
                requested,
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Insufficient stock for {}: {} available, {} requested",
                    title, available, requested
                ),
            ),
            CoreError::PaymentNotReady { step } => ApiError::new(
                ErrorCode::CheckoutError,
                format!(
                    "Payment can only be confirmed at the final step (currently at {:?})",
                    step
                ),
            ),
            CoreError::AlreadyPaid => ApiError::new(
                ErrorCode::PaymentError,
                "Payment has already been confirmed for this checkout",
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts field validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts port errors to API errors.
impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Unavailable(detail) => {
                // Log the transport detail but return a retryable message
                tracing::warn!("Port unavailable: {}", detail);
                ApiError::new(
                    ErrorCode::ServiceUnavailable,
                    "Service temporarily unavailable, please try again",
                )
            }
            PortError::Rejected { reason } => ApiError::new(ErrorCode::BusinessLogic, reason),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
