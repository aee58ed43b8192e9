//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input/form validation failures                 │
//! │                                                                         │
//! │  vitrine-ports errors (separate crate)                                  │
//! │  └── PortError        - Collaborator call failures                     │
//! │                                                                         │
//! │  Client API errors (vitrine-client)                                     │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend                │
//! │        PortError ───────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product title, step, field)
//! 3. Errors are enum variants, never String
//! 4. Missing line-item ids are NOT errors: ledger operations no-op silently
//!    on unknown ids, so there is deliberately no `LineNotFound` variant

use thiserror::Error;

use crate::checkout::WizardStep;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Insufficient stock to add the requested quantity.
    ///
    /// ## When This Occurs
    /// - Requested quantity (including what is already in the cart) exceeds
    ///   the catalog's available stock for the product
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 5)
    ///      │
    ///      ▼
    /// Catalog says: stock = 3
    ///      │
    ///      ▼
    /// InsufficientStock { title: "USB-C Hub", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 of USB-C Hub in stock"
    /// ```
    #[error("Insufficient stock for {title}: available {available}, requested {requested}")]
    InsufficientStock {
        title: String,
        available: i64,
        requested: i64,
    },

    /// Payment confirmation attempted off the terminal wizard step.
    ///
    /// ## When This Occurs
    /// - `confirm_payment` called while the wizard is still at Review or
    ///   Payment. Navigation (`next`/`prev`) never triggers payment; only the
    ///   explicit confirm action does, and only at the final step.
    #[error("Checkout is at {step:?}, payment can only be confirmed at the final step")]
    PaymentNotReady { step: WizardStep },

    /// Payment was already confirmed for this checkout.
    ///
    /// ## When This Occurs
    /// - Double-click on the confirm button, or any second confirm attempt
    ///   after the wizard settled
    #[error("Payment has already been confirmed for this checkout")]
    AlreadyPaid,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Form schemas collect them per field before any side-effecting operation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email, bad expiry).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Form payload carried the wrong JSON type for a field.
    #[error("{field} must be a {expected}")]
    WrongType { field: String, expected: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            title: "USB-C Hub".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for USB-C Hub: available 3, requested 5"
        );

        let err = CoreError::PaymentNotReady {
            step: WizardStep::Review,
        };
        assert_eq!(
            err.to_string(),
            "Checkout is at Review, payment can only be confirmed at the final step"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "full_name".to_string(),
        };
        assert_eq!(err.to_string(), "full_name is required");

        let err = ValidationError::WrongType {
            field: "phone".to_string(),
            expected: "string".to_string(),
        };
        assert_eq!(err.to_string(), "phone must be a string");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "city".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
