//! # Validation Module
//!
//! Input validation utilities for the Vitrine storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend widget (TypeScript)                                 │
//! │  ├── min/max attributes on the quantity input                          │
//! │  └── Immediate user feedback -- advisory only                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command boundary (vitrine-client)                            │
//! │  ├── THIS MODULE: field and business rule validation                   │
//! │  └── Form schemas (forms.rs) collect per-field errors                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger itself (cart.rs)                                      │
//! │  └── Quantity clamped to [1, 100] on every mutation, unconditionally   │
//! │                                                                         │
//! │  Layers 2 and 3 never rely on the widget having run                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrine_core::validation::{validate_quantity, validate_email};
//!
//! // Validate quantity before an add-to-cart call
//! validate_quantity(5).unwrap();
//!
//! // Validate an email field from a form payload
//! validate_email("email", "ada@example.com").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (100)
///
/// ## Note
/// This is the *reject* flavor used at the command boundary for explicit
/// requests. The ledger itself uses the *clamp* flavor on mutation, so an
/// out-of-range value can never be stored either way.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart: Add Item                                                         │
/// │                                                                         │
/// │  User requests quantity: 5                                             │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 100? → Error: "quantity must be between 1 and 100"     │
/// │       │                                                                 │
/// │       └── OK → Proceed with add_to_cart                                │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_LINE_QUANTITY,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, promotional lines)
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_unit_price_cents;
///
/// assert!(validate_unit_price_cents(29999).is_ok()); // $299.99
/// assert!(validate_unit_price_cents(0).is_ok());     // Free item
/// assert!(validate_unit_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_unit_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Field Format Validators
// =============================================================================
// These take the field name as a parameter because the form schemas apply
// them to differently-named fields.

/// Validates an email address field.
///
/// ## Rules
/// - Exactly one `@` with non-empty local part
/// - Domain contains a dot and no spaces
///
/// This is deliberately a plausibility check, not RFC 5322. The platform
/// verifies addresses by sending mail, not by parsing harder.
pub fn validate_email(field: &str, value: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if value.contains(' ') {
        return Err(invalid("must not contain spaces"));
    }

    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err(invalid("must be a valid email address")),
    }
}

/// Validates a phone number field.
///
/// ## Rules
/// - Only digits, spaces, `+`, `-`, `(`, `)` allowed
/// - Between 7 and 15 digits total
pub fn validate_phone(field: &str, value: &str) -> ValidationResult<()> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');

    if !value.chars().all(allowed) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain between 7 and 15 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a digits-only field (card number, CVC).
pub fn validate_digits(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a card expiry field in MM/YY form.
///
/// ## Rules
/// - Exactly `MM/YY`, month 01-12
/// - Expiry in the past is a gateway concern, not checked here
pub fn validate_expiry(field: &str, value: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be in MM/YY format".to_string(),
    };

    let (month, year) = value.split_once('/').ok_or_else(invalid)?;
    if month.len() != 2 || year.len() != 2 {
        return Err(invalid());
    }
    if !month.chars().all(|c| c.is_ascii_digit()) || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let month_num: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month_num) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "month must be between 01 and 12".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
