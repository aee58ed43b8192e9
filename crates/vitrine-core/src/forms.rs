//! # Form Schemas
//!
//! Declared validation schemas for the checkout forms. Every side-effecting
//! operation that consumes shopper-entered data runs its schema first and
//! refuses the payload unless the whole form passes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Form Validation Flow                           │
//! │                                                                     │
//! │  JSON payload ──► FormSchema::validate ──► Ok(())  ──► operation    │
//! │  (untrusted)            │                                runs       │
//! │                         └─────────► Err(Vec<ValidationError>)       │
//! │                                     every failing field reported,   │
//! │                                     operation never starts          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation collects ALL field errors instead of stopping at the first
//! one, so the UI can mark every broken field in a single round trip.

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::ShippingAddress;
use crate::validation;

// =============================================================================
// Field Rules
// =============================================================================

/// What shape a field's text must take, beyond its length bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; only the length bounds apply.
    Text,
    /// Must parse as an email address.
    Email,
    /// Must be a phone number (digits plus separators, 7 to 15 digits).
    Phone,
    /// ASCII digits only.
    Digits,
    /// Card expiry in MM/YY form.
    Expiry,
}

/// Validation rule for a single form field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Key in the JSON payload.
    pub name: &'static str,
    /// Shape requirement applied after trimming.
    pub kind: FieldKind,
    /// Required fields reject missing, null, and whitespace-only values.
    pub required: bool,
    /// Minimum length in characters, after trimming.
    pub min_len: usize,
    /// Maximum length in characters, after trimming.
    pub max_len: usize,
}

impl FieldRule {
    const fn required(name: &'static str, kind: FieldKind, min_len: usize, max_len: usize) -> Self {
        FieldRule {
            name,
            kind,
            required: true,
            min_len,
            max_len,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind, min_len: usize, max_len: usize) -> Self {
        FieldRule {
            name,
            kind,
            required: false,
            min_len,
            max_len,
        }
    }
}

// =============================================================================
// Form Schemas
// =============================================================================

/// A named set of field rules for one form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    /// Schema name, used in logs.
    pub name: &'static str,
    /// Rules, one per field.
    pub fields: Vec<FieldRule>,
}

impl FormSchema {
    /// The shipping address form collected at the Payment step.
    pub fn shipping_address() -> Self {
        FormSchema {
            name: "shipping_address",
            fields: vec![
                FieldRule::required("full_name", FieldKind::Text, 1, 100),
                FieldRule::required("phone", FieldKind::Phone, 7, 20),
                FieldRule::required("line1", FieldKind::Text, 1, 200),
                FieldRule::optional("line2", FieldKind::Text, 0, 200),
                FieldRule::required("city", FieldKind::Text, 1, 100),
                FieldRule::required("postal_code", FieldKind::Text, 3, 20),
            ],
        }
    }

    /// The payment card form collected at the Payment step.
    ///
    /// Card fields are validated and then dropped: nothing in the client
    /// stores, logs, or forwards the raw card data.
    pub fn payment_card() -> Self {
        FormSchema {
            name: "payment_card",
            fields: vec![
                FieldRule::required("card_number", FieldKind::Digits, 12, 19),
                FieldRule::required("expiry", FieldKind::Expiry, 5, 5),
                FieldRule::required("cvc", FieldKind::Digits, 3, 4),
                FieldRule::required("cardholder", FieldKind::Text, 1, 100),
            ],
        }
    }

    /// Checks a JSON payload against every field rule.
    ///
    /// ## Returns
    /// `Ok(())` when the whole form passes, otherwise every failure found.
    /// Optional fields that are missing, null, or blank skip their shape
    /// and length checks entirely.
    pub fn validate(&self, payload: &Value) -> Result<(), Vec<ValidationError>> {
        let object = match payload.as_object() {
            Some(object) => object,
            None => {
                return Err(vec![ValidationError::WrongType {
                    field: "form".to_string(),
                    expected: "object".to_string(),
                }])
            }
        };

        let mut errors = Vec::new();

        for rule in &self.fields {
            let raw = match object.get(rule.name) {
                Some(Value::Null) | None => {
                    if rule.required {
                        errors.push(ValidationError::Required {
                            field: rule.name.to_string(),
                        });
                    }
                    continue;
                }
                Some(value) => value,
            };

            let text = match raw.as_str() {
                Some(text) => text.trim(),
                None => {
                    errors.push(ValidationError::WrongType {
                        field: rule.name.to_string(),
                        expected: "string".to_string(),
                    });
                    continue;
                }
            };

            if text.is_empty() {
                if rule.required {
                    errors.push(ValidationError::Required {
                        field: rule.name.to_string(),
                    });
                }
                continue;
            }

            let length = text.chars().count();
            if length < rule.min_len {
                errors.push(ValidationError::TooShort {
                    field: rule.name.to_string(),
                    min: rule.min_len,
                });
            } else if length > rule.max_len {
                errors.push(ValidationError::TooLong {
                    field: rule.name.to_string(),
                    max: rule.max_len,
                });
            }

            let shape = match rule.kind {
                FieldKind::Text => Ok(()),
                FieldKind::Email => validation::validate_email(rule.name, text),
                FieldKind::Phone => validation::validate_phone(rule.name, text),
                FieldKind::Digits => validation::validate_digits(rule.name, text),
                FieldKind::Expiry => validation::validate_expiry(rule.name, text),
            };
            if let Err(error) = shape {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Builds a [`ShippingAddress`] from a form payload that already passed
/// [`FormSchema::shipping_address`] validation.
///
/// Parsing is total: fields the schema proved present come through trimmed,
/// and anything else collapses to empty rather than panicking.
pub fn parse_shipping_address(form: &Value) -> ShippingAddress {
    let text = |name: &str| -> String {
        form.get(name)
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string()
    };

    let line2 = text("line2");
    ShippingAddress {
        full_name: text("full_name"),
        phone: text("phone"),
        line1: text("line1"),
        line2: if line2.is_empty() { None } else { Some(line2) },
        city: text("city"),
        postal_code: text("postal_code"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_shipping_form() -> Value {
        json!({
            "full_name": "Ada Lovelace",
            "phone": "+1 (555) 010-7788",
            "line1": "12 Analytical Way",
            "line2": "",
            "city": "London",
            "postal_code": "EC1A 1BB",
        })
    }

    fn valid_card_form() -> Value {
        json!({
            "card_number": "4242424242424242",
            "expiry": "12/29",
            "cvc": "123",
            "cardholder": "Ada Lovelace",
        })
    }

    #[test]
    fn test_shipping_schema_accepts_valid_form() {
        let schema = FormSchema::shipping_address();
        assert!(schema.validate(&valid_shipping_form()).is_ok());
    }

    #[test]
    fn test_payment_schema_accepts_valid_form() {
        let schema = FormSchema::payment_card();
        assert!(schema.validate(&valid_card_form()).is_ok());
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let schema = FormSchema::shipping_address();
        let errors = schema.validate(&json!({})).unwrap_err();

        // line2 is optional, every other field reports Required
        assert_eq!(errors.len(), 5);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ValidationError::Required { .. })));
    }

    #[test]
    fn test_null_and_blank_count_as_missing() {
        let schema = FormSchema::shipping_address();
        let mut form = valid_shipping_form();
        form["full_name"] = Value::Null;
        form["city"] = json!("   ");

        let errors = schema.validate(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        let fields: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert!(fields.contains(&"full_name is required".to_string()));
        assert!(fields.contains(&"city is required".to_string()));
    }

    #[test]
    fn test_non_string_value_is_a_type_error() {
        let schema = FormSchema::shipping_address();
        let mut form = valid_shipping_form();
        form["postal_code"] = json!(10115);

        let errors = schema.validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::WrongType { field, .. } if field == "postal_code"
        ));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let schema = FormSchema::payment_card();
        let errors = schema.validate(&json!("not a form")).unwrap_err();
        assert!(matches!(&errors[0], ValidationError::WrongType { field, .. } if field == "form"));
    }

    #[test]
    fn test_length_bounds_are_enforced() {
        let schema = FormSchema::payment_card();
        let mut form = valid_card_form();
        form["card_number"] = json!("4242");

        let errors = schema.validate(&form).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::TooShort { field, min: 12 } if field == "card_number")));
    }

    #[test]
    fn test_shape_checks_run_per_kind() {
        let schema = FormSchema::payment_card();
        let mut form = valid_card_form();
        form["card_number"] = json!("4242-4242-4242-4242");
        form["expiry"] = json!("13/29");

        let errors = schema.validate(&form).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert!(messages.iter().any(|m| m.starts_with("card_number")));
        assert!(messages.iter().any(|m| m.starts_with("expiry")));
    }

    #[test]
    fn test_optional_blank_field_skips_checks() {
        let schema = FormSchema::shipping_address();
        let mut form = valid_shipping_form();
        form.as_object_mut()
            .expect("fixture is an object")
            .remove("line2");

        assert!(schema.validate(&form).is_ok());
    }

    #[test]
    fn test_parse_shipping_address_trims_and_drops_blank_line2() {
        let address = parse_shipping_address(&valid_shipping_form());
        assert_eq!(address.full_name, "Ada Lovelace");
        assert_eq!(address.line2, None);

        let mut form = valid_shipping_form();
        form["line2"] = json!("  Flat 4 ");
        let address = parse_shipping_address(&form);
        assert_eq!(address.line2, Some("Flat 4".to_string()));
    }
}
