//! Checkout-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | SignatureMismatch | 400 |

use thiserror::Error;

/// Errors from checkout request validation and verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A request field was missing or malformed.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// A supplied signature did not match the expected one.
    #[error("invalid signature")]
    SignatureMismatch,
}

impl CheckoutError {
    pub fn validation(field: &'static str, message: &'static str) -> Self {
        CheckoutError::Validation { field, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_uses_message_only() {
        let err = CheckoutError::validation("amount", "amount required");
        assert_eq!(err.to_string(), "amount required");
    }

    #[test]
    fn signature_mismatch_display() {
        assert_eq!(CheckoutError::SignatureMismatch.to_string(), "invalid signature");
    }
}
