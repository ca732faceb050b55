//! Order request validation.

use serde_json::Value;

use super::errors::CheckoutError;

/// Currency used when the request does not name one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// A validated request to create a gateway order.
///
/// Amounts are in the smallest currency unit (paise for INR: 100 = Rs 1.00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
}

impl OrderRequest {
    /// Validates the raw request fields and applies defaults.
    ///
    /// The amount arrives as raw JSON so that a missing field, a string, or
    /// a fractional number all produce the same validation error instead of
    /// a deserializer rejection. It must be a positive integer.
    ///
    /// Currency defaults to [`DEFAULT_CURRENCY`]; the receipt defaults to a
    /// timestamp-derived identifier.
    pub fn from_parts(
        amount: Option<&Value>,
        currency: Option<String>,
        receipt: Option<String>,
    ) -> Result<Self, CheckoutError> {
        let amount = amount
            .and_then(Value::as_i64)
            .filter(|amount| *amount > 0)
            .ok_or_else(|| {
                CheckoutError::validation(
                    "amount",
                    "amount (number, in smallest currency unit) required",
                )
            })?;

        let currency = currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let receipt = receipt.unwrap_or_else(default_receipt);

        Ok(Self {
            amount,
            currency,
            receipt,
        })
    }
}

fn default_receipt() -> String {
    format!("rcpt_{}", chrono::Utc::now().timestamp_millis())
}
