//! HTTP DTOs for the payments endpoints.
//!
//! These types define the JSON request/response structure and are the
//! boundary between HTTP and the domain.

use serde::{Deserialize, Serialize};

use crate::ports::Order;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/payments/create-order`.
///
/// `amount` stays raw JSON so a missing field, a string, or a fractional
/// number all reach domain validation (and its 400) instead of being
/// rejected by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub receipt: Option<String>,
}

/// Body of `POST /api/payments/verify`, as posted by the checkout widget.
///
/// All three fields are required; they are `Option` only so that a missing
/// one produces the route's own 400 rather than a deserializer rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response of `POST /api/payments/create-order`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    /// The vendor order object, unmodified.
    pub order: Order,
}

/// Response of `POST /api/payments/verify`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub ok: bool,
    pub msg: &'static str,
}

/// Response of `GET /config`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    /// The public gateway key id, or null when not configured.
    pub key: Option<String>,
}

/// Structured JSON error body. Secrets never appear here.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_order_request_accepts_partial_body() {
        let request: CreateOrderRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.amount.is_none());
        assert!(request.currency.is_none());

        let request: CreateOrderRequest =
            serde_json::from_value(json!({ "amount": "not-a-number" })).unwrap();
        assert_eq!(request.amount, Some(json!("not-a-number")));
    }

    #[test]
    fn verify_request_tolerates_missing_fields() {
        let request: VerifyRequest =
            serde_json::from_value(json!({ "razorpay_order_id": "order_1" })).unwrap();
        assert_eq!(request.razorpay_order_id.as_deref(), Some("order_1"));
        assert!(request.razorpay_signature.is_none());
    }

    #[test]
    fn error_response_omits_absent_details() {
        let body = serde_json::to_value(ErrorResponse::new("missing parameters")).unwrap();
        assert_eq!(body, json!({ "error": "missing parameters" }));

        let body =
            serde_json::to_value(ErrorResponse::with_details("could not create order", "down"))
                .unwrap();
        assert_eq!(
            body,
            json!({ "error": "could not create order", "details": "down" })
        );
    }
}
