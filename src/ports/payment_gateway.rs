//! Payment gateway port.
//!
//! Narrow contract for the one vendor operation the checkout flow needs:
//! creating an order. Keeping the surface to a single method lets the
//! vendor be swapped or mocked in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::checkout::OrderRequest;

/// Port for payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order configured for auto-capture.
    ///
    /// The returned order is handed to the client unmodified; the gateway
    /// is the source of truth for its contents.
    async fn create_order(&self, request: OrderRequest) -> Result<Order, GatewayError>;
}

/// Order as returned by the gateway, treated as a pass-through value.
///
/// Known fields are typed; everything else the vendor sends (status,
/// attempts, notes, created_at, ...) is preserved in `extra` and serialized
/// back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Vendor order id (`order_...`), consumed by the checkout widget.
    pub id: String,

    /// Amount in the smallest currency unit.
    pub amount: i64,

    /// ISO currency code.
    pub currency: String,

    /// Receipt identifier, echoed back by the vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,

    /// Remaining vendor fields, passed through as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Errors from gateway operations. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The vendor could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The vendor rejected the call (auth, quota, bad request).
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// The vendor responded with something we could not parse.
    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),
}
