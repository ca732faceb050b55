//! Mock payment gateway for tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::checkout::OrderRequest;
use crate::ports::{GatewayError, Order, PaymentGateway};

/// In-memory gateway that records every request it receives.
///
/// Returns a deterministic order echoing the requested amount and currency,
/// or a configured failure.
pub struct MockPaymentGateway {
    requests: Mutex<Vec<OrderRequest>>,
    failure: Mutex<Option<GatewayError>>,
    counter: AtomicU64,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
            counter: AtomicU64::new(0),
        }
    }

    /// A gateway whose next calls all fail with the given error.
    pub fn failing(error: GatewayError) -> Self {
        let gateway = Self::new();
        *gateway.failure.lock().unwrap() = Some(error);
        gateway
    }

    /// Requests received so far, in order.
    pub fn recorded_requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, request: OrderRequest) -> Result<Order, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let mut extra = serde_json::Map::new();
        extra.insert("status".to_string(), "created".into());
        extra.insert("attempts".to_string(), 0.into());
        extra.insert("created_at".to_string(), 1704067200.into());

        Ok(Order {
            id: format!("order_mock{:06}", n),
            amount: request.amount,
            currency: request.currency,
            receipt: Some(request.receipt),
            extra,
        })
    }
}
