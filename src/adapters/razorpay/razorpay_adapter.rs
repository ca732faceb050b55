//! Razorpay Orders API client.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::PaymentConfig;
use crate::domain::checkout::OrderRequest;
use crate::ports::{GatewayError, Order, PaymentGateway};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Key id (rzp_test_... or rzp_live_...), doubles as the basic auth user.
    key_id: String,

    /// Key secret, the basic auth password.
    key_secret: SecretString,

    /// Base URL for the Razorpay API (default: https://api.razorpay.com).
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Build from the validated application config.
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        Self::new(config.key_id.clone(), config.key_secret.clone())
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Razorpay payment gateway adapter.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: OrderRequest) -> Result<Order, GatewayError> {
        let url = format!("{}/v1/orders", self.config.api_base_url);

        let body = serde_json::json!({
            "amount": request.amount,
            "currency": request.currency,
            "receipt": request.receipt,
            // 1 => auto-capture; 0 would require manual capture
            "payment_capture": 1,
        });

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = vendor_error_message(&error_text);
            tracing::error!(status = status.as_u16(), error = %message, "Razorpay create order failed");
            return Err(GatewayError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let order: Order = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        tracing::debug!(order_id = %order.id, amount = order.amount, "Created Razorpay order");
        Ok(order)
    }
}

/// Razorpay error envelope: `{ "error": { "code": ..., "description": ... } }`.
#[derive(Debug, Deserialize)]
struct VendorErrorEnvelope {
    error: VendorErrorBody,
}

#[derive(Debug, Deserialize)]
struct VendorErrorBody {
    description: String,
}

/// Pulls the human-readable description out of a vendor error body, falling
/// back to the raw text for anything that isn't the documented envelope.
fn vendor_error_message(body: &str) -> String {
    serde_json::from_str::<VendorErrorEnvelope>(body)
        .map(|envelope| envelope.error.description)
        .unwrap_or_else(|_| body.to_string())
}
