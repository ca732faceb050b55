//! HTTP handlers for the payments endpoints.
//!
//! Each handler is stateless: every decision is a pure function of the
//! request and the two read-only secrets held in the shared state.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::domain::checkout::{CheckoutError, OrderRequest, PaymentVerifier, WebhookVerifier};
use crate::ports::{GatewayError, PaymentGateway};

use super::dto::{
    ConfigResponse, CreateOrderRequest, CreateOrderResponse, ErrorResponse, VerifyRequest,
    VerifyResponse,
};

/// Name of the signature header Razorpay sends with webhooks.
pub const WEBHOOK_SIGNATURE_HEADER: &str = "x-razorpay-signature";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state, cloned per request.
///
/// The verifiers hold the two secrets, read-only after startup; the gateway
/// is the only outbound dependency.
#[derive(Clone)]
pub struct PaymentsAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub payment_verifier: Arc<PaymentVerifier>,
    pub webhook_verifier: Arc<WebhookVerifier>,
    /// Public key id exposed via `/config`; null until configured.
    pub public_key_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /config - expose the public gateway key to the browser.
pub async fn get_config(State(state): State<PaymentsAppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        key: state.public_key_id.clone(),
    })
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// POST /api/payments/create-order - create a gateway order for checkout.
pub async fn create_order(
    State(state): State<PaymentsAppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    let order_request =
        OrderRequest::from_parts(request.amount.as_ref(), request.currency, request.receipt)?;

    tracing::debug!(
        amount = order_request.amount,
        currency = %order_request.currency,
        "Creating order"
    );

    let order = state.gateway.create_order(order_request).await?;
    Ok(Json(CreateOrderResponse { order }))
}

/// POST /api/payments/verify - check the signature the checkout widget
/// returned after payment.
pub async fn verify_payment(
    State(state): State<PaymentsAppState>,
    Json(request): Json<VerifyRequest>,
) -> Response {
    let (Some(order_id), Some(payment_id), Some(signature)) = (
        request.razorpay_order_id,
        request.razorpay_payment_id,
        request.razorpay_signature,
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("missing parameters")),
        )
            .into_response();
    };

    if state
        .payment_verifier
        .verify(&order_id, &payment_id, &signature)
    {
        tracing::info!(%order_id, %payment_id, "Payment signature verified");
        Json(VerifyResponse {
            ok: true,
            msg: "signature verified",
        })
        .into_response()
    } else {
        tracing::warn!(%order_id, %payment_id, "Invalid payment signature");
        (
            StatusCode::BAD_REQUEST,
            Json(VerifyResponse {
                ok: false,
                msg: "invalid signature",
            }),
        )
            .into_response()
    }
}

/// POST /webhook/razorpay - confirm asynchronous payment events.
///
/// Takes `Bytes` so the HMAC is computed over the exact bytes received,
/// before any JSON parsing. Responses are plain text, matching what
/// Razorpay expects to see.
pub async fn handle_webhook(
    State(state): State<PaymentsAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(signature) = headers
        .get(WEBHOOK_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
    else {
        tracing::warn!("Webhook missing signature header");
        return (StatusCode::BAD_REQUEST, "missing signature").into_response();
    };

    if !state.webhook_verifier.verify(&body, signature) {
        tracing::warn!("Invalid webhook signature");
        return (StatusCode::BAD_REQUEST, "invalid signature").into_response();
    }

    // The event's business meaning is out of scope; the type is logged for
    // operators. A valid signature with an unparseable body still acks.
    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(payload) => {
            let event = payload
                .get("event")
                .and_then(|e| e.as_str())
                .unwrap_or("unknown");
            tracing::info!(%event, "Webhook received");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Webhook body was not valid JSON");
        }
    }

    (StatusCode::OK, "ok").into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain and gateway errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Checkout(CheckoutError),
    Gateway(GatewayError),
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError::Checkout(err)
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError::Gateway(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Checkout(err) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string()))).into_response()
            }
            ApiError::Gateway(err) => {
                tracing::error!(error = %err, "Gateway call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_details(
                        "could not create order",
                        err.to_string(),
                    )),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_error_maps_to_400() {
        let response =
            ApiError::from(CheckoutError::validation("amount", "amount required")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn gateway_error_maps_to_500() {
        let response =
            ApiError::from(GatewayError::Network("connection refused".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
