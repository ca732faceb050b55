//! Axum router configuration for the checkout endpoints.

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_order, get_config, handle_webhook, health, verify_payment, PaymentsAppState,
};

/// JSON bodies above this are rejected (100 KiB).
const MAX_BODY_BYTES: usize = 100 * 1024;

/// Payment API routes.
///
/// - `POST /create-order` - create a gateway order
/// - `POST /verify` - verify a payment signature after checkout
pub fn payments_routes() -> Router<PaymentsAppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/verify", post(verify_payment))
}

/// Webhook routes.
///
/// Separate from the payment routes because the webhook reads the raw body
/// and authenticates via signature rather than any session.
///
/// - `POST /razorpay` - signature-verified event notifications
pub fn webhook_routes() -> Router<PaymentsAppState> {
    Router::new().route("/razorpay", post(handle_webhook))
}

/// The complete checkout router.
///
/// # Routes
///
/// - `GET /config` - public gateway key for the browser
/// - `GET /health` - liveness probe
/// - `POST /api/payments/create-order`
/// - `POST /api/payments/verify`
/// - `POST /webhook/razorpay`
///
/// Static assets are mounted as a fallback by the binary, not here, so the
/// router stays testable without a filesystem.
pub fn checkout_router() -> Router<PaymentsAppState> {
    Router::new()
        .route("/config", get(get_config))
        .route("/health", get(health))
        .nest("/api/payments", payments_routes())
        .nest("/webhook", webhook_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
