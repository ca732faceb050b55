//! Server entrypoint.
//!
//! Loads and validates configuration (aborting immediately when the
//! secrets are missing), wires the Razorpay gateway and verifiers into the
//! router, and serves the checkout page from the static directory.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use razorpay_checkout::adapters::http::middleware::{rate_limit_middleware, FixedWindowLimiter};
use razorpay_checkout::adapters::http::{checkout_router, PaymentsAppState};
use razorpay_checkout::adapters::razorpay::{RazorpayConfig, RazorpayGateway};
use razorpay_checkout::config::{AppConfig, ServerConfig};
use razorpay_checkout::domain::checkout::{PaymentVerifier, WebhookVerifier};

#[tokio::main]
async fn main() {
    // Fail fast: the secrets are required before the first request is served.
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("configuration error: {e}");
        std::process::exit(1);
    });
    if let Err(e) = config.validate() {
        eprintln!("configuration error: {e}");
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if config.payment.is_live_mode() {
        tracing::info!("Razorpay live mode");
    } else {
        tracing::info!("Razorpay test mode");
    }

    let payment = &config.payment;
    let state = PaymentsAppState {
        gateway: Arc::new(RazorpayGateway::new(RazorpayConfig::from_payment_config(
            payment,
        ))),
        payment_verifier: Arc::new(PaymentVerifier::new(payment.key_secret.clone())),
        webhook_verifier: Arc::new(WebhookVerifier::new(payment.webhook_secret.clone())),
        public_key_id: Some(payment.key_id.clone()),
    };

    let limiter = Arc::new(FixedWindowLimiter::with_defaults());

    let mut app = checkout_router()
        .with_state(state)
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(middleware::from_fn_with_state(limiter, rate_limit_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.server) {
        app = app.layer(cors);
    }

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap_or_else(|e| {
        eprintln!("failed to bind {addr}: {e}");
        std::process::exit(1);
    });

    tracing::info!("Server started on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap_or_else(|e| {
        eprintln!("server error: {e}");
        std::process::exit(1);
    });
}

/// CORS layer for the configured origins, if any.
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    )
}
