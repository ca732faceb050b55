//! Rate limiting middleware for axum.
//!
//! Fixed-window per-IP limiting, 60 requests per minute by default. State
//! is in-memory: the service is a single process and the window resets on
//! restart, which is acceptable for abuse protection on a checkout form.
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, Router};
//! use std::sync::Arc;
//!
//! let limiter = Arc::new(FixedWindowLimiter::with_defaults());
//! let app = Router::new()
//!     .layer(middleware::from_fn_with_state(limiter, rate_limit_middleware));
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Rate limiter middleware state.
pub type RateLimiterState = Arc<FixedWindowLimiter>;

/// In-memory fixed-window counter keyed by client IP.
pub struct FixedWindowLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, WindowEntry>>,
}

struct WindowEntry {
    started_at: Instant,
    count: u32,
}

/// Outcome of a limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitDecision {
    Allowed { remaining: u32 },
    Denied { retry_after_secs: u64 },
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// 60 requests per minute, the limit the checkout flow ships with.
    pub fn with_defaults() -> Self {
        Self::new(60, Duration::from_secs(60))
    }

    /// Counts a request against the client's current window.
    pub fn check(&self, client_ip: &str) -> LimitDecision {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap();

        let entry = windows
            .entry(client_ip.to_string())
            .or_insert(WindowEntry {
                started_at: now,
                count: 0,
            });

        if now.duration_since(entry.started_at) >= self.window {
            entry.started_at = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            let elapsed = now.duration_since(entry.started_at);
            let retry_after_secs = self.window.saturating_sub(elapsed).as_secs().max(1);
            return LimitDecision::Denied { retry_after_secs };
        }

        entry.count += 1;
        LimitDecision::Allowed {
            remaining: self.max_requests - entry.count,
        }
    }
}

/// Per-IP rate limiting middleware.
///
/// Fails open when no client IP can be determined so a proxy
/// misconfiguration degrades to no limiting rather than a dead service.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(client_ip) = extract_client_ip(&request, connect_info.as_ref()) else {
        return next.run(request).await;
    };

    match limiter.check(&client_ip) {
        LimitDecision::Denied { retry_after_secs } => {
            tracing::warn!(%client_ip, "Rate limit exceeded");
            rate_limit_response(retry_after_secs)
        }
        LimitDecision::Allowed { .. } => next.run(request).await,
    }
}

/// Extract client IP from request, checking forwarded headers first.
///
/// Order of precedence:
/// 1. X-Forwarded-For header (first IP in list)
/// 2. ConnectInfo socket address
fn extract_client_ip<B>(
    request: &axum::http::Request<B>,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    if let Some(forwarded) = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded.split(',').next() {
            let first_ip = first_ip.trim();
            if !first_ip.is_empty() {
                return Some(first_ip.to_string());
            }
        }
    }

    connect_info.map(|ci| ci.0.ip().to_string())
}

/// Create a 429 Too Many Requests response.
fn rate_limit_response(retry_after_secs: u64) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(serde_json::json!({
            "error": "too many requests",
            "retry_after_secs": retry_after_secs
        })),
    )
        .into_response();

    response.headers_mut().insert(
        "Retry-After",
        HeaderValue::from_str(&retry_after_secs.to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("60")),
    );
    response
}
