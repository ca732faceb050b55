//! HTTP adapters - the axum surface of the checkout flow.

pub mod middleware;
pub mod payments;

// Re-export key types for convenience
pub use payments::checkout_router;
pub use payments::PaymentsAppState;
