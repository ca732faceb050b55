//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the Razorpay Orders API.
//!
//! # Security
//!
//! - The key secret is handled via `secrecy::SecretString` and only used
//!   for HTTP basic auth against the vendor
//! - Vendor error messages are passed through to callers; the secret never
//!   appears in errors or logs
//!
//! # Configuration
//!
//! Built from [`crate::config::PaymentConfig`] (`CHECKOUT__PAYMENT__KEY_ID`
//! and `CHECKOUT__PAYMENT__KEY_SECRET`).

mod mock_gateway;
mod razorpay_adapter;

pub use mock_gateway::MockPaymentGateway;
pub use razorpay_adapter::{RazorpayConfig, RazorpayGateway};
