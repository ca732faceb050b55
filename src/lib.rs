//! Razorpay Checkout - minimal hosted-checkout payment flow.
//!
//! A browser form collects customer details, the server creates a Razorpay
//! order, the client opens the hosted checkout widget, and the server
//! verifies the resulting payment signature before accepting the payment.
//! A webhook endpoint independently confirms asynchronous payment events.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
