//! Ports - interfaces the adapters implement.

mod payment_gateway;

pub use payment_gateway::{GatewayError, Order, PaymentGateway};
