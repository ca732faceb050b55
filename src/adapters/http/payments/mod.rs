//! HTTP adapter for the payments endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ConfigResponse, CreateOrderRequest, CreateOrderResponse, ErrorResponse, VerifyRequest,
    VerifyResponse,
};
pub use handlers::PaymentsAppState;
pub use routes::{checkout_router, payments_routes, webhook_routes};
