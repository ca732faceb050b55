//! Checkout domain: order requests, signature verification, and the
//! checkout-form validation rules mirrored by the browser page.

mod errors;
mod form;
mod order;
mod signature;

pub use errors::CheckoutError;
pub use form::{CheckoutForm, CheckoutSubmission, Field, SubmitOutcome};
pub use order::{OrderRequest, DEFAULT_CURRENCY};
pub use signature::{PaymentVerifier, WebhookVerifier};
