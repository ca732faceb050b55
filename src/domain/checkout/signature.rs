//! Razorpay signature verification.
//!
//! Two independent schemes share the same primitive:
//!
//! - Payment: `hex(HMAC-SHA256(key_secret, order_id + "|" + payment_id))`,
//!   supplied by the checkout widget after payment completes.
//! - Webhook: `hex(HMAC-SHA256(webhook_secret, raw_body))`, supplied in the
//!   `x-razorpay-signature` header.
//!
//! A verification decision is a pure function of (secret, message bytes,
//! supplied signature). Comparison is byte-for-byte over the hex strings and
//! constant-time to avoid a timing side channel.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verifier for payment signatures returned by the checkout widget.
pub struct PaymentVerifier {
    key_secret: SecretString,
}

impl PaymentVerifier {
    /// Creates a verifier from the Razorpay key secret.
    pub fn new(key_secret: impl Into<String>) -> Self {
        Self {
            key_secret: SecretString::new(key_secret.into()),
        }
    }

    /// Computes the expected signature for an order/payment pair.
    pub fn signature(&self, order_id: &str, payment_id: &str) -> String {
        let message = format!("{}|{}", order_id, payment_id);
        hex_hmac(&self.key_secret, message.as_bytes())
    }

    /// Checks a client-supplied signature against the expected one.
    ///
    /// Equality means the payment is verified; any difference, including
    /// hex case, rejects it.
    pub fn verify(&self, order_id: &str, payment_id: &str, supplied: &str) -> bool {
        let expected = self.signature(order_id, payment_id);
        constant_time_eq(expected.as_bytes(), supplied.as_bytes())
    }
}

/// Verifier for webhook signatures.
pub struct WebhookVerifier {
    webhook_secret: SecretString,
}

impl WebhookVerifier {
    /// Creates a verifier from the webhook signing secret.
    pub fn new(webhook_secret: impl Into<String>) -> Self {
        Self {
            webhook_secret: SecretString::new(webhook_secret.into()),
        }
    }

    /// Checks a header-supplied signature against the raw request body.
    ///
    /// The HMAC must be computed over the untouched bytes as received:
    /// re-serializing the JSON can reorder keys or change whitespace and
    /// would invalidate the signature.
    pub fn verify(&self, raw_body: &[u8], supplied: &str) -> bool {
        let expected = hex_hmac(&self.webhook_secret, raw_body);
        constant_time_eq(expected.as_bytes(), supplied.as_bytes())
    }
}

fn hex_hmac(secret: &SecretString, message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time comparison of two byte slices.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
