//! Payment configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Razorpay)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Razorpay key id (public, exposed to the browser via `/config`)
    pub key_id: String,

    /// Razorpay key secret (signs payment signatures, never leaves the server)
    pub key_secret: String,

    /// Webhook signing secret, configured in the Razorpay dashboard.
    /// Empty when webhooks are not set up.
    #[serde(default)]
    pub webhook_secret: String,
}

impl PaymentConfig {
    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key_id.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__KEY_ID"));
        }
        if self.key_secret.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__KEY_SECRET"));
        }

        // Verify the key prefix for safety
        if !self.key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidRazorpayKey);
        }

        Ok(())
    }
}
