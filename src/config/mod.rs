//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHECKOUT_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use razorpay_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod payment;
mod server;

pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration.
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, static assets)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment configuration (Razorpay keys and webhook secret)
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// This function:
    /// 1. Loads a `.env` file if present (for development)
    /// 2. Reads environment variables with the `CHECKOUT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CHECKOUT__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `CHECKOUT__PAYMENT__KEY_ID=rzp_test_xxx` -> `payment.key_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHECKOUT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    /// Startup must abort on error: the secrets are required before the
    /// first request is served.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("CHECKOUT__PAYMENT__KEY_ID", "rzp_test_abc123");
        env::set_var("CHECKOUT__PAYMENT__KEY_SECRET", "secret123");
    }

    fn clear_env() {
        env::remove_var("CHECKOUT__PAYMENT__KEY_ID");
        env::remove_var("CHECKOUT__PAYMENT__KEY_SECRET");
        env::remove_var("CHECKOUT__PAYMENT__WEBHOOK_SECRET");
        env::remove_var("CHECKOUT__SERVER__PORT");
        env::remove_var("CHECKOUT__SERVER__STATIC_DIR");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.payment.key_id, "rzp_test_abc123");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "public");
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CHECKOUT__SERVER__PORT", "8080");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_missing_secrets_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();
        assert!(result.is_err());
    }
}
