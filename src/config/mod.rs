//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `GROCERY_STORE` prefix; nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use grocery_orders::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! ```

mod error;
mod logging;
mod orders;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use orders::OrderRules;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Order and review business rules
    #[serde(default)]
    pub orders: OrderRules,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GROCERY_STORE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `GROCERY_STORE__ORDERS__ENFORCE_STATUS_TRANSITIONS=true`
    /// - `GROCERY_STORE__LOGGING__LEVEL=debug`
    ///
    /// The loaded values are validated before they are returned.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GROCERY_STORE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}
