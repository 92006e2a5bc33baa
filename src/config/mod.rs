//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `SALES_SIM` prefix and nested values
//! use double underscores as separators. Every section has defaults, so an
//! empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use sales_sim::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Objection probability: {}", config.simulation.objection_probability);
//! ```

mod error;
mod logging;
mod simulation;

pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};
pub use simulation::SimulationConfig;

use serde::Deserialize;

use crate::domain::simulation::PersonaConfig;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine thresholds and probabilities
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Console trainer settings
    #[serde(default)]
    pub trainer: TrainerConfig,
}

/// Console trainer settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Simulated client for console sessions
    pub persona: PersonaConfig,

    /// Fixed RNG seed for reproducible runs. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SALES_SIM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SALES_SIM__SIMULATION__OBJECTION_PROBABILITY=0.5`
    /// - `SALES_SIM__TRAINER__PERSONA__DIFFICULTY=expert`
    /// - `SALES_SIM__TRAINER__SEED=42`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SALES_SIM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for probabilities outside [0, 1], inverted
    /// bounds, zero thresholds or an unparseable log level.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.simulation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
