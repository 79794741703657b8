//! Service configuration, read from the environment.
//!
//! Variables use the `STYLESENSE` prefix with `__` between path segments,
//! so `STYLESENSE__SERVER__PORT=8080` sets `server.port`. A `.env` file in
//! the working directory is loaded first when present.
//!
//! ```no_run
//! use stylesense::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("bad configuration");
//! println!("listening on port {}", config.server.port);
//! ```

mod database;
mod error;
mod features;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "STYLESENSE";
const ENV_SEPARATOR: &str = "__";

/// Hosting platforms hand the listen port over in this variable.
const PLATFORM_PORT_VAR: &str = "PORT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// `None` runs the service without persistence.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads configuration from `.env` and the process environment.
    ///
    /// A plain `PORT` variable takes precedence over `STYLESENSE__SERVER__PORT`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let platform_port = std::env::var(PLATFORM_PORT_VAR).ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .set_override_option("server.port", platform_port)?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// [`load`](Self::load) followed by [`validate`](Self::validate).
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        match &self.database {
            Some(database) => database.validate(),
            None => Ok(()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// True when a store should be opened at startup.
    pub fn persistence_enabled(&self) -> bool {
        self.features.persist_recommendations && self.database.is_some()
    }
}
