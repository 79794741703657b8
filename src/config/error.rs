//! Configuration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("server host must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("database URL must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("min_connections ({min}) exceeds max_connections ({max})")]
    InvalidPoolSize { min: u32, max: u32 },

    #[error("max_connections ({requested}) exceeds the limit of {limit}")]
    PoolSizeTooLarge { requested: u32, limit: u32 },
}
