//! HTTP server and logging settings

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// IP address to bind; hostnames such as `localhost` are rejected
    #[serde(default = "default_host")]
    pub host: String,

    /// Also settable through a plain `PORT` variable
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Force JSON (true) or human-readable (false) logs. Unset follows the environment.
    #[serde(default)]
    pub log_json: Option<bool>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated allowed origins. Unset or `*` allows any origin.
    #[serde(default)]
    pub cors_origins: Option<String>,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn logs_as_json(&self) -> bool {
        self.log_json.unwrap_or_else(|| self.is_production())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Explicit CORS origins, or `None` when any origin is allowed.
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty() && *origin != "*")
            .map(String::from)
            .collect();

        (!origins.is_empty()).then_some(origins)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.socket_addr()?;
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_filter: default_log_filter(),
            log_json: None,
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_filter() -> String {
    "info,stylesense=debug,sqlx=warn,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8000");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn socket_addr_uses_configured_host() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn socket_addr_accepts_ipv6() {
        let config = ServerConfig {
            host: "::1".to_string(),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:3000");
    }

    #[test]
    fn hostname_is_rejected_instead_of_binding_everywhere() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert!(matches!(
            config.socket_addr(),
            Err(ValidationError::InvalidHost(ref host)) if host == "localhost"
        ));
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHost(_))
        ));
    }

    #[test]
    fn json_logs_follow_environment_unless_forced() {
        let mut config = ServerConfig::default();
        assert!(!config.logs_as_json());

        config.environment = Environment::Production;
        assert!(config.logs_as_json());

        config.log_json = Some(false);
        assert!(!config.logs_as_json());
    }

    #[test]
    fn allowed_origins_parses_comma_list() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, https://stylesense.app,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.allowed_origins(),
            Some(vec![
                "http://localhost:5173".to_string(),
                "https://stylesense.app".to_string()
            ])
        );
    }

    #[test]
    fn wildcard_or_unset_origins_allow_any() {
        assert_eq!(ServerConfig::default().allowed_origins(), None);

        let config = ServerConfig {
            cors_origins: Some(" * ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.allowed_origins(), None);
    }

    #[test]
    fn validation_rejects_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }

    #[test]
    fn validation_bounds_request_timeout() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ValidationError::InvalidTimeout)
            ));
        }
    }
}
