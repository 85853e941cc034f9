//! Agenda configuration management

use serde::{Deserialize, Serialize};

/// Main Agenda configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgendaConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level when RUST_LOG is not set
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgendaConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AgendaConfig {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9090,
            },
            log: LogConfig {
                level: "debug".to_string(),
            },
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: AgendaConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 9090);
        assert_eq!(parsed.log.level, "debug");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: AgendaConfig =
            toml::from_str("[server]\nhost = \"0.0.0.0\"\nport = 3000\n").unwrap();
        assert_eq!(parsed.server.port, 3000);
        assert_eq!(parsed.log.level, "info");
    }
}
