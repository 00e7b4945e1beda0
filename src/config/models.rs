// src/config/models.rs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Settings for one acceptor instance.
///
/// `port` 0 is valid and asks the OS for an ephemeral port. A missing
/// `max_connections` means unbounded, matching the default accept behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default)]
    pub max_connections: Option<usize>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.max_connections {
            if limit == 0 {
                bail!("max_connections must be at least 1 when set");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yaml_with_defaults() {
        let config: ServerConfig = serde_yaml::from_str("port: 2525\n").unwrap();
        assert_eq!(config.port, 2525);
        assert!(config.max_connections.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_json_with_limit() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"port": 110, "max_connections": 64}"#).unwrap();
        assert_eq!(config.port, 110);
        assert_eq!(config.max_connections, Some(64));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_connection_limit() {
        let config = ServerConfig {
            port: 2525,
            max_connections: Some(0),
        };
        assert!(config.validate().is_err());
    }
}
