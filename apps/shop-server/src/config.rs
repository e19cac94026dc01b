//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! ## Environment Variables
//! - `SCALECARS_HOST`: bind address (default `127.0.0.1`)
//! - `SCALECARS_PORT`: listen port (default `8080`)
//! - `SCALECARS_CURRENCY_SYMBOL`: symbol used in formatted totals (default `$`)

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use scalecars_core::Money;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("SCALECARS_HOST") {
            config.host = host
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SCALECARS_HOST".to_string()))?;
        }

        if let Some(port) = lookup("SCALECARS_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SCALECARS_PORT".to_string()))?;
        }

        if let Some(symbol) = lookup("SCALECARS_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "SCALECARS_CURRENCY_SYMBOL".to_string(),
                ));
            }
            config.currency_symbol = symbol;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use scalecars_core::Money;
    /// use scalecars_shop_server::config::ServerConfig;
    ///
    /// let config = ServerConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(25998)), "$259.98");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SCALECARS_HOST", "0.0.0.0"),
            ("SCALECARS_PORT", "3000"),
            ("SCALECARS_CURRENCY_SYMBOL", "CLP$"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.format_currency(Money::from_cents(8999)), "CLP$89.99");
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup_from(&[("SCALECARS_PORT", "eighty")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SCALECARS_PORT");

        assert!(ServerConfig::from_lookup(lookup_from(&[("SCALECARS_HOST", "localhost")])).is_err());
        assert!(
            ServerConfig::from_lookup(lookup_from(&[("SCALECARS_CURRENCY_SYMBOL", " ")])).is_err()
        );
    }

    #[test]
    fn test_format_currency() {
        let config = ServerConfig::default();
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(38997)), "$389.97");
    }
}
