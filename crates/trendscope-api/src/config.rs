//! Server configuration from the environment.

use std::net::SocketAddr;

use axum::http::HeaderValue;

use trendscope_core::{defaults, Error, Result};

/// Origins allowed when `ALLOWED_ORIGINS` is unset or empty.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::SERVER_HOST.to_string(),
            port: defaults::SERVER_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `HOST` and `PORT`. An unparseable port falls back to the default.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| defaults::SERVER_HOST.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults::SERVER_PORT),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid bind address: {}", e)))
    }
}

/// Parse a comma-separated origin list into CORS header values.
///
/// Blank entries are skipped and invalid ones logged and dropped. An empty
/// list yields the local development origins.
pub fn parse_allowed_origins(raw: Option<&str>) -> Vec<HeaderValue> {
    let raw = raw.unwrap_or_default();
    if raw.trim().is_empty() {
        return DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|o| HeaderValue::from_static(o))
            .collect();
    }

    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

/// Allowed origins from `ALLOWED_ORIGINS`.
pub fn allowed_origins_from_env() -> Vec<HeaderValue> {
    parse_allowed_origins(std::env::var("ALLOWED_ORIGINS").ok().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 80,
        };
        assert!(matches!(config.socket_addr(), Err(Error::Config(_))));
    }

    #[test]
    fn test_origins_default_when_unset_or_blank() {
        assert_eq!(parse_allowed_origins(None).len(), 2);
        assert_eq!(parse_allowed_origins(Some("  ")).len(), 2);
    }

    #[test]
    fn test_origins_parsed_and_trimmed() {
        let origins = parse_allowed_origins(Some("https://a.example, ,https://b.example"));
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ]
        );
    }

    #[test]
    fn test_invalid_origin_dropped() {
        let origins = parse_allowed_origins(Some("https://ok.example,bad\norigin"));
        assert_eq!(origins.len(), 1);
    }
}
