use std::env;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_METRICS_PORT: u16 = 9090;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Port of the separate Prometheus listener.
    pub metrics_port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: crate::parse_or(&lookup, "PORT", DEFAULT_PORT),
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            database_max_connections: crate::parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )
            .max(1),
            metrics_port: crate::parse_or(&lookup, "METRICS_PORT", DEFAULT_METRICS_PORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup_from;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 4000);
        assert_eq!(config.database_url, None);
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.metrics_port, 9090);
    }

    #[test]
    fn test_reads_values() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/userhub"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
            ("METRICS_PORT", "9100"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/userhub")
        );
        assert_eq!(config.database_max_connections, 1);
        assert_eq!(config.metrics_port, 9100);
    }

    #[test]
    fn test_invalid_port_uses_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "99999")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
