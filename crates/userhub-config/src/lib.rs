//! # userhub Config
//!
//! Configuration types for the userhub API.
//!
//! Each structure is loaded from environment variables once at startup and
//! then passed around as an immutable value:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`password`]: bcrypt cost
//! - [`cors`]: allowed browser origins
//! - [`server`]: listen port and database pool settings
//!
//! Every `from_env()` has a `from_lookup()` twin taking a closure, so tests
//! can supply values without touching the process environment.
//!
//! # Example
//!
//! ```ignore
//! use userhub_config::{CorsConfig, JwtConfig, PasswordConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let password_config = PasswordConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod password;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use password::PasswordConfig;
pub use server::ServerConfig;

/// Variables the server expects to find; missing ones are warned about at
/// startup and replaced by defaults where one exists.
pub const EXPECTED_ENV_VARS: [&str; 4] = ["PORT", "DATABASE_URL", "JWT_SECRET", "JWT_EXPIRES_IN"];

/// Returns the subset of [`EXPECTED_ENV_VARS`] that is unset or blank.
pub fn missing_env_vars() -> Vec<&'static str> {
    missing_from(|key| std::env::var(key).ok())
}

fn missing_from(lookup: impl Fn(&str) -> Option<String>) -> Vec<&'static str> {
    EXPECTED_ENV_VARS
        .into_iter()
        .filter(|key| lookup(key).is_none_or(|v| v.trim().is_empty()))
        .collect()
}

/// Reads `key` through `lookup` and parses it, falling back to `default` when
/// the variable is absent or unparsable.
pub(crate) fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
pub(crate) fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| {
        owned
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_from_reports_absent_and_blank() {
        let lookup = lookup_from(&[("PORT", "4000"), ("JWT_SECRET", "   ")]);
        assert_eq!(
            missing_from(lookup),
            vec!["DATABASE_URL", "JWT_SECRET", "JWT_EXPIRES_IN"]
        );
    }

    #[test]
    fn test_missing_from_all_present() {
        let lookup = lookup_from(&[
            ("PORT", "4000"),
            ("DATABASE_URL", "postgres://localhost/userhub"),
            ("JWT_SECRET", "secret"),
            ("JWT_EXPIRES_IN", "1h"),
        ]);
        assert!(missing_from(lookup).is_empty());
    }

    #[test]
    fn test_parse_or_falls_back() {
        let lookup = lookup_from(&[("A", "12"), ("B", "twelve")]);
        assert_eq!(parse_or(&lookup, "A", 1u32), 12);
        assert_eq!(parse_or(&lookup, "B", 1u32), 1);
        assert_eq!(parse_or(&lookup, "C", 1u32), 1);
    }
}
