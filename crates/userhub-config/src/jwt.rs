//! Token signing configuration.
//!
//! `JWT_EXPIRES_IN` accepts either a bare number of seconds (`"3600"`) or a
//! number with a single unit suffix: `s`, `m`, `h` or `d` (`"15m"`, `"1h"`,
//! `"7d"`). Anything else falls back to one hour.

use std::{env, fmt};

pub const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;
pub const DEV_SECRET: &str = "userhub-dev-secret-change-me";

#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            secret: lookup("JWT_SECRET")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEV_SECRET.to_string()),
            expires_in_secs: lookup("JWT_EXPIRES_IN")
                .and_then(|v| parse_duration_secs(&v))
                .unwrap_or(DEFAULT_EXPIRES_IN_SECS),
        }
    }
}

/// Parses `"90"`, `"90s"`, `"15m"`, `"1h"` or `"7d"` into seconds.
///
/// Returns `None` for empty, negative, zero or unrecognised values.
pub fn parse_duration_secs(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (digits, multiplier) = match raw.char_indices().last()? {
        (i, 's') => (&raw[..i], 1),
        (i, 'm') => (&raw[..i], 60),
        (i, 'h') => (&raw[..i], 3600),
        (i, 'd') => (&raw[..i], 86_400),
        _ => (raw, 1),
    };

    let value: i64 = digits.parse().ok()?;
    if value <= 0 {
        return None;
    }
    value.checked_mul(multiplier)
}
