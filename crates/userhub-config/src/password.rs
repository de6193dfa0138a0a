use std::env;

pub const DEFAULT_BCRYPT_COST: u32 = 12;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl PasswordConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads `BCRYPT_COST`, clamped to the range bcrypt accepts.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cost = crate::parse_or(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST);

        Self {
            bcrypt_cost: cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup_from;

    #[test]
    fn test_default_cost() {
        let config = PasswordConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.bcrypt_cost, 12);
    }

    #[test]
    fn test_cost_is_clamped() {
        let low = PasswordConfig::from_lookup(lookup_from(&[("BCRYPT_COST", "1")]));
        let high = PasswordConfig::from_lookup(lookup_from(&[("BCRYPT_COST", "40")]));
        assert_eq!(low.bcrypt_cost, MIN_BCRYPT_COST);
        assert_eq!(high.bcrypt_cost, MAX_BCRYPT_COST);
    }

    #[test]
    fn test_unparsable_cost_uses_default() {
        let config = PasswordConfig::from_lookup(lookup_from(&[("BCRYPT_COST", "fast")]));
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
    }
}
