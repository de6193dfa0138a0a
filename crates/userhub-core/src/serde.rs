use serde::{Deserialize, Deserializer};

/// Deserializes a string and trims surrounding whitespace.
pub fn trim_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// Like [`trim_string`] for optional fields. `null` stays `None`; a
/// whitespace-only string becomes `Some("")` so length validation can
/// reject it.
pub fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.map(|s| s.trim().to_string()))
}
