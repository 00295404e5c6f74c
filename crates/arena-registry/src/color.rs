//! Brand colors.

use crate::error::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Neutral color for models the registry cannot resolve.
pub const DEFAULT_COLOR: &str = "#a1a1aa";

/// A validated `#rgb` or `#rrggbb` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandColor(String);

impl BrandColor {
    /// Parse and validate a hex color.
    pub fn parse(value: &str) -> RegistryResult<Self> {
        let value = value.trim();
        let valid = value
            .strip_prefix('#')
            .map(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .unwrap_or(false);

        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(RegistryError::InvalidColor {
                color: value.to_string(),
            })
        }
    }

    /// Used for compiled-in colors; validity is covered by tests.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    /// The neutral fallback color.
    pub fn neutral() -> Self {
        Self::from_static(DEFAULT_COLOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BrandColor {
    fn default() -> Self {
        Self::neutral()
    }
}

impl TryFrom<String> for BrandColor {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BrandColor> for String {
    fn from(color: BrandColor) -> Self {
        color.0
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(BrandColor::parse("#10a37f").unwrap().as_str(), "#10a37f");
        assert_eq!(BrandColor::parse("#FFF").unwrap().as_str(), "#FFF");
        assert_eq!(BrandColor::parse("  #000000 ").unwrap().as_str(), "#000000");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(BrandColor::parse("10a37f").is_err());
        assert!(BrandColor::parse("#10a37").is_err());
        assert!(BrandColor::parse("#ggg").is_err());
        assert!(BrandColor::parse("").is_err());
        assert!(BrandColor::parse("#").is_err());
    }

    #[test]
    fn test_neutral_is_valid() {
        assert_eq!(BrandColor::parse(DEFAULT_COLOR).unwrap(), BrandColor::neutral());
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let ok: BrandColor = serde_json::from_str("\"#4285f4\"").unwrap();
        assert_eq!(ok.to_string(), "#4285f4");
        assert!(serde_json::from_str::<BrandColor>("\"blue\"").is_err());
    }
}
