//! Alias key configuration.

use aka_core::MAX_KEY_LENGTH;
use serde::Deserialize;

use crate::error::{AliasError, Result};

/// Environment variable overriding [`AliasConfig::key_length`].
pub const KEY_LENGTH_ENV: &str = "AKA_ALIAS_KEY_LENGTH";

/// Configuration for alias key derivation.
///
/// Every process that registers or resolves aliases in one store must use
/// the same configuration, or their keys will not agree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasConfig {
    /// Hex characters kept from the scoped hash (4 bits each).
    #[serde(default = "AliasConfig::default_key_length")]
    pub key_length: usize,
}

impl AliasConfig {
    const fn default_key_length() -> usize {
        8 // 32 bits
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AliasError::Config` if `key_length` is outside `1..=64`.
    pub fn validate(&self) -> Result<()> {
        if self.key_length == 0 || self.key_length > MAX_KEY_LENGTH {
            return Err(AliasError::Config(format!(
                "key_length must be between 1 and {MAX_KEY_LENGTH}, got {}",
                self.key_length
            )));
        }
        Ok(())
    }

    /// Load the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AliasError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration from a variable lookup, falling back to
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `AliasError::Config` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(KEY_LENGTH_ENV) {
            config.key_length = raw.trim().parse().map_err(|_| {
                AliasError::Config(format!("{KEY_LENGTH_ENV} is not a number: {raw:?}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            key_length: Self::default_key_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AliasConfig::default();
        assert_eq!(config.key_length, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserialize_fills_defaults() {
        let config: AliasConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AliasConfig::default());

        let raw = r#"{"key_length": 16}"#;
        let config: AliasConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.key_length, 16);
    }

    #[test]
    fn validate_bounds() {
        assert!(AliasConfig { key_length: 0 }.validate().is_err());
        assert!(AliasConfig { key_length: 65 }.validate().is_err());
        assert!(AliasConfig { key_length: 1 }.validate().is_ok());
        assert!(AliasConfig { key_length: 64 }.validate().is_ok());
    }

    #[test]
    fn lookup_overrides() {
        let lookup = |name: &str| (name == KEY_LENGTH_ENV).then(|| " 12 ".to_string());
        let config = AliasConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.key_length, 12);
    }

    #[test]
    fn lookup_unset_uses_defaults() {
        let config = AliasConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AliasConfig::default());
    }

    #[test]
    fn lookup_rejects_garbage() {
        let err = AliasConfig::from_lookup(|_| Some("eight".into())).unwrap_err();
        assert!(matches!(err, AliasError::Config(ref m) if m.contains(KEY_LENGTH_ENV)));

        let err = AliasConfig::from_lookup(|_| Some("100".into())).unwrap_err();
        assert!(matches!(err, AliasError::Config(_)));
    }
}
