//! Scope resolution and alias key derivation.
//!
//! An alias key is [`ALIAS_PREFIX`] followed by a fixed-length fragment of
//! the hash of `(alias, scope)`. The scope is the type's override when it has
//! a non-empty one, otherwise the kind name.

use aka_core::{stable_key, AliasKey, Aliasable, GroupVersionKind};
use aka_store::ALIAS_PREFIX;

use crate::config::AliasConfig;
use crate::error::Result;

/// The collision domain `obj` registers its alias in.
#[must_use]
pub fn resolve_scope<'a>(gvk: &'a GroupVersionKind, obj: &'a dyn Aliasable) -> &'a str {
    match obj.as_scoped().map(|scoped| scoped.alias_scope()) {
        Some(scope) if !scope.is_empty() => scope,
        _ => &gvk.kind,
    }
}

/// Derives alias keys with a configured fragment length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBuilder {
    key_length: usize,
}

impl KeyBuilder {
    /// Create a builder from `config`.
    ///
    /// # Errors
    ///
    /// Returns `AliasError::Config` if the configuration is invalid.
    pub fn new(config: &AliasConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            key_length: config.key_length,
        })
    }

    /// Hex characters in the hash fragment.
    #[must_use]
    pub const fn key_length(&self) -> usize {
        self.key_length
    }

    /// The alias key for alias `id` in `scope`.
    #[must_use]
    pub fn build(&self, scope: &str, id: &str) -> AliasKey {
        AliasKey::from_parts(ALIAS_PREFIX, &stable_key(id, scope, self.key_length))
    }
}

impl Default for KeyBuilder {
    fn default() -> Self {
        Self {
            key_length: AliasConfig::default().key_length,
        }
    }
}

/// The alias key for alias `id` in `scope`, with the default key length.
#[must_use]
pub fn key_from_scope_id(scope: &str, id: &str) -> AliasKey {
    KeyBuilder::default().build(scope, id)
}
