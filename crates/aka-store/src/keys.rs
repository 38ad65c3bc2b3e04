//! Naming rules for the shared key space.
//!
//! Alias records live next to ordinary cluster-scoped objects. Their names
//! start with [`ALIAS_PREFIX`], and no other kind may use that prefix.

use aka_core::GroupVersionKind;

use crate::error::{Result, StoreError};
use crate::types::Alias;

/// Prefix reserved for alias record names.
pub const ALIAS_PREFIX: &str = "alias-";

/// Whether `name` is in the alias record namespace.
#[must_use]
pub fn is_alias_name(name: &str) -> bool {
    name.starts_with(ALIAS_PREFIX)
}

/// Check that an object of kind `gvk` may be stored under `name`.
///
/// # Errors
///
/// Returns `StoreError::ReservedName` if `name` carries the alias prefix and
/// `gvk` is not the alias record kind.
pub fn validate_object_name(gvk: &GroupVersionKind, name: &str) -> Result<()> {
    if is_alias_name(name) && *gvk != Alias::gvk() {
        return Err(StoreError::ReservedName {
            kind: gvk.kind.clone(),
            name: name.to_string(),
        });
    }
    Ok(())
}
