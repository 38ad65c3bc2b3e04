//! Alias key registration.
//!
//! The key computed here must equal the key [`Resolver::get`] looks up for
//! the same alias, kind and scope. Both sides go through
//! [`resolve_scope`] and [`KeyBuilder::build`].
//!
//! [`Resolver::get`]: crate::Resolver::get

use aka_core::{AliasKey, Aliasable, GroupVersionKind, KindLookup, Object};
use aka_store::Alias;

use crate::error::{AliasError, Result};
use crate::key::{resolve_scope, KeyBuilder};

/// The alias key `obj` should register, with the default key configuration.
///
/// Returns `None` when the object requests no alias.
///
/// # Errors
///
/// Returns `AliasError::TypeMismatch` if `obj` does not expose an
/// [`Object`], or `AliasError::Kind` if `lookup` cannot resolve its kind.
pub fn name(lookup: &dyn KindLookup, obj: &dyn Aliasable) -> Result<Option<AliasKey>> {
    name_with(&KeyBuilder::default(), lookup, obj)
}

/// [`name`] with an explicit key configuration.
///
/// # Errors
///
/// See [`name`].
pub fn name_with(
    keys: &KeyBuilder,
    lookup: &dyn KindLookup,
    obj: &dyn Aliasable,
) -> Result<Option<AliasKey>> {
    let id = obj.alias_name();
    if id.is_empty() {
        return Ok(None);
    }
    let (_, gvk) = identify(lookup, obj)?;
    Ok(Some(keys.build(resolve_scope(&gvk, obj), id)))
}

/// The alias record `obj` should register: its key plus the object's own
/// kind, namespace and name. Nothing is written.
///
/// # Errors
///
/// See [`name`].
pub fn plan_registration(
    lookup: &dyn KindLookup,
    keys: &KeyBuilder,
    obj: &dyn Aliasable,
) -> Result<Option<Alias>> {
    let id = obj.alias_name();
    if id.is_empty() {
        return Ok(None);
    }
    let (object, gvk) = identify(lookup, obj)?;
    let key = keys.build(resolve_scope(&gvk, obj), id);
    Ok(Some(Alias::new(
        key,
        gvk.kind.clone(),
        object.namespace(),
        object.name(),
    )))
}

fn identify<'a>(
    lookup: &dyn KindLookup,
    obj: &'a dyn Aliasable,
) -> Result<(&'a dyn Object, GroupVersionKind)> {
    let object = obj.as_object().ok_or(AliasError::TypeMismatch {
        type_name: obj.type_name(),
    })?;
    let gvk = lookup.kind_for(object)?;
    Ok((object, gvk))
}
