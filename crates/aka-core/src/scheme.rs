//! Kind lookup.
//!
//! [`KindLookup`] maps an object to its [`GroupVersionKind`]. [`Scheme`] is a
//! registry keyed by the object's concrete Rust type; [`FromKind`] answers
//! with one fixed kind, for tests and callers without a registry.

use std::any::TypeId;
use std::collections::HashMap;

use kube::core::GroupVersionKind;
use parking_lot::RwLock;

use crate::error::{KindError, Result};
use crate::object::Object;

/// Resolves the kind of an object.
pub trait KindLookup: Send + Sync {
    /// Return the kind identifier for `obj`.
    ///
    /// # Errors
    ///
    /// Returns `KindError::UnknownKind` if the object's type is not known.
    fn kind_for(&self, obj: &dyn Object) -> Result<GroupVersionKind>;
}

/// A lookup that always answers with the same kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromKind(pub GroupVersionKind);

impl FromKind {
    /// Create a lookup answering with `gvk`.
    #[must_use]
    pub const fn new(gvk: GroupVersionKind) -> Self {
        Self(gvk)
    }
}

impl KindLookup for FromKind {
    fn kind_for(&self, _obj: &dyn Object) -> Result<GroupVersionKind> {
        Ok(self.0.clone())
    }
}

/// A registry of object types and their kinds.
///
/// Registration takes `&self`, so a shared scheme can learn new types while
/// in use.
#[derive(Debug, Default)]
pub struct Scheme {
    kinds: RwLock<HashMap<TypeId, GroupVersionKind>>,
}

impl Scheme {
    /// Create an empty scheme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under `gvk`, replacing any previous registration.
    pub fn register<T: Object>(&self, gvk: GroupVersionKind) {
        self.kinds.write().insert(TypeId::of::<T>(), gvk);
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with<T: Object>(self, gvk: GroupVersionKind) -> Self {
        self.register::<T>(gvk);
        self
    }

    /// Whether `T` has a registered kind.
    #[must_use]
    pub fn contains<T: Object>(&self) -> bool {
        self.kinds.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.read().len()
    }

    /// Whether no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.read().is_empty()
    }
}

impl KindLookup for Scheme {
    fn kind_for(&self, obj: &dyn Object) -> Result<GroupVersionKind> {
        self.kinds
            .read()
            .get(&obj.as_any().type_id())
            .cloned()
            .ok_or(KindError::UnknownKind {
                type_name: obj.type_name(),
            })
    }
}
