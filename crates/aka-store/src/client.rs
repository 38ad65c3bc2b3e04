//! Typed access on top of an [`ObjectStore`].
//!
//! A [`Client`] pairs a store with a [`Scheme`], so callers can read into a
//! typed object without naming its kind.

use std::sync::Arc;

use aka_core::{GroupVersionKind, KindLookup, Object, ObjectKey, Scheme};
use kube::core::DynamicObject;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::ObjectStore;

/// A typed client over an object store.
pub struct Client<S> {
    store: Arc<S>,
    scheme: Arc<Scheme>,
}

impl<S> Clone for Client<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            scheme: Arc::clone(&self.scheme),
        }
    }
}

impl<S: ObjectStore> Client<S> {
    /// Create a client resolving kinds through `scheme`.
    #[must_use]
    pub fn new(store: Arc<S>, scheme: Arc<Scheme>) -> Self {
        Self { store, scheme }
    }

    /// Create a client with every aka resource type registered.
    #[must_use]
    pub fn with_default_scheme(store: Arc<S>) -> Self {
        Self::new(store, Arc::new(crate::types::scheme()))
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the scheme.
    #[must_use]
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Read the object at `key` of kind `gvk` and decode it as `T`.
    ///
    /// # Errors
    ///
    /// Returns the store's error, or `StoreError::Decode` if the record does
    /// not decode as `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        gvk: &GroupVersionKind,
        key: &ObjectKey,
    ) -> Result<T> {
        let raw = self.store.get(gvk, key).await?;
        decode(raw)
    }

    /// Read the object at `key` into `obj`, using the kind registered for `T`.
    ///
    /// `obj` is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Kind` if `T` is not registered, otherwise the
    /// errors of [`fetch`](Self::fetch).
    pub async fn get<T>(&self, key: &ObjectKey, obj: &mut T) -> Result<()>
    where
        T: Object + DeserializeOwned,
    {
        let gvk = self.scheme.kind_for(&*obj)?;
        *obj = self.fetch(&gvk, key).await?;
        Ok(())
    }
}

impl<S: ObjectStore> KindLookup for Client<S> {
    fn kind_for(&self, obj: &dyn Object) -> aka_core::Result<GroupVersionKind> {
        self.scheme.kind_for(obj)
    }
}

/// Decode a raw store record into a typed object.
///
/// # Errors
///
/// Returns `StoreError::Decode` if the record does not match `T`.
pub fn decode<T: DeserializeOwned>(raw: DynamicObject) -> Result<T> {
    let value = serde_json::to_value(raw)?;
    Ok(serde_json::from_value(value)?)
}
