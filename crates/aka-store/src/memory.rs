//! In-memory object store for tests.
//!
//! Records every read so tests can check which lookups a caller issued, and
//! can fail reads of a chosen kind to simulate backend outages.

use std::collections::HashMap;

use aka_core::{GroupVersionKind, Object, ObjectKey};
use async_trait::async_trait;
use kube::core::{ApiResource, DynamicObject};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::keys::validate_object_name;
use crate::ObjectStore;

/// A read issued against a [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Kind that was read.
    pub gvk: GroupVersionKind,
    /// Key that was read.
    pub key: ObjectKey,
}

/// A store that keeps objects in memory.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<(GroupVersionKind, ObjectKey), DynamicObject>>,
    failures: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<Request>>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `obj` as kind `gvk`, keyed by its metadata.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReservedName` if the name is reserved for alias
    /// records, or `StoreError::Decode` if `obj` does not serialize.
    pub fn insert<T: Object + Serialize>(&self, gvk: &GroupVersionKind, obj: &T) -> Result<()> {
        let key = ObjectKey::new(obj.namespace(), obj.name());
        validate_object_name(gvk, &key.name)?;

        let mut data = serde_json::to_value(obj)?;
        if let Some(fields) = data.as_object_mut() {
            fields.remove("metadata");
        }
        let mut raw = DynamicObject::new(&key.name, &ApiResource::from_gvk(gvk)).data(data);
        raw.metadata = obj.meta().clone();

        self.objects.write().insert((gvk.clone(), key), raw);
        Ok(())
    }

    /// Remove the object at `key` of kind `gvk`.
    pub fn remove(&self, gvk: &GroupVersionKind, key: &ObjectKey) -> Option<DynamicObject> {
        self.objects.write().remove(&(gvk.clone(), key.clone()))
    }

    /// Fail every read of `kind` with a backend error carrying `message`.
    pub fn fail_kind(&self, kind: &str, message: impl Into<String>) {
        self.failures
            .lock()
            .insert(kind.to_string(), message.into());
    }

    /// Stop failing reads.
    pub fn clear_failures(&self) {
        self.failures.lock().clear();
    }

    /// All reads issued so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    /// Number of reads issued so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, gvk: &GroupVersionKind, key: &ObjectKey) -> Result<DynamicObject> {
        self.requests.lock().push(Request {
            gvk: gvk.clone(),
            key: key.clone(),
        });

        if let Some(message) = self.failures.lock().get(&gvk.kind) {
            return Err(StoreError::Backend(message.clone()));
        }

        self.objects
            .read()
            .get(&(gvk.clone(), key.clone()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(gvk, &key.name))
    }
}
