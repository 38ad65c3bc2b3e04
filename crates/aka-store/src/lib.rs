//! Typed object store access for aka.
//!
//! This crate provides the read side of the object store the alias resolver
//! works against.
//!
//! # Architecture
//!
//! - [`ObjectStore`]: reads a raw record by kind, namespace and name
//! - [`Client`]: pairs a store with a [`Scheme`](aka_core::Scheme) and decodes
//!   records into typed objects
//! - [`KubeStore`]: reads from a Kubernetes API server
//! - `MemoryStore`: in-memory store for tests (`test-utils` feature)
//!
//! Alias records share the cluster-scoped key space with other objects; the
//! [`keys`] module holds the naming rule that keeps them apart.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use aka_core::ObjectKey;
//! use aka_store::{Client, KubeStore, Webhook};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(KubeStore::try_default().await?);
//! let client = Client::with_default_scheme(store);
//!
//! let mut hook = Webhook::default();
//! client.get(&ObjectKey::new("default", "my-hook"), &mut hook).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod error;
pub mod k8s;
pub mod keys;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod types;

pub use client::{decode, Client};
pub use error::{Result, StoreError};
pub use k8s::KubeStore;
pub use keys::{is_alias_name, validate_object_name, ALIAS_PREFIX};
pub use types::{
    scheme, Alias, AliasSpec, OAuthApp, OAuthAppSpec, Webhook, WebhookSpec, WebhookStatus,
};

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;

use aka_core::{GroupVersionKind, ObjectKey};
use async_trait::async_trait;
use kube::core::DynamicObject;

/// Read access to a typed object store.
///
/// Reads may be served from a cache that lags the authoritative store.
/// Callers must not assume two reads observe the same state.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Get the object at `key` of kind `gvk`.
    ///
    /// An empty namespace in `key` reads the cluster-scoped key space.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such object exists, or another
    /// error if the backend fails.
    async fn get(&self, gvk: &GroupVersionKind, key: &ObjectKey) -> Result<DynamicObject>;
}
