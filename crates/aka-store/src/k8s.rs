//! Kubernetes-backed object store.
//!
//! Reads go through `Api<DynamicObject>`, so any kind the cluster serves can
//! be read without compiled-in type information.

use aka_core::{GroupVersionKind, ObjectKey};
use async_trait::async_trait;
use kube::api::Api;
use kube::core::{ApiResource, DynamicObject};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::ObjectStore;

/// Object store reading from the Kubernetes API server.
#[derive(Clone)]
pub struct KubeStore {
    client: kube::Client,
}

impl KubeStore {
    /// Create a store over an existing client.
    #[must_use]
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    /// Create a store using in-cluster config or the local kubeconfig.
    ///
    /// # Errors
    ///
    /// Returns an error if no Kubernetes client can be configured.
    pub async fn try_default() -> Result<Self> {
        let client = kube::Client::try_default().await?;
        Ok(Self::new(client))
    }

    /// The API for `gvk` in `namespace`, or cluster-wide when it is empty.
    fn api(&self, gvk: &GroupVersionKind, namespace: &str) -> Api<DynamicObject> {
        let resource = ApiResource::from_gvk(gvk);
        if namespace.is_empty() {
            Api::all_with(self.client.clone(), &resource)
        } else {
            Api::namespaced_with(self.client.clone(), namespace, &resource)
        }
    }
}

#[async_trait]
impl ObjectStore for KubeStore {
    async fn get(&self, gvk: &GroupVersionKind, key: &ObjectKey) -> Result<DynamicObject> {
        debug!(kind = %gvk.kind, key = %key, "Reading object from Kubernetes");

        match self.api(gvk, &key.namespace).get(&key.name).await {
            Ok(obj) => Ok(obj),
            Err(kube::Error::Api(e)) if e.code == 404 => Err(StoreError::not_found(gvk, &key.name)),
            Err(e) => Err(e.into()),
        }
    }
}
