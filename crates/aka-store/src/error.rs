//! Error types for the storage layer.

use aka_core::{GroupVersionKind, KindError};
use thiserror::Error;

/// A result type using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested object does not exist.
    #[error("{resource} \"{name}\" not found")]
    NotFound {
        /// Kind of the object, qualified by group when it has one.
        resource: String,
        /// Name that was looked up.
        name: String,
    },

    /// The Kubernetes API returned an error.
    #[error("kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// A backend other than Kubernetes failed.
    #[error("backend error: {0}")]
    Backend(String),

    /// A stored record could not be decoded into the requested type.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The object's kind could not be resolved.
    #[error(transparent)]
    Kind(#[from] KindError),

    /// The object name uses the prefix reserved for alias records.
    #[error("{kind} name {name:?} uses the reserved alias prefix")]
    ReservedName {
        /// Kind of the rejected object.
        kind: String,
        /// The rejected name.
        name: String,
    },
}

impl StoreError {
    /// Build a `NotFound` error for `name` of kind `gvk`.
    #[must_use]
    pub fn not_found(gvk: &GroupVersionKind, name: impl Into<String>) -> Self {
        let resource = if gvk.group.is_empty() {
            gvk.kind.clone()
        } else {
            format!("{}.{}", gvk.kind, gvk.group)
        };
        Self::NotFound {
            resource,
            name: name.into(),
        }
    }

    /// Whether this error means the object does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_group_qualified() {
        let gvk = GroupVersionKind::gvk("aka.io", "v1", "Webhook");
        let err = StoreError::not_found(&gvk, "foo");
        assert_eq!(err.to_string(), "Webhook.aka.io \"foo\" not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn core_group_is_bare_kind() {
        let gvk = GroupVersionKind::gvk("", "v1", "ConfigMap");
        assert_eq!(
            StoreError::not_found(&gvk, "cm").to_string(),
            "ConfigMap \"cm\" not found"
        );
    }

    #[test]
    fn backend_error_is_not_not_found() {
        assert!(!StoreError::Backend("boom".into()).is_not_found());
    }
}
