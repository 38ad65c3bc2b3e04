//! Identifier types for stored objects and alias records.
//!
//! [`ObjectKey`] addresses a concrete object by namespace and name;
//! [`AliasKey`] is the derived store name of an alias record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(namespace, name)` pair addressing a stored object.
///
/// An empty namespace addresses the cluster-scoped key space.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ObjectKey {
    /// Namespace of the object, empty for cluster-scoped objects.
    pub namespace: String,
    /// Name of the object within its namespace.
    pub name: String,
}

impl ObjectKey {
    /// Create a key for a namespaced object.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Create a key in the cluster-scoped key space.
    #[must_use]
    pub fn cluster(name: impl Into<String>) -> Self {
        Self::new(String::new(), name)
    }

    /// Whether this key addresses the cluster-scoped key space.
    #[must_use]
    pub fn is_cluster_scoped(&self) -> bool {
        self.namespace.is_empty()
    }
}

impl fmt::Debug for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectKey({self})")
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}/{}", self.namespace, self.name)
        }
    }
}

/// The store name of an alias record: a reserved prefix followed by a
/// fixed-length hex fragment of the scoped hash.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasKey(String);

impl AliasKey {
    /// Assemble a key from its prefix and hash fragment.
    #[must_use]
    pub fn from_parts(prefix: &str, fragment: &str) -> Self {
        Self(format!("{prefix}{fragment}"))
    }

    /// Return the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AliasKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AliasKey({})", self.0)
    }
}

impl fmt::Display for AliasKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AliasKey> for String {
    fn from(key: AliasKey) -> Self {
        key.0
    }
}

impl AsRef<str> for AliasKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
