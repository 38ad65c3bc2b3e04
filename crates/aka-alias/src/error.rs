//! Error types for alias resolution.
//!
//! Callers should branch on [`AliasError::is_not_found`]: a missing object
//! and a missing alias are the same outcome.

use aka_core::KindError;
use aka_store::StoreError;
use thiserror::Error;

/// A result type using `AliasError`.
pub type Result<T> = std::result::Result<T, AliasError>;

/// Errors that can occur while resolving or registering an alias.
#[derive(Debug, Error)]
pub enum AliasError {
    /// A store read failed, including `NotFound`.
    #[error(transparent)]
    Store(StoreError),

    /// The direct lookup found nothing and the alias lookup failed.
    #[error("{lookup}; alias lookup failed: {alias}")]
    Joined {
        /// The `NotFound` from the direct lookup.
        lookup: StoreError,
        /// The failure from the alias record read.
        #[source]
        alias: StoreError,
    },

    /// The object's kind could not be resolved.
    #[error(transparent)]
    Kind(#[from] KindError),

    /// The object does not expose the identity needed to resolve its kind.
    #[error("object {type_name} does not implement Object, can not lookup kind")]
    TypeMismatch {
        /// Rust type name of the object.
        type_name: &'static str,
    },

    /// The alias configuration is invalid.
    #[error("invalid alias configuration: {0}")]
    Config(String),
}

impl From<StoreError> for AliasError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Kind(kind) => Self::Kind(kind),
            other => Self::Store(other),
        }
    }
}

impl AliasError {
    /// Whether the requested object does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }

    /// Returns true if this error might be resolved by retrying.
    ///
    /// A `Joined` error is retriable only when the alias read failed for a
    /// transient reason.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Store(StoreError::Kube(_) | StoreError::Backend(_))
                | Self::Joined {
                    alias: StoreError::Kube(_) | StoreError::Backend(_),
                    ..
                }
        )
    }

    /// Returns the appropriate HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_retriable() {
            503
        } else {
            500
        }
    }
}
