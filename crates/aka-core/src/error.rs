//! Common error types for aka.
//!
//! Kind resolution is the only fallible operation in this crate; everything
//! else here is pure.

use thiserror::Error;

/// A result type using `KindError`.
pub type Result<T> = std::result::Result<T, KindError>;

/// Errors that can occur while mapping an object to its kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    /// The object's concrete type has no registered kind.
    #[error("no kind is registered for type {type_name}")]
    UnknownKind {
        /// The Rust type name of the object.
        type_name: &'static str,
    },
}
