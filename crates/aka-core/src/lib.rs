//! Core types and utilities for aka.
//!
//! This crate provides the object model the alias resolver works against:
//!
//! - **Identifiers**: [`ObjectKey`] for stored objects, [`AliasKey`] for alias records
//! - **Capabilities**: [`Object`], [`Aliasable`] and [`AliasScoped`]
//! - **Kind lookup**: [`KindLookup`] with the [`Scheme`] registry and the fixed [`FromKind`]
//! - **Hashing**: [`stable_key`], the scoped key hasher behind alias keys
//!
//! # Example
//!
//! ```
//! use aka_core::{stable_key, GroupVersionKind, ObjectKey};
//!
//! let kind = GroupVersionKind::gvk("aka.io", "v1", "Webhook");
//! let key = ObjectKey::new("default", "my-hook");
//!
//! // Same id and scope, same fragment
//! assert_eq!(stable_key("my-hook", &kind.kind, 8), stable_key("my-hook", &kind.kind, 8));
//! assert_eq!(key.to_string(), "default/my-hook");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod hash;
pub mod ids;
pub mod object;
pub mod scheme;

pub use error::{KindError, Result};
pub use hash::{stable_key, MAX_KEY_LENGTH};
pub use ids::{AliasKey, ObjectKey};
pub use object::{AliasScoped, Aliasable, Object};
pub use scheme::{FromKind, KindLookup, Scheme};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
pub use kube::core::GroupVersionKind;
