//! Alias resolution for aka.
//!
//! Objects may request a human-chosen alias. The owner of the object writes a
//! cluster-scoped [`Alias`](aka_store::Alias) record under a key derived from
//! the alias and a scope; readers resolve names through that record when no
//! object has the name directly.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐      ┌──────────────────────────────┐
//! │  Registration (name)         │      │  Resolution (Resolver::get)  │
//! └──────────────────────────────┘      └──────────────────────────────┘
//!                │                                     │
//!                ▼                                     ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │      resolve_scope  ──►  KeyBuilder::build  ──►  "alias-" + hash     │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                                      │
//!                                                      ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ObjectStore: direct read ──► alias record read ──► target read      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A direct hit always wins. A missing alias record, or one recorded for
//! another kind, reports the original `NotFound`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use aka_alias::Resolver;
//! use aka_store::{Client, KubeStore, Webhook};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(KubeStore::try_default().await?);
//! let resolver = Resolver::new(Client::with_default_scheme(store));
//!
//! // "deploy" may be the webhook's real name or its alias
//! let mut hook = Webhook::default();
//! resolver.get(&mut hook, "default", "deploy").await?;
//!
//! // The key the webhook's alias record is stored under
//! let key = resolver.name(&hook)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod key;
pub mod register;
pub mod resolve;

#[cfg(test)]
mod testing;

pub use config::AliasConfig;
pub use error::{AliasError, Result};
pub use key::{key_from_scope_id, resolve_scope, KeyBuilder};
pub use register::{name, name_with, plan_registration};
pub use resolve::{get, Resolver};

pub use aka_core::{AliasKey, AliasScoped, Aliasable, FromKind, KindLookup, Object, Scheme};
