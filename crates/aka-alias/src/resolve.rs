//! Alias resolution.
//!
//! A lookup first tries the object's real `(namespace, name)`. Only a
//! `NotFound` falls through to the alias record for `name`, and only an alias
//! record of the right kind is followed, one level deep.
//!
//! The reads are independent: each one observes whatever the store holds at
//! that moment, and nothing is retried here.

use aka_core::{AliasKey, Aliasable, KindLookup, Object, ObjectKey};
use aka_store::{Alias, Client, ObjectStore, StoreError};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{AliasError, Result};
use crate::key::{resolve_scope, KeyBuilder};
use crate::register;

/// Resolves names that may be aliases.
pub struct Resolver<S> {
    client: Client<S>,
    keys: KeyBuilder,
}

impl<S> Clone for Resolver<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            keys: self.keys,
        }
    }
}

impl<S: ObjectStore> Resolver<S> {
    /// Create a resolver with the default key configuration.
    #[must_use]
    pub fn new(client: Client<S>) -> Self {
        Self {
            client,
            keys: KeyBuilder::default(),
        }
    }

    /// Use `keys` to derive alias keys.
    #[must_use]
    pub const fn with_keys(mut self, keys: KeyBuilder) -> Self {
        self.keys = keys;
        self
    }

    /// Get a reference to the client.
    #[must_use]
    pub const fn client(&self) -> &Client<S> {
        &self.client
    }

    /// Get the key builder.
    #[must_use]
    pub const fn keys(&self) -> &KeyBuilder {
        &self.keys
    }

    /// Read the object named `name` in `namespace` into `obj`, treating
    /// `name` as an alias if no such object exists.
    ///
    /// An empty `namespace` skips the direct read and goes straight to the
    /// alias record.
    ///
    /// # Errors
    ///
    /// - `NotFound` for the direct lookup if neither the object nor a
    ///   matching alias record exists
    /// - `NotFound` for the alias target if the alias points at a missing
    ///   object
    /// - `Store` for any other failure of the direct or target read
    /// - `Joined` if the direct read found nothing and the alias read failed
    /// - `Kind` if `T` has no registered kind
    pub async fn get<T>(&self, obj: &mut T, namespace: &str, name: &str) -> Result<()>
    where
        T: Aliasable + Object + DeserializeOwned,
    {
        let gvk = self.client.kind_for(&*obj)?;

        let lookup_err = if namespace.is_empty() {
            StoreError::not_found(&gvk, name)
        } else {
            let direct = ObjectKey::new(namespace, name);
            match self.client.fetch(&gvk, &direct).await {
                Ok(found) => {
                    *obj = found;
                    debug!(kind = %gvk.kind, namespace, name, "Resolved object directly");
                    return Ok(());
                }
                Err(e) if e.is_not_found() => e,
                Err(e) => return Err(e.into()),
            }
        };

        let key = self.keys.build(resolve_scope(&gvk, &*obj), name);
        let record = alias_key(&key);
        let alias: Alias = match self.client.fetch(&Alias::gvk(), &record).await {
            Ok(alias) => alias,
            Err(e) if e.is_not_found() => {
                debug!(kind = %gvk.kind, name, %key, "No alias record");
                return Err(lookup_err.into());
            }
            Err(e) => {
                warn!(kind = %gvk.kind, name, %key, error = %e, "Alias record lookup failed");
                return Err(AliasError::Joined {
                    lookup: lookup_err,
                    alias: e,
                });
            }
        };

        if alias.spec.target_kind != gvk.kind {
            debug!(
                kind = %gvk.kind,
                name,
                %key,
                target_kind = %alias.spec.target_kind,
                "Alias record belongs to another kind"
            );
            return Err(lookup_err.into());
        }

        debug!(
            kind = %gvk.kind,
            name,
            %key,
            target_namespace = %alias.spec.target_namespace,
            target_name = %alias.spec.target_name,
            "Following alias"
        );

        let target = ObjectKey::new(alias.spec.target_namespace, alias.spec.target_name);
        *obj = self.client.fetch(&gvk, &target).await?;
        Ok(())
    }

    /// The alias key `obj` should register, using this resolver's kinds and
    /// key configuration.
    ///
    /// # Errors
    ///
    /// See [`name`](crate::name).
    pub fn name(&self, obj: &dyn Aliasable) -> Result<Option<AliasKey>> {
        register::name_with(&self.keys, &self.client, obj)
    }

    /// The alias record `obj` should register.
    ///
    /// # Errors
    ///
    /// See [`name`](crate::name).
    pub fn plan_registration(&self, obj: &dyn Aliasable) -> Result<Option<Alias>> {
        register::plan_registration(&self.client, &self.keys, obj)
    }
}

/// Alias records are cluster-scoped.
fn alias_key(key: &AliasKey) -> ObjectKey {
    ObjectKey::cluster(key.as_str())
}

/// Resolve `name` in `namespace` into `obj` with the default key
/// configuration. See [`Resolver::get`].
///
/// # Errors
///
/// See [`Resolver::get`].
pub async fn get<S, T>(client: &Client<S>, obj: &mut T, namespace: &str, name: &str) -> Result<()>
where
    S: ObjectStore,
    T: Aliasable + Object + DeserializeOwned,
{
    let resolver = Resolver::new(client.clone());
    resolver.get(obj, namespace, name).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use aka_core::Scheme;
    use aka_store::{MemoryStore, Webhook};
    use std::sync::Arc;

    use crate::key::key_from_scope_id;
    use crate::testing::{link, put_alias, put_hook, put_raw_alias, setup, Tool};

    #[tokio::test]
    async fn direct_hit_wins_over_alias() {
        let (store, resolver) = setup();
        put_hook(&store, "ns", "foo", "");
        put_hook(&store, "ns2", "bar", "");
        link(&store, "foo", "ns2", "bar");

        let mut out = Webhook::default();
        resolver.get(&mut out, "ns", "foo").await.unwrap();

        assert_eq!(out.metadata.namespace.as_deref(), Some("ns"));
        assert_eq!(out.metadata.name.as_deref(), Some("foo"));
        assert_eq!(store.request_count(), 1);
    }

    #[tokio::test]
    async fn falls_back_to_alias() {
        let (store, resolver) = setup();
        let target = put_hook(&store, "ns2", "bar", "foo");
        link(&store, "foo", "ns2", "bar");

        let mut out = Webhook::default();
        resolver.get(&mut out, "ns", "foo").await.unwrap();

        assert_eq!(out, target);
        let requests = store.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].gvk, Alias::gvk());
        assert!(requests[1].key.is_cluster_scoped());
        assert_eq!(requests[2].key, ObjectKey::new("ns2", "bar"));
    }

    #[tokio::test]
    async fn kind_mismatch_is_not_found() {
        let (store, resolver) = setup();
        put_hook(&store, "ns2", "bar", "");
        let key = key_from_scope_id("Webhook", "foo");
        put_alias(&store, &key, "OtherKind", "ns2", "bar");

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "ns", "foo").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Webhook.aka.io \"foo\" not found");
        assert_eq!(out, Webhook::default());
        assert_eq!(store.request_count(), 2);
    }

    #[tokio::test]
    async fn no_object_and_no_alias_is_not_found() {
        let (_store, resolver) = setup();

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "ns", "foo").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.to_string(), "Webhook.aka.io \"foo\" not found");
    }

    #[tokio::test]
    async fn empty_namespace_skips_direct_read() {
        let (store, resolver) = setup();
        put_hook(&store, "", "foo", "");

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "", "foo").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Webhook.aka.io \"foo\" not found");
        let requests = store.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].gvk, Alias::gvk());
    }

    #[tokio::test]
    async fn empty_namespace_resolves_alias() {
        let (store, resolver) = setup();
        put_hook(&store, "ns2", "bar", "foo");
        link(&store, "foo", "ns2", "bar");

        let mut out = Webhook::default();
        resolver.get(&mut out, "", "foo").await.unwrap();

        assert_eq!(out.metadata.name.as_deref(), Some("bar"));
        assert!(store.requests().iter().all(|r| r.key.name != "foo"));
    }

    #[tokio::test]
    async fn direct_store_errors_are_not_masked() {
        let (store, resolver) = setup();
        store.fail_kind("Webhook", "connection refused");

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "ns", "foo").await.unwrap_err();

        assert!(matches!(err, AliasError::Store(StoreError::Backend(_))));
        assert!(err.is_retriable());
        assert_eq!(store.request_count(), 1);
    }

    #[tokio::test]
    async fn alias_store_error_is_joined() {
        let (store, resolver) = setup();
        store.fail_kind("Alias", "connection refused");

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "ns", "foo").await.unwrap_err();

        match &err {
            AliasError::Joined { lookup, alias } => {
                assert!(lookup.is_not_found());
                assert!(matches!(alias, StoreError::Backend(_)));
            }
            other => panic!("expected joined error, got {other:?}"),
        }
        assert!(!err.is_not_found());
        assert!(err.is_retriable());
        assert_eq!(err.http_status_code(), 503);
    }

    #[tokio::test]
    async fn malformed_alias_record_is_not_retriable() {
        let (store, resolver) = setup();
        let key = key_from_scope_id("Webhook", "foo");
        put_raw_alias(&store, &key, serde_json::json!({ "targetKind": 5 }));

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "ns", "foo").await.unwrap_err();

        match &err {
            AliasError::Joined { lookup, alias } => {
                assert!(lookup.is_not_found());
                assert!(matches!(alias, StoreError::Decode(_)));
            }
            other => panic!("expected joined error, got {other:?}"),
        }
        assert!(!err.is_retriable());
        assert!(!err.is_not_found());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(out, Webhook::default());
    }

    #[tokio::test]
    async fn dangling_alias_reports_target() {
        let (store, resolver) = setup();
        link(&store, "foo", "ns2", "bar");

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "ns", "foo").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Webhook.aka.io \"bar\" not found");
    }

    #[tokio::test]
    async fn target_store_error_is_returned() {
        let (store, resolver) = setup();
        link(&store, "foo", "ns2", "bar");

        // Empty namespace: the only Webhook read is the target read.
        store.fail_kind("Webhook", "timeout");
        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "", "foo").await.unwrap_err();

        assert!(matches!(err, AliasError::Store(StoreError::Backend(_))));
    }

    #[tokio::test]
    async fn unknown_kind_fails_before_reading() {
        let store = Arc::new(MemoryStore::new());
        let client = Client::new(Arc::clone(&store), Arc::new(Scheme::new()));
        let resolver = Resolver::new(client);

        let mut out = Webhook::default();
        for namespace in ["ns", ""] {
            let err = resolver.get(&mut out, namespace, "foo").await.unwrap_err();
            assert!(matches!(err, AliasError::Kind(_)));
        }
        assert_eq!(store.request_count(), 0);
    }

    #[tokio::test]
    async fn scope_override_partitions_keys() {
        let (store, resolver) = setup();
        let mut tool = Tool::new("ns2", "t1", "search");
        tool.scope = "shared".to_string();
        store.insert(&Tool::gvk(), &tool).unwrap();
        let kind_key = key_from_scope_id("Tool", "search");
        put_alias(&store, &kind_key, "Tool", "ns2", "missing");

        let mut out = Tool {
            scope: "shared".to_string(),
            ..Tool::default()
        };
        let err = resolver.get(&mut out, "", "search").await.unwrap_err();
        assert!(err.is_not_found());

        let shared_key = key_from_scope_id("shared", "search");
        put_alias(&store, &shared_key, "Tool", "ns2", "t1");
        let mut out = Tool {
            scope: "shared".to_string(),
            ..Tool::default()
        };
        resolver.get(&mut out, "", "search").await.unwrap();
        assert_eq!(out, tool);
    }

    #[tokio::test]
    async fn alias_records_are_not_followed_twice() {
        let (store, resolver) = setup();
        let outer = key_from_scope_id("Webhook", "foo");
        let inner = key_from_scope_id("Webhook", "bar");
        put_alias(&store, &outer, "Alias", "", inner.as_str());
        put_alias(&store, &inner, "Webhook", "ns2", "bar");
        put_hook(&store, "ns2", "bar", "");

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "ns", "foo").await.unwrap_err();
        assert_eq!(err.to_string(), "Webhook.aka.io \"foo\" not found");
    }

    #[tokio::test]
    async fn alias_created_after_miss_is_seen() {
        let (store, resolver) = setup();
        put_hook(&store, "ns2", "bar", "foo");

        let mut out = Webhook::default();
        let err = resolver.get(&mut out, "ns", "foo").await.unwrap_err();
        assert!(err.is_not_found());

        link(&store, "foo", "ns2", "bar");
        resolver.get(&mut out, "ns", "foo").await.unwrap();
        assert_eq!(out.metadata.name.as_deref(), Some("bar"));
    }

    #[tokio::test]
    async fn concurrent_resolvers_are_independent() {
        let (store, resolver) = setup();
        put_hook(&store, "ns2", "bar", "foo");
        link(&store, "foo", "ns2", "bar");

        let lookups = (0..8).map(|_| {
            let resolver = resolver.clone();
            async move {
                let mut out = Webhook::default();
                let result = resolver.get(&mut out, "ns", "foo").await;
                result.map(|()| out)
            }
        });
        let results = futures::future::join_all(lookups).await;

        for result in results {
            let out = result.unwrap();
            assert_eq!(out.metadata.name.as_deref(), Some("bar"));
        }
        assert_eq!(store.request_count(), 8 * 3);
    }

    #[tokio::test]
    async fn free_function_uses_default_keys() {
        let (store, resolver) = setup();
        let target = put_hook(&store, "ns2", "bar", "foo");
        link(&store, "foo", "ns2", "bar");

        let mut out = Webhook::default();
        get(resolver.client(), &mut out, "ns", "foo").await.unwrap();
        assert_eq!(out, target);
    }
}
