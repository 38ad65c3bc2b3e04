//! Shared test fixtures.

use std::any::Any;
use std::sync::Arc;

use aka_core::{AliasKey, AliasScoped, Aliasable, GroupVersionKind, Object, ObjectMeta};
use aka_store::{Alias, Client, MemoryStore, Webhook};
use serde::{Deserialize, Serialize};

use crate::key::key_from_scope_id;
use crate::resolve::Resolver;

/// A resolver over an empty memory store that knows every aka type plus `Tool`.
pub(crate) fn setup() -> (Arc<MemoryStore>, Resolver<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let scheme = aka_store::scheme().with::<Tool>(Tool::gvk());
    let resolver = Resolver::new(Client::new(Arc::clone(&store), Arc::new(scheme)));
    (store, resolver)
}

fn meta(namespace: &str, name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
        ..ObjectMeta::default()
    }
}

pub(crate) fn hook(namespace: &str, name: &str, alias: &str) -> Webhook {
    let mut hook = Webhook::default();
    hook.metadata = meta(namespace, name);
    hook.spec.alias = alias.to_string();
    hook.spec.workflow = "wf1".to_string();
    hook
}

/// Store a webhook and return it.
pub(crate) fn put_hook(store: &MemoryStore, namespace: &str, name: &str, alias: &str) -> Webhook {
    let stored = hook(namespace, name, alias);
    store.insert(&Webhook::gvk(), &stored).unwrap();
    stored
}

pub(crate) fn put_alias(
    store: &MemoryStore,
    key: &AliasKey,
    kind: &str,
    namespace: &str,
    name: &str,
) {
    let alias = Alias::new(key.as_str(), kind, namespace, name);
    store.insert(&Alias::gvk(), &alias).unwrap();
}

/// Point the webhook alias `alias` at `namespace/name`.
pub(crate) fn link(store: &MemoryStore, alias: &str, namespace: &str, name: &str) {
    let key = key_from_scope_id("Webhook", alias);
    put_alias(store, &key, "Webhook", namespace, name);
}

/// Store an alias record at `key` whose spec is `spec` verbatim.
pub(crate) fn put_raw_alias(store: &MemoryStore, key: &AliasKey, spec: serde_json::Value) {
    let raw = RawAlias {
        metadata: meta("", key.as_str()),
        spec,
    };
    store.insert(&Alias::gvk(), &raw).unwrap();
}

#[derive(Serialize)]
struct RawAlias {
    metadata: ObjectMeta,
    spec: serde_json::Value,
}

impl Object for RawAlias {
    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An aliasable type with a scope override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Tool {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub scope: String,
}

impl Tool {
    pub(crate) fn gvk() -> GroupVersionKind {
        aka_store::types::gvk("Tool")
    }

    pub(crate) fn new(namespace: &str, name: &str, alias: &str) -> Self {
        Self {
            metadata: meta(namespace, name),
            alias: alias.to_string(),
            scope: String::new(),
        }
    }
}

impl Object for Tool {
    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Aliasable for Tool {
    fn alias_name(&self) -> &str {
        &self.alias
    }

    fn as_scoped(&self) -> Option<&dyn AliasScoped> {
        Some(self)
    }

    fn as_object(&self) -> Option<&dyn Object> {
        Some(self)
    }
}

impl AliasScoped for Tool {
    fn alias_scope(&self) -> &str {
        &self.scope
    }
}

/// Aliasable, but without the identity needed to resolve a kind.
pub(crate) struct Detached;

impl Aliasable for Detached {
    fn alias_name(&self) -> &str {
        "foo"
    }

    fn as_object(&self) -> Option<&dyn Object> {
        None
    }
}
