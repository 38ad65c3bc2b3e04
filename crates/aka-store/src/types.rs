//! Resource types stored in the object store.
//!
//! All types live in the `aka.io/v1` API group. [`scheme`] registers them
//! for kind lookup.

use std::any::Any;

use aka_core::{Aliasable, GroupVersionKind, Object, ObjectMeta, Scheme};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API group of aka resources.
pub const GROUP: &str = "aka.io";

/// API version of aka resources.
pub const VERSION: &str = "v1";

/// Kind identifier for `kind` in the aka API group.
#[must_use]
pub fn gvk(kind: &str) -> GroupVersionKind {
    GroupVersionKind::gvk(GROUP, VERSION, kind)
}

/// A scheme with every aka resource type registered.
#[must_use]
pub fn scheme() -> Scheme {
    Scheme::new()
        .with::<Alias>(Alias::gvk())
        .with::<Webhook>(Webhook::gvk())
        .with::<OAuthApp>(OAuthApp::gvk())
}

/// A cluster-scoped record mapping an alias key to its target object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    /// Object metadata; the name is the alias key.
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Target of the alias.
    #[serde(default)]
    pub spec: AliasSpec,
}

/// The object an alias record points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasSpec {
    /// Name of the target object.
    #[serde(default)]
    pub target_name: String,
    /// Namespace of the target object.
    #[serde(default)]
    pub target_namespace: String,
    /// Kind of the target object, without group or version.
    #[serde(default)]
    pub target_kind: String,
}

impl Alias {
    /// Kind identifier of alias records.
    #[must_use]
    pub fn gvk() -> GroupVersionKind {
        gvk("Alias")
    }

    /// Create an alias record named `key` pointing at `namespace/name` of `kind`.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            metadata: ObjectMeta {
                name: Some(key.into()),
                ..ObjectMeta::default()
            },
            spec: AliasSpec {
                target_name: name.into(),
                target_namespace: namespace.into(),
                target_kind: kind.into(),
            },
        }
    }
}

impl Object for Alias {
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

/// An inbound webhook that triggers a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// Object metadata.
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired state.
    #[serde(default)]
    pub spec: WebhookSpec,
    /// Observed state.
    #[serde(default)]
    pub status: WebhookStatus,
}

/// Desired state of a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSpec {
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Requested alias, empty for none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias: String,
    /// Workflow triggered by the webhook.
    #[serde(default)]
    pub workflow: String,
    /// Request headers forwarded to the workflow.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,
}

/// Observed state of a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookStatus {
    /// Whether the alias record for this webhook has been written.
    #[serde(default)]
    pub alias_assigned: bool,
    /// Completion time of the last successful run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_successful_run_completed: Option<DateTime<Utc>>,
}

impl Webhook {
    /// Kind identifier of webhooks.
    #[must_use]
    pub fn gvk() -> GroupVersionKind {
        gvk("Webhook")
    }
}

impl Object for Webhook {
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

impl Aliasable for Webhook {
    fn alias_name(&self) -> &str {
        &self.spec.alias
    }

    fn set_assigned(&mut self) {
        self.status.alias_assigned = true;
    }

    fn is_assigned(&self) -> bool {
        self.status.alias_assigned
    }

    fn as_object(&self) -> Option<&dyn Object> {
        Some(self)
    }
}

/// An OAuth application registered for an integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthApp {
    /// Object metadata.
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired state.
    #[serde(default)]
    pub spec: OAuthAppSpec,
}

/// Desired state of an OAuth application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthAppSpec {
    /// Application manifest.
    #[serde(default)]
    pub manifest: OAuthAppManifest,
}

/// OAuth endpoints and client identity of an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthAppManifest {
    /// Integration name; doubles as the alias.
    #[serde(default)]
    pub integration: String,
    /// OAuth client ID.
    #[serde(default)]
    pub client_id: String,
    /// Authorization endpoint.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auth_url: String,
    /// Token endpoint.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_url: String,
}

impl OAuthApp {
    /// Kind identifier of OAuth applications.
    #[must_use]
    pub fn gvk() -> GroupVersionKind {
        gvk("OAuthApp")
    }
}

impl Object for OAuthApp {
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

// OAuth apps are addressable by integration name as soon as they exist, so
// the assignment flag keeps its defaults.
impl Aliasable for OAuthApp {
    fn alias_name(&self) -> &str {
        &self.spec.manifest.integration
    }

    fn as_object(&self) -> Option<&dyn Object> {
        Some(self)
    }
}
