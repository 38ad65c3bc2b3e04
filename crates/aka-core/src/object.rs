//! Capabilities implemented by stored object types.

use std::any::Any;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// A typed object that can be read from the store.
///
/// `as_any` exposes the concrete type so a [`Scheme`](crate::Scheme) can map
/// it to a kind.
pub trait Object: Any + Send + Sync {
    /// Object metadata.
    fn meta(&self) -> &ObjectMeta;

    /// Mutable object metadata.
    fn meta_mut(&mut self) -> &mut ObjectMeta;

    /// The object as `Any`.
    fn as_any(&self) -> &dyn Any;

    /// Name of the object, empty if unset.
    fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }

    /// Namespace of the object, empty for cluster-scoped objects.
    fn namespace(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }

    /// Rust type name, used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// An object type that can be addressed by a human-chosen alias.
pub trait Aliasable: Send + Sync {
    /// The requested alias. Empty means no alias.
    fn alias_name(&self) -> &str;

    /// Mark the alias record for this object as written.
    fn set_assigned(&mut self) {}

    /// Whether the alias record for this object has been written.
    fn is_assigned(&self) -> bool {
        true
    }

    /// The scope override capability, if this type has one.
    fn as_scoped(&self) -> Option<&dyn AliasScoped> {
        None
    }

    /// The identity capability needed to resolve this object's kind.
    fn as_object(&self) -> Option<&dyn Object>;

    /// Rust type name, used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Overrides the collision domain an alias is registered in.
///
/// Types without this capability share one domain per kind.
pub trait AliasScoped {
    /// The alias scope. Empty falls back to the kind name.
    fn alias_scope(&self) -> &str;
}
