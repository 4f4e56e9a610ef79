//! Well-known annotation names consulted while building construction plans.
//!
//! Annotations are matched by simple name, so `javax.inject.Singleton` and
//! `Singleton` are the same marker.

/// Marks a constructor, field or method as requesting injection.
pub const INJECT: &str = "Inject";

/// The type is singleton-scoped: one instance per owning scope.
pub const SINGLETON: &str = "Singleton";

/// The type's instance is created eagerly and kept as a singleton.
pub const PROVIDES_SINGLETON: &str = "ProvidesSingleton";
