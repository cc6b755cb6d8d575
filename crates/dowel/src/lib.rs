//! # Dowel
//!
//! A policy-indexed dependency resolution core: given a requested build
//! key (a type, optionally qualified by a name), Dowel determines a value
//! at first-use time by consulting a mutable set of per-key *policies* -
//! swappable rules describing how to construct a value, inject parameters
//! into it, or reuse one that already exists.
//!
//! This is the core of a container, not a whole one: the owning container
//! populates the policy registry, decides lifetimes, and walks object
//! graphs. Dowel owns the registry, the policy sets, and the resolvers.
//!
//! ## Example
//!
//! ```rust
//! use dowel::domain::value_objects::{AnyValue, BuildKey};
//! use dowel::domain::Error;
//! use dowel::registry::{PolicyRegistry, ResolutionDriver};
//! use dowel::resolvers::{ConstructorPolicy, InjectionParameter};
//!
//! struct Widget { count: i32 }
//!
//! let mut registry = PolicyRegistry::new();
//! registry.set(
//!     &BuildKey::of::<Widget>(),
//!     ConstructorPolicy::new(|args| {
//!         let count = args[0]
//!             .as_ref()
//!             .ok_or_else(|| Error::resolution("argument `count` is absent"))?
//!             .try_downcast_ref::<i32>()?;
//!         Ok(AnyValue::new(Widget { count: *count }))
//!     })
//!     .with_slot("count", InjectionParameter::of::<i32>(Some(42))),
//! );
//!
//! let driver = ResolutionDriver::new(&registry);
//! let widget = driver.resolve(&BuildKey::of::<Widget>()).unwrap().unwrap();
//! assert_eq!(widget.downcast_ref::<Widget>().unwrap().count, 42);
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered split:
//!
//! - `domain` - build keys, type tags, dynamic values, error taxonomy,
//!   and the policy/resolver port traits
//! - `resolvers` - concrete resolvers, injection values, and the
//!   constructor policy
//! - `registry` - policy sets, the registry with named-to-default lookup
//!   fallback, the resolution driver, and the shared (locked) handle

/// Domain layer - value objects, errors, and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use dowel_domain::*;
}

/// Resolvers layer - concrete resolvers and injection values
///
/// Re-exports from the resolvers crate for convenience
pub mod resolvers {
    pub use dowel_resolvers::*;
}

/// Registry layer - policy sets, registry, driver, shared handle
///
/// Re-exports from the registry crate for convenience
pub mod registry {
    pub use dowel_registry::*;
}

// Flat re-exports of the everyday working set
pub use dowel_domain::{
    AnyValue, BuildContext, BuildKey, BuilderPolicy, Error, PolicyKind, Resolver, ResolverPolicy,
    Result, TypeTag,
};
pub use dowel_registry::{PolicyRegistry, PolicySet, ResolutionDriver, SharedRegistry};
pub use dowel_resolvers::{
    ConstructorPolicy, FactoryResolver, InjectionParameter, InjectionValue, KeyedResolver,
    LiteralResolver, ResolvedParameter,
};
