//! Resolver and build-context contracts
//!
//! A resolver is a unit of lazily evaluated resolution logic: given the
//! context of the object currently being built, it produces a value. The
//! context also lets a resolver delegate to the pipeline for another build
//! key, which is how one registration can point at another.
//!
//! ## Data Flow
//!
//! ```text
//! caller → driver looks up ResolverPolicy for key
//!                 │
//!                 ▼
//!          Resolver::resolve(ctx)
//!                 │
//!                 ├── literal value  → Ok(Some(value))
//!                 ├── absent value   → Ok(None)
//!                 └── delegation     → ctx.resolve(other_key)
//! ```

use std::fmt;
use std::sync::Arc;

use super::policy::BuilderPolicy;
use crate::error::Result;
use crate::value_objects::{AnyValue, BuildKey, TypeTag};

/// Context supplied to a resolver by the resolution driver
///
/// Carries the type ultimately being constructed and a way back into the
/// pipeline for delegated lookups. Resolvers that need neither (literal
/// values) simply ignore it.
pub trait BuildContext {
    /// The type at the root of the current construction
    fn type_under_construction(&self) -> TypeTag;

    /// Resolve another build key through the same pipeline
    fn resolve(&self, key: &BuildKey) -> Result<Option<AnyValue>>;
}

/// Executable strategy that produces a value for a dependency slot
///
/// Implementations are stateless or closed over immutable captured state,
/// and must be safe to invoke from concurrent resolutions of the same
/// policy entry. `Ok(None)` is a legitimate outcome - an explicitly
/// registered absent value - and is distinct from a failure.
pub trait Resolver: Send + Sync {
    /// Produce the value for this slot
    fn resolve(&self, ctx: &dyn BuildContext) -> Result<Option<AnyValue>>;
}

/// Policy entry installing a [`Resolver`] for a build key
///
/// This is the policy kind the resolution driver extracts first: when a
/// build key has one installed, its resolver answers the resolution
/// outright and no construction logic runs.
pub struct ResolverPolicy {
    resolver: Arc<dyn Resolver>,
}

impl ResolverPolicy {
    /// Install an already-shared resolver
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }

    /// Install an owned resolver
    pub fn wrapping<R: Resolver + 'static>(resolver: R) -> Self {
        Self::new(Arc::new(resolver))
    }

    /// The installed resolver
    pub fn resolver(&self) -> Arc<dyn Resolver> {
        self.resolver.clone()
    }
}

impl BuilderPolicy for ResolverPolicy {}

impl fmt::Debug for ResolverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverPolicy").finish()
    }
}
