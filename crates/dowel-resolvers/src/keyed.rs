//! Keyed (delegating) resolver
//!
//! Resolves by handing another build key back to the pipeline, letting one
//! registration point at another ("for this slot, resolve whatever the
//! container has for `(Type, name)`"). Cycle detection is out of scope
//! here and belongs to the build pipeline that owns the object graph.

use std::fmt;

use dowel_domain::error::Result;
use dowel_domain::ports::{BuildContext, Resolver};
use dowel_domain::value_objects::{AnyValue, BuildKey};
use tracing::trace;

/// Resolver that delegates to the pipeline for a fixed build key
pub struct KeyedResolver {
    key: BuildKey,
}

impl KeyedResolver {
    /// Delegate to the given build key
    pub fn new(key: BuildKey) -> Self {
        Self { key }
    }

    /// Delegate to the type-level default of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(BuildKey::of::<T>())
    }

    /// The key this resolver delegates to
    pub fn key(&self) -> &BuildKey {
        &self.key
    }
}

impl Resolver for KeyedResolver {
    fn resolve(&self, ctx: &dyn BuildContext) -> Result<Option<AnyValue>> {
        trace!(key = %self.key, "delegating resolution");
        ctx.resolve(&self.key)
    }
}

impl fmt::Debug for KeyedResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedResolver")
            .field("key", &self.key)
            .finish()
    }
}
