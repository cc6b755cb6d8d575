//! Resolution driver
//!
//! Orchestrates one resolution: look up the policy set for a build key,
//! extract the policy kind that knows how to produce a value, invoke the
//! derived resolver with the build context, and hand the value back up.
//!
//! ## Kind Extraction Order
//!
//! 1. [`ResolverPolicy`] - an installed resolver answers outright
//! 2. [`ConstructorPolicy`] - argument slots are resolved, then the
//!    construction closure runs
//!
//! A key with neither kind is a resolution failure, reported with a typed
//! error. Failures from downstream resolvers propagate unchanged - the
//! driver never retries and never substitutes defaults. Cycle detection is
//! a non-goal of this core; a delegation loop is the caller's bug.

use dowel_domain::error::{Error, Result};
use dowel_domain::ports::{BuildContext, ResolverPolicy};
use dowel_domain::value_objects::{AnyValue, BuildKey, TypeTag};
use dowel_resolvers::ConstructorPolicy;
use tracing::debug;

use crate::registry::PolicyRegistry;

/// Drives resolutions against one registry
///
/// Borrowing the registry keeps the driver cheap to create per resolution
/// and guarantees configuration cannot mutate mid-resolution.
///
/// ## Example
///
/// ```rust
/// use dowel_registry::{PolicyRegistry, ResolutionDriver};
/// use dowel_resolvers::LiteralResolver;
/// use dowel_domain::ports::ResolverPolicy;
/// use dowel_domain::value_objects::BuildKey;
///
/// let mut registry = PolicyRegistry::new();
/// registry.set(
///     &BuildKey::of::<i32>(),
///     ResolverPolicy::wrapping(LiteralResolver::of(42_i32)),
/// );
///
/// let driver = ResolutionDriver::new(&registry);
/// let value = driver.resolve(&BuildKey::of::<i32>()).unwrap().unwrap();
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// ```
pub struct ResolutionDriver<'a> {
    registry: &'a PolicyRegistry,
}

impl<'a> ResolutionDriver<'a> {
    /// Create a driver over a registry
    pub fn new(registry: &'a PolicyRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a build key to a value
    ///
    /// `Ok(None)` is an explicitly registered absent value, not a miss; a
    /// key with no resolver-bearing policy at either lookup level is
    /// [`Error::PolicyNotFound`].
    pub fn resolve(&self, key: &BuildKey) -> Result<Option<AnyValue>> {
        debug!(%key, "resolving build key");
        let ctx = DriverContext {
            driver: self,
            building: key.tag(),
        };

        if let Some(policy) = self.registry.get::<ResolverPolicy>(key) {
            return policy.resolver().resolve(&ctx);
        }

        if let Some(policy) = self.registry.get::<ConstructorPolicy>(key) {
            return self.construct(key, &policy, &ctx).map(Some);
        }

        Err(Error::policy_not_found(key))
    }

    /// Resolve every argument slot, then run the construction closure
    fn construct(
        &self,
        key: &BuildKey,
        policy: &ConstructorPolicy,
        ctx: &dyn BuildContext,
    ) -> Result<AnyValue> {
        let mut args = Vec::with_capacity(policy.slots().len());
        for slot in policy.slots() {
            let value = slot
                .value()
                .resolver(key.tag())
                .resolve(ctx)
                .map_err(|source| {
                    Error::resolution_with_source(
                        format!("failed to resolve constructor argument `{}` of {key}", slot.name()),
                        source,
                    )
                })?;
            args.push(value);
        }
        debug!(%key, args = args.len(), "constructing instance");
        policy.construct(&args)
    }
}

/// Build context handed to resolvers by the driver
struct DriverContext<'d, 'a> {
    driver: &'d ResolutionDriver<'a>,
    building: TypeTag,
}

impl BuildContext for DriverContext<'_, '_> {
    fn type_under_construction(&self) -> TypeTag {
        self.building
    }

    fn resolve(&self, key: &BuildKey) -> Result<Option<AnyValue>> {
        self.driver.resolve(key)
    }
}
