//! Factory resolver
//!
//! Wraps a caller-supplied construction closure as a resolver. The closure
//! receives the build context, so it can both construct fresh values and
//! delegate parts of the work back into the pipeline.

use std::fmt;
use std::sync::Arc;

use dowel_domain::error::Result;
use dowel_domain::ports::{BuildContext, Resolver};
use dowel_domain::value_objects::AnyValue;

/// Construction closure signature for [`FactoryResolver`]
pub type FactoryFn = Arc<dyn Fn(&dyn BuildContext) -> Result<Option<AnyValue>> + Send + Sync>;

/// Resolver that runs a construction closure on every resolution
///
/// The closure must be safe to invoke concurrently; any captured state is
/// shared across resolutions.
pub struct FactoryResolver {
    factory: FactoryFn,
}

impl FactoryResolver {
    /// Wrap a construction closure
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&dyn BuildContext) -> Result<Option<AnyValue>> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }
}

impl Resolver for FactoryResolver {
    fn resolve(&self, ctx: &dyn BuildContext) -> Result<Option<AnyValue>> {
        (self.factory)(ctx)
    }
}

impl fmt::Debug for FactoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryResolver").finish()
    }
}
