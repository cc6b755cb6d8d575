//! Literal value resolver
//!
//! The base case every richer resolver composes over: pure data retrieval
//! with no failure mode. The build context is accepted for interface
//! uniformity and ignored - a captured value has nothing left to resolve.

use std::any::Any;
use std::fmt;

use dowel_domain::error::Result;
use dowel_domain::ports::{BuildContext, Resolver};
use dowel_domain::value_objects::AnyValue;

/// Resolver that always yields its captured value
///
/// An absent captured value is legitimate (an explicitly registered
/// "nothing" for a nullable slot) and resolves to `Ok(None)`.
pub struct LiteralResolver {
    value: Option<AnyValue>,
}

impl LiteralResolver {
    /// Capture an already-wrapped value (or its explicit absence)
    pub fn new(value: Option<AnyValue>) -> Self {
        Self { value }
    }

    /// Capture a concrete value
    pub fn of<T: Any + Send + Sync>(value: T) -> Self {
        Self::new(Some(AnyValue::new(value)))
    }

    /// The captured value
    pub fn value(&self) -> Option<&AnyValue> {
        self.value.as_ref()
    }
}

impl Resolver for LiteralResolver {
    fn resolve(&self, _ctx: &dyn BuildContext) -> Result<Option<AnyValue>> {
        Ok(self.value.clone())
    }
}

impl fmt::Debug for LiteralResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiteralResolver")
            .field("value", &self.value)
            .finish()
    }
}
