//! Container-resolved slot values
//!
//! A [`ResolvedParameter`] says "ask the container" instead of "use this
//! literal": the slot's value is whatever the pipeline resolves for a
//! build key, looked up at resolution time rather than captured at
//! configuration time.

use std::fmt;
use std::sync::Arc;

use dowel_domain::ports::Resolver;
use dowel_domain::value_objects::{BuildKey, TypeTag};

use super::InjectionValue;
use crate::keyed::KeyedResolver;

/// Injection value resolved through the pipeline by build key
pub struct ResolvedParameter {
    key: BuildKey,
}

impl ResolvedParameter {
    /// Resolve the slot from the type-level default registration of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            key: BuildKey::of::<T>(),
        }
    }

    /// Resolve the slot from a named registration of `T`
    pub fn named<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self {
            key: BuildKey::named::<T>(name),
        }
    }

    /// Resolve the slot from an explicit build key
    pub fn with_key(key: BuildKey) -> Self {
        Self { key }
    }

    /// The build key this slot resolves through
    pub fn key(&self) -> &BuildKey {
        &self.key
    }
}

impl InjectionValue for ResolvedParameter {
    fn type_tag(&self) -> TypeTag {
        self.key.tag()
    }

    fn resolver(&self, _type_under_construction: TypeTag) -> Arc<dyn Resolver> {
        Arc::new(KeyedResolver::new(self.key.clone()))
    }
}

impl fmt::Debug for ResolvedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedParameter")
            .field("key", &self.key)
            .finish()
    }
}
