//! Shared registry handle
//!
//! The core registry types carry no locking (see the crate docs); this
//! wrapper is the concurrency guarantee a collaborator adds when one
//! registry is shared across threads. Configuration takes the write lock,
//! resolution takes the read lock, so configuration and resolution phases
//! may interleave safely.
//!
//! ## Pattern
//!
//! ```text
//! configuration thread ──► configure(|registry| ...)   (write lock)
//! resolution threads  ──► resolve(key)                 (read lock)
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use dowel_domain::error::Result;
use dowel_domain::value_objects::{AnyValue, BuildKey};

use crate::driver::ResolutionDriver;
use crate::registry::PolicyRegistry;
use crate::report::RegistryReport;

/// Cloneable, lock-protected handle to one [`PolicyRegistry`]
///
/// Clones share the same underlying registry. A poisoned lock is recovered
/// rather than propagated: the registry holds only installed policies, so
/// a panicking reader/writer cannot leave it half-written in a way this
/// core could detect anyway.
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<PolicyRegistry>>,
}

impl SharedRegistry {
    /// Create a handle over an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-populated registry
    pub fn from_registry(registry: PolicyRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Run configuration code under the write lock
    pub fn configure<R>(&self, f: impl FnOnce(&mut PolicyRegistry) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Run read-only code under the read lock
    pub fn inspect<R>(&self, f: impl FnOnce(&PolicyRegistry) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Resolve a build key under the read lock
    ///
    /// The lock is held for the whole resolution, including delegated
    /// lookups, so a single resolution always sees one consistent
    /// configuration.
    pub fn resolve(&self, key: &BuildKey) -> Result<Option<AnyValue>> {
        self.inspect(|registry| ResolutionDriver::new(registry).resolve(key))
    }

    /// Snapshot the registry contents for diagnostics
    pub fn report(&self) -> RegistryReport {
        self.inspect(PolicyRegistry::report)
    }
}

impl std::fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRegistry").finish()
    }
}
