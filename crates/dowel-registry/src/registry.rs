//! Policy registry
//!
//! A collection of policy sets keyed by build key. Sets come into
//! existence the first time configuration targets their key and live for
//! the lifetime of the registry.
//!
//! ## Lookup Fallback
//!
//! The policy lookup tries the exact `(type, name)` key first, then the
//! `(type, no-name)` type-level default - "apply to every resolution of
//! this type regardless of name" semantics. A miss at both levels is a
//! valid "no policy configured" outcome, not an error. Callers that want
//! named misses to be terminal use [`PolicyRegistry::get_exact`] instead.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dowel_domain::ports::BuilderPolicy;
use dowel_domain::value_objects::{BuildKey, TypeTag};
use tracing::{debug, trace};

use crate::policy_set::PolicySet;
use crate::report::{RegistryReport, ReportEntry};

/// Registry of policy sets, keyed by build key
#[derive(Default)]
pub struct PolicyRegistry {
    sets: HashMap<BuildKey, PolicySet>,
}

impl PolicyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The set registered for an exact build key, if any
    pub fn policy_set(&self, key: &BuildKey) -> Option<&PolicySet> {
        self.sets.get(key)
    }

    /// The set for an exact build key, created empty when missing
    pub fn policy_set_mut(&mut self, key: &BuildKey) -> &mut PolicySet {
        if !self.sets.contains_key(key) {
            debug!(%key, "creating policy set");
        }
        self.sets.entry(key.clone()).or_default()
    }

    /// The type-level default set for a type, if any
    pub fn type_default(&self, tag: TypeTag) -> Option<&PolicySet> {
        self.sets.get(&BuildKey::from_tag(tag))
    }

    /// Look up a policy with named-to-default fallback
    ///
    /// Tries the exact key first; when the policy kind is absent there (or
    /// the set does not exist) and the key carries a name, falls back to
    /// the type-level default. `None` means "no policy configured".
    pub fn get<P: BuilderPolicy>(&self, key: &BuildKey) -> Option<Arc<P>> {
        if let Some(policy) = self.get_exact::<P>(key) {
            return Some(policy);
        }
        if key.is_type_default() {
            return None;
        }
        trace!(%key, "exact lookup missed, trying type-level default");
        self.get_exact::<P>(&key.type_default())
    }

    /// Look up a policy on the exact key only - named misses are terminal
    pub fn get_exact<P: BuilderPolicy>(&self, key: &BuildKey) -> Option<Arc<P>> {
        self.sets.get(key).and_then(PolicySet::get_as::<P>)
    }

    /// Install a policy for a build key, creating the set if needed
    pub fn set<P: BuilderPolicy>(&mut self, key: &BuildKey, policy: P) {
        self.policy_set_mut(key).set_of(policy);
    }

    /// Remove the whole set registered for a build key; no-op when absent
    pub fn remove_set(&mut self, key: &BuildKey) {
        if self.sets.remove(key).is_some() {
            debug!(%key, "removed policy set");
        }
    }

    /// Remove every set
    pub fn clear_all(&mut self) {
        debug!(count = self.sets.len(), "clearing registry");
        self.sets.clear();
    }

    /// Number of registered build keys
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no build key is registered
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The registered build keys
    pub fn keys(&self) -> impl Iterator<Item = &BuildKey> {
        self.sets.keys()
    }

    /// Snapshot of registered keys and their policy kinds, for diagnostics
    pub fn report(&self) -> RegistryReport {
        let mut entries: Vec<ReportEntry> = self
            .sets
            .iter()
            .map(|(key, set)| ReportEntry {
                build_key: key.to_string(),
                policy_kinds: {
                    let mut kinds: Vec<String> =
                        set.kinds().map(|kind| kind.name().to_string()).collect();
                    kinds.sort();
                    kinds
                },
            })
            .collect();
        entries.sort_by(|a, b| a.build_key.cmp(&b.build_key));
        RegistryReport { entries }
    }
}

impl fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("keys", &self.sets.keys().collect::<Vec<_>>())
            .finish()
    }
}
