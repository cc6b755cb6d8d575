//! Policy sets
//!
//! One [`PolicySet`] owns the policies attached to a single build key: a
//! mapping from policy kind to entry, with at most one entry per kind.
//! All operations are total - getting a missing kind is an absent result,
//! setting an existing kind overwrites, clearing a missing kind is a
//! no-op. Installing an entry performs no validation against the kind's
//! expected contract; that check is deferred to the point of use.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dowel_domain::ports::BuilderPolicy;
use dowel_domain::value_objects::PolicyKind;
use tracing::{debug, trace};

/// The collection of policies attached to one build key
#[derive(Default)]
pub struct PolicySet {
    entries: HashMap<PolicyKind, Arc<dyn BuilderPolicy>>,
}

impl PolicySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry for a kind, or `None` - never fails on a miss
    pub fn get(&self, kind: PolicyKind) -> Option<Arc<dyn BuilderPolicy>> {
        let entry = self.entries.get(&kind).cloned();
        trace!(%kind, hit = entry.is_some(), "policy lookup");
        entry
    }

    /// Install or overwrite the entry for a kind
    pub fn set(&mut self, kind: PolicyKind, policy: Arc<dyn BuilderPolicy>) {
        debug!(%kind, "installing policy");
        self.entries.insert(kind, policy);
    }

    /// Remove the entry for a kind; no-op when absent
    pub fn clear(&mut self, kind: PolicyKind) {
        if self.entries.remove(&kind).is_some() {
            debug!(%kind, "cleared policy");
        }
    }

    /// Remove every entry
    pub fn clear_all(&mut self) {
        debug!(count = self.entries.len(), "clearing all policies");
        self.entries.clear();
    }

    /// Typed sugar for [`Self::get`]: look up `P`'s kind and downcast
    ///
    /// Pure convenience - behavior is identical to getting the kind and
    /// downcasting at the call site.
    pub fn get_as<P: BuilderPolicy>(&self) -> Option<Arc<P>> {
        self.get(PolicyKind::of::<P>())
            .and_then(|policy| policy.downcast_arc::<P>().ok())
    }

    /// Typed sugar for [`Self::set`]: install `policy` under `P`'s kind
    pub fn set_of<P: BuilderPolicy>(&mut self, policy: P) {
        self.set(PolicyKind::of::<P>(), Arc::new(policy));
    }

    /// Typed sugar for [`Self::clear`]
    pub fn clear_of<P: BuilderPolicy>(&mut self) {
        self.clear(PolicyKind::of::<P>());
    }

    /// Number of installed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The kinds currently installed
    pub fn kinds(&self) -> impl Iterator<Item = PolicyKind> + '_ {
        self.entries.keys().copied()
    }
}

impl fmt::Debug for PolicySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicySet")
            .field("kinds", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
