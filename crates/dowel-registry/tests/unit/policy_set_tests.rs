//! Tests for the policy set contract
//!
//! Exercises the set through its public surface with caller-defined policy
//! kinds, the way a configuring container would: installation is
//! unvalidated, lookups never fail on a miss, and the typed sugar is
//! behaviorally identical to the untyped operations.

use std::sync::Arc;

use dowel_domain::ports::BuilderPolicy;
use dowel_domain::value_objects::PolicyKind;
use dowel_registry::PolicySet;

struct LifetimePolicy {
    transient: bool,
}
impl BuilderPolicy for LifetimePolicy {}

struct SelectorPolicy {
    member: &'static str,
}
impl BuilderPolicy for SelectorPolicy {}

#[test]
fn test_untyped_and_typed_surface_agree() {
    let mut set = PolicySet::new();
    set.set(
        PolicyKind::of::<LifetimePolicy>(),
        Arc::new(LifetimePolicy { transient: true }),
    );

    // Same entry through both surfaces
    let untyped = set.get(PolicyKind::of::<LifetimePolicy>()).unwrap();
    let typed = set.get_as::<LifetimePolicy>().unwrap();
    assert!(typed.transient);
    assert!(untyped.downcast_arc::<LifetimePolicy>().is_ok());
}

#[test]
fn test_one_entry_per_kind_invariant() {
    let mut set = PolicySet::new();
    set.set_of(LifetimePolicy { transient: true });
    set.set_of(LifetimePolicy { transient: false });
    set.set_of(SelectorPolicy { member: "new" });

    assert_eq!(set.len(), 2);
    assert!(!set.get_as::<LifetimePolicy>().unwrap().transient);
    assert_eq!(set.get_as::<SelectorPolicy>().unwrap().member, "new");
}

#[test]
fn test_clear_then_get_is_absent() {
    let mut set = PolicySet::new();
    set.set_of(LifetimePolicy { transient: true });
    set.clear(PolicyKind::of::<LifetimePolicy>());
    assert!(set.get(PolicyKind::of::<LifetimePolicy>()).is_none());
}

#[test]
fn test_clear_all_then_every_get_is_absent() {
    let mut set = PolicySet::new();
    set.set_of(LifetimePolicy { transient: true });
    set.set_of(SelectorPolicy { member: "new" });
    set.clear_all();
    assert!(set.get_as::<LifetimePolicy>().is_none());
    assert!(set.get_as::<SelectorPolicy>().is_none());
}

#[test]
fn test_downcast_to_wrong_kind_is_none_not_panic() {
    let mut set = PolicySet::new();
    // Install under one kind, then ask the set for a different kind:
    // absent, because kinds key the map, not the entry's own type.
    set.set(
        PolicyKind::of::<SelectorPolicy>(),
        Arc::new(LifetimePolicy { transient: true }),
    );
    assert!(set.get_as::<SelectorPolicy>().is_none());
    assert!(set.get_as::<LifetimePolicy>().is_none());
}
