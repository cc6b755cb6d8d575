//! Tests for registry lookup fallback and the diagnostics report
//!
//! Validates the two-level lookup order (exact `(type, name)` first, then
//! the `(type, no-name)` default) against a populated registry, and checks
//! the report both as display output and as JSON.

use dowel_domain::ports::BuilderPolicy;
use dowel_domain::value_objects::BuildKey;
use dowel_registry::PolicyRegistry;

struct Connection;

#[derive(Debug, PartialEq)]
struct EndpointPolicy(&'static str);
impl BuilderPolicy for EndpointPolicy {}

fn populated() -> PolicyRegistry {
    let mut registry = PolicyRegistry::new();
    registry.set(&BuildKey::of::<Connection>(), EndpointPolicy("default"));
    registry.set(
        &BuildKey::named::<Connection>("replica"),
        EndpointPolicy("replica"),
    );
    registry
}

#[test]
fn test_lookup_order_exact_then_default() {
    let registry = populated();

    // Exact named registration wins
    let replica = registry
        .get::<EndpointPolicy>(&BuildKey::named::<Connection>("replica"))
        .unwrap();
    assert_eq!(replica.0, "replica");

    // Unknown name falls back to the type-level default
    let fallback = registry
        .get::<EndpointPolicy>(&BuildKey::named::<Connection>("primary"))
        .unwrap();
    assert_eq!(fallback.0, "default");
}

#[test]
fn test_exact_mode_makes_named_misses_terminal() {
    let registry = populated();
    assert!(
        registry
            .get_exact::<EndpointPolicy>(&BuildKey::named::<Connection>("primary"))
            .is_none()
    );
}

#[test]
fn test_default_lookup_never_consults_named_sets() {
    let mut registry = PolicyRegistry::new();
    registry.set(
        &BuildKey::named::<Connection>("replica"),
        EndpointPolicy("replica"),
    );

    // No default registered: a default lookup has nowhere to fall back to.
    assert!(
        registry
            .get::<EndpointPolicy>(&BuildKey::of::<Connection>())
            .is_none()
    );
}

#[test]
fn test_report_is_sorted_and_serializable() {
    let registry = populated();
    let report = registry.report();

    assert_eq!(report.entries.len(), 2);
    let keys: Vec<&str> = report
        .entries
        .iter()
        .map(|entry| entry.build_key.as_str())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);

    let json = serde_json::to_value(&report).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert!(
        entries[0]["policy_kinds"][0]
            .as_str()
            .unwrap()
            .contains("EndpointPolicy")
    );
}

#[test]
fn test_report_display_lists_every_key() {
    let text = populated().report().to_string();
    assert!(text.contains("Connection"));
    assert!(text.contains("\"replica\""));
}
