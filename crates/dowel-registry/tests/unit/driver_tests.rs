//! Tests for driving resolution through chained registrations
//!
//! Builds small object graphs through the public surface: delegation
//! chains across named keys, absent-value injection, and failure
//! propagation through nested resolutions.

use dowel_domain::error::Error;
use dowel_domain::ports::ResolverPolicy;
use dowel_domain::value_objects::{AnyValue, BuildKey, TypeTag};
use dowel_registry::{PolicyRegistry, ResolutionDriver};
use dowel_resolvers::{
    ConstructorPolicy, InjectionParameter, KeyedResolver, LiteralResolver, ResolvedParameter,
};

struct Service {
    endpoint: String,
    retries: u32,
}

struct App {
    service: AnyValue,
}

#[test]
fn test_two_level_object_graph() {
    let mut registry = PolicyRegistry::new();

    registry.set(
        &BuildKey::named::<String>("endpoint"),
        ResolverPolicy::wrapping(LiteralResolver::of(String::from("http://localhost"))),
    );

    registry.set(
        &BuildKey::of::<Service>(),
        ConstructorPolicy::new(|args| {
            let endpoint = args[0]
                .as_ref()
                .ok_or_else(|| Error::resolution("argument `endpoint` is absent"))?
                .try_downcast_ref::<String>()?
                .clone();
            let retries = *args[1]
                .as_ref()
                .ok_or_else(|| Error::resolution("argument `retries` is absent"))?
                .try_downcast_ref::<u32>()?;
            Ok(AnyValue::new(Service { endpoint, retries }))
        })
        .with_slot("endpoint", ResolvedParameter::named::<String>("endpoint"))
        .with_slot("retries", InjectionParameter::of::<u32>(Some(3))),
    );

    registry.set(
        &BuildKey::of::<App>(),
        ConstructorPolicy::new(|args| {
            let service = args[0]
                .as_ref()
                .ok_or_else(|| Error::resolution("argument `service` is absent"))?
                .clone();
            Ok(AnyValue::new(App { service }))
        })
        .with_slot("service", ResolvedParameter::of::<Service>()),
    );

    let driver = ResolutionDriver::new(&registry);
    let app = driver.resolve(&BuildKey::of::<App>()).unwrap().unwrap();
    let app = app.downcast_ref::<App>().unwrap();
    let service = app.service.downcast_ref::<Service>().unwrap();
    assert_eq!(service.endpoint, "http://localhost");
    assert_eq!(service.retries, 3);
}

#[test]
fn test_explicit_absent_value_reaches_the_constructor() {
    struct Config {
        proxy: Option<String>,
    }

    let mut registry = PolicyRegistry::new();
    registry.set(
        &BuildKey::of::<Config>(),
        ConstructorPolicy::new(|args| {
            let proxy = match &args[0] {
                Some(value) => Some(value.try_downcast_ref::<String>()?.clone()),
                None => None,
            };
            Ok(AnyValue::new(Config { proxy }))
        })
        .with_slot("proxy", InjectionParameter::of::<String>(None)),
    );

    let driver = ResolutionDriver::new(&registry);
    let config = driver.resolve(&BuildKey::of::<Config>()).unwrap().unwrap();
    assert!(config.downcast_ref::<Config>().unwrap().proxy.is_none());
}

#[test]
fn test_failure_in_nested_resolution_propagates_with_context() {
    let mut registry = PolicyRegistry::new();
    registry.set(
        &BuildKey::of::<Service>(),
        ConstructorPolicy::new(|_args| Err(Error::resolution("unreachable")))
            .with_slot("endpoint", ResolvedParameter::named::<String>("endpoint")),
    );

    let driver = ResolutionDriver::new(&registry);
    let err = driver.resolve(&BuildKey::of::<Service>()).unwrap_err();

    // Outer layer names the slot; the source is the downstream miss.
    assert!(err.to_string().contains("`endpoint`"));
    let source = std::error::Error::source(&err).expect("source should be chained");
    assert!(source.to_string().contains("no resolution policy"));
}

#[test]
fn test_redirect_registration_via_keyed_resolver() {
    // A plain resolver policy can redirect one key to another, the way a
    // type mapping ("when asked for the interface, build the impl") does.
    let mut registry = PolicyRegistry::new();
    registry.set(
        &BuildKey::of::<u64>(),
        ResolverPolicy::wrapping(LiteralResolver::of(10_u64)),
    );
    registry.set(
        &BuildKey::named::<u64>("alias"),
        ResolverPolicy::wrapping(KeyedResolver::new(BuildKey::of::<u64>())),
    );

    let driver = ResolutionDriver::new(&registry);
    let value = driver
        .resolve(&BuildKey::named::<u64>("alias"))
        .unwrap()
        .unwrap();
    assert_eq!(value.downcast_ref::<u64>(), Some(&10));
}

#[test]
fn test_factory_sees_type_under_construction() {
    use dowel_resolvers::FactoryResolver;

    let mut registry = PolicyRegistry::new();
    registry.set(
        &BuildKey::named::<String>("who"),
        ResolverPolicy::wrapping(FactoryResolver::new(|ctx| {
            Ok(Some(AnyValue::new(
                ctx.type_under_construction().name().to_string(),
            )))
        })),
    );

    let driver = ResolutionDriver::new(&registry);
    let value = driver
        .resolve(&BuildKey::named::<String>("who"))
        .unwrap()
        .unwrap();

    // The driver scopes the context to the key being resolved.
    assert_eq!(
        value.downcast_ref::<String>().map(String::as_str),
        Some(TypeTag::of::<String>().name())
    );
}
