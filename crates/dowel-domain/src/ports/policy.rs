//! Policy capability marker
//!
//! A policy entry is an opaque, type-tagged piece of configuration - a
//! capability, not a class hierarchy. Each concrete policy kind defines
//! its own contract; the marker itself carries no required members.
//!
//! The hierarchy stays open (collaborating subsystems install kinds this
//! crate has never heard of), so retrieval goes through a checked
//! downcast: a policy set hands back `Arc<dyn BuilderPolicy>` and the
//! point of use recovers the concrete kind with `downcast_arc`. Installing
//! an entry never validates that it implements the kind's expected
//! contract - that duck-typed check is deferred to the point of use.

use downcast_rs::{DowncastSync, impl_downcast};

/// Capability marker implemented by every policy entry
///
/// Policies are immutable once installed; replacing the entry for a kind
/// overwrites, never mutates in place. Implementations must be `Send +
/// Sync` (inherited via [`DowncastSync`]) so a shared registry can hand
/// entries to concurrent resolvers.
///
/// ## Example
///
/// ```rust
/// use dowel_domain::ports::BuilderPolicy;
///
/// struct RetainInstancePolicy {
///     retain: bool,
/// }
///
/// impl BuilderPolicy for RetainInstancePolicy {}
/// ```
pub trait BuilderPolicy: DowncastSync {}
impl_downcast!(sync BuilderPolicy);
