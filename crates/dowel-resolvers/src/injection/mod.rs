//! Injection value hierarchy
//!
//! Injection values are what configuration code writes down: typed
//! descriptions of how a single dependency slot gets its value. At
//! resolution time each value derives the resolver that actually produces
//! the runtime value.
//!
//! ## Pattern
//!
//! ```text
//! configuration         resolution
//! ─────────────         ──────────
//! InjectionParameter  → LiteralResolver (captured value, verbatim)
//! ResolvedParameter   → KeyedResolver   (delegate to another build key)
//! ```

use std::sync::Arc;

use dowel_domain::ports::Resolver;
use dowel_domain::value_objects::TypeTag;

/// Parameter slot values
pub mod parameter;
/// Container-resolved slot values
pub mod resolved;

pub use parameter::InjectionParameter;
pub use resolved::ResolvedParameter;

/// Typed value holder for one dependency slot
///
/// Pairs a declared type with a way to obtain the runtime value. The
/// declared type is advisory: installing a value never validates it
/// against the slot, and consumers perform their own checked downcast at
/// the point of use.
pub trait InjectionValue: Send + Sync {
    /// The declared type this value satisfies
    fn type_tag(&self) -> TypeTag;

    /// Whether this value can satisfy a slot of the given type
    fn matches(&self, slot: &TypeTag) -> bool {
        self.type_tag() == *slot
    }

    /// Derive the resolver that produces the runtime value
    ///
    /// `type_under_construction` is the type whose member needs this
    /// value. It exists for interface uniformity across the hierarchy;
    /// values with nothing left to close over ignore it.
    fn resolver(&self, type_under_construction: TypeTag) -> Arc<dyn Resolver>;
}
