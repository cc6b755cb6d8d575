//! Constructor policy
//!
//! The "build via constructor X with these typed arguments" policy entry.
//! It holds ordered, named parameter slots - each an injection value - and
//! a construction closure that receives the resolved arguments in slot
//! order. The resolution driver resolves every slot through its derived
//! resolver before invoking the closure.
//!
//! The closure is where assignment compatibility is enforced: arguments
//! arrive as [`AnyValue`]s and a checked downcast
//! ([`AnyValue::try_downcast_ref`]) fails fast with a typed error on
//! mismatch. No coercion or default substitution happens on the way in.

use std::fmt;
use std::sync::Arc;

use dowel_domain::error::Result;
use dowel_domain::ports::BuilderPolicy;
use dowel_domain::value_objects::AnyValue;

use crate::injection::InjectionValue;

/// Construction closure signature for [`ConstructorPolicy`]
///
/// Receives the resolved arguments in slot order; `None` entries are
/// explicitly registered absent values.
pub type ConstructFn = Arc<dyn Fn(&[Option<AnyValue>]) -> Result<AnyValue> + Send + Sync>;

/// One named constructor argument and the injection value feeding it
pub struct ParameterSlot {
    name: String,
    value: Arc<dyn InjectionValue>,
}

impl ParameterSlot {
    /// The argument name, for diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The injection value bound to this argument
    pub fn value(&self) -> &dyn InjectionValue {
        self.value.as_ref()
    }
}

impl fmt::Debug for ParameterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSlot")
            .field("name", &self.name)
            .field("type", &self.value.type_tag().name())
            .finish()
    }
}

/// Policy entry describing how to construct instances for a build key
///
/// ## Example
///
/// ```rust
/// use dowel_resolvers::{ConstructorPolicy, InjectionParameter};
/// use dowel_domain::value_objects::AnyValue;
/// use dowel_domain::error::Error;
///
/// struct Widget { count: i32 }
///
/// let policy = ConstructorPolicy::new(|args| {
///     let count = args[0]
///         .as_ref()
///         .ok_or_else(|| Error::resolution("argument `count` is absent"))?
///         .try_downcast_ref::<i32>()?;
///     Ok(AnyValue::new(Widget { count: *count }))
/// })
/// .with_slot("count", InjectionParameter::of::<i32>(Some(42)));
/// ```
pub struct ConstructorPolicy {
    slots: Vec<ParameterSlot>,
    construct: ConstructFn,
}

impl ConstructorPolicy {
    /// Describe a constructor by its construction closure
    pub fn new<F>(construct: F) -> Self
    where
        F: Fn(&[Option<AnyValue>]) -> Result<AnyValue> + Send + Sync + 'static,
    {
        Self {
            slots: Vec::new(),
            construct: Arc::new(construct),
        }
    }

    /// Append a named argument slot
    ///
    /// Slot order is argument order: the construction closure receives
    /// resolved values in the order slots were appended.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl InjectionValue + 'static) -> Self {
        self.slots.push(ParameterSlot {
            name: name.into(),
            value: Arc::new(value),
        });
        self
    }

    /// The declared argument slots, in order
    pub fn slots(&self) -> &[ParameterSlot] {
        &self.slots
    }

    /// Invoke the construction closure with resolved arguments
    pub fn construct(&self, args: &[Option<AnyValue>]) -> Result<AnyValue> {
        (self.construct)(args)
    }
}

impl BuilderPolicy for ConstructorPolicy {}

impl fmt::Debug for ConstructorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorPolicy")
            .field("slots", &self.slots)
            .finish()
    }
}
