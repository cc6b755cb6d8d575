//! Parameter slot values
//!
//! An [`InjectionParameter`] holds on to a given value and provides the
//! required literal resolver when resolution reaches its slot.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use dowel_domain::error::{Error, Result};
use dowel_domain::ports::Resolver;
use dowel_domain::value_objects::{AnyValue, TypeTag};

use super::InjectionValue;
use crate::literal::LiteralResolver;

/// Injection value that stores a literal for one slot
///
/// The declared type either comes from the value itself
/// ([`Self::inferred`]) or is supplied explicitly ([`Self::with_tag`],
/// [`Self::of`]). Only the explicit forms may pair the type with an
/// absent value - there is nothing to infer a type from otherwise, and
/// that misconfiguration is reported immediately rather than at first
/// resolution.
///
/// ## Example
///
/// ```rust
/// use dowel_resolvers::injection::{InjectionParameter, InjectionValue};
/// use dowel_domain::value_objects::TypeTag;
///
/// let count = InjectionParameter::of::<i32>(Some(42));
/// assert_eq!(count.type_tag(), TypeTag::of::<i32>());
/// ```
pub struct InjectionParameter {
    tag: TypeTag,
    value: Option<AnyValue>,
}

impl InjectionParameter {
    /// Store a value, taking the declared type from the value itself
    ///
    /// Fails with a configuration-time [`Error::InvalidArgument`] when the
    /// value is absent: without a value there is no type to infer.
    pub fn inferred(value: Option<AnyValue>) -> Result<Self> {
        match value {
            Some(value) => Ok(Self {
                tag: value.tag(),
                value: Some(value),
            }),
            None => Err(Error::invalid_argument(
                "injection parameter value must be supplied when its type is inferred",
            )),
        }
    }

    /// Store a value under an explicitly declared type
    ///
    /// No check is performed against the value - an explicit type may
    /// legitimately pair with an absent value to inject "nothing" into a
    /// nullable slot.
    pub fn with_tag(tag: TypeTag, value: Option<AnyValue>) -> Self {
        Self { tag, value }
    }

    /// Store a value under the declared type `T`
    ///
    /// Sugar for [`Self::with_tag`]; the value type is narrowed at compile
    /// time and no additional runtime check is performed.
    pub fn of<T: Any + Send + Sync>(value: Option<T>) -> Self {
        Self::with_tag(TypeTag::of::<T>(), value.map(AnyValue::new))
    }

    /// The stored value
    pub fn value(&self) -> Option<&AnyValue> {
        self.value.as_ref()
    }
}

impl InjectionValue for InjectionParameter {
    fn type_tag(&self) -> TypeTag {
        self.tag
    }

    fn resolver(&self, _type_under_construction: TypeTag) -> Arc<dyn Resolver> {
        Arc::new(LiteralResolver::new(self.value.clone()))
    }
}

impl fmt::Debug for InjectionParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionParameter")
            .field("tag", &self.tag)
            .field("value", &self.value)
            .finish()
    }
}
