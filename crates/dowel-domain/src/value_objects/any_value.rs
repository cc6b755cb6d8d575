//! Dynamically typed values with checked downcasts
//!
//! Resolved values cross the pipeline as `AnyValue`: a shared, type-erased
//! payload paired with the [`TypeTag`] captured when it was created. The
//! tag makes diagnostics readable and lets consumers fail fast with a
//! typed error instead of silently coercing on mismatch.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::tags::TypeTag;
use crate::error::{Error, Result};

/// Value Object: Dynamically Typed Value
///
/// Cheap to clone (the payload is shared). The tag is captured at the call
/// site where the concrete type is statically known, so no reflection is
/// required to recover it later.
///
/// ## Example
///
/// ```rust
/// use dowel_domain::value_objects::{AnyValue, TypeTag};
///
/// let value = AnyValue::new(42_i32);
/// assert_eq!(value.tag(), TypeTag::of::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert!(value.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct AnyValue {
    tag: TypeTag,
    inner: Arc<dyn Any + Send + Sync>,
}

impl AnyValue {
    /// Wrap a concrete value, capturing its tag
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// The tag of the wrapped type
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Whether the wrapped value is of type `T`
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrow the wrapped value as `T`, or `None` on type mismatch
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Borrow the wrapped value as `T`, failing fast on mismatch
    ///
    /// The error names both the expected and the actual type; no coercion
    /// or defaulting is attempted.
    pub fn try_downcast_ref<T: Any>(&self) -> Result<&T> {
        self.inner
            .downcast_ref::<T>()
            .ok_or_else(|| Error::type_mismatch(std::any::type_name::<T>(), self.tag.name()))
    }

    /// Extract the shared payload as `Arc<T>`, failing fast on mismatch
    pub fn try_downcast_arc<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        self.inner
            .clone()
            .downcast::<T>()
            .map_err(|_| Error::type_mismatch(std::any::type_name::<T>(), self.tag.name()))
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValue").field("tag", &self.tag).finish()
    }
}
