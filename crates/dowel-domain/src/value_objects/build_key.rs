//! Build key value objects
//!
//! A build key identifies "what is being resolved": a type, optionally
//! qualified by a name discriminator so the same type can carry several
//! independent registrations.

use std::fmt;

use super::tags::TypeTag;

/// Value Object: Build Key
///
/// Immutable once constructed; compared by value on type identity plus
/// name, and usable as a map key. A key without a name is the *type-level
/// default* - registry lookups for a named key fall back to it when no
/// exact registration exists.
///
/// ## Example
///
/// ```rust
/// use dowel_domain::value_objects::BuildKey;
///
/// struct Widget;
///
/// let default = BuildKey::of::<Widget>();
/// let named = BuildKey::named::<Widget>("primary");
/// assert_ne!(default, named);
/// assert_eq!(named.type_default(), default);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BuildKey {
    tag: TypeTag,
    name: Option<String>,
}

impl BuildKey {
    /// Key for the type-level default (no name qualifier)
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_tag(TypeTag::of::<T>())
    }

    /// Key for a named registration of the type
    pub fn named<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            name: Some(name.into()),
        }
    }

    /// Key for the type-level default of an already-captured tag
    pub fn from_tag(tag: TypeTag) -> Self {
        Self { tag, name: None }
    }

    /// Key for a named registration of an already-captured tag
    pub fn from_tag_named(tag: TypeTag, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: Some(name.into()),
        }
    }

    /// The type being resolved
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// The name discriminator, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this key is the type-level default (no name qualifier)
    pub fn is_type_default(&self) -> bool {
        self.name.is_none()
    }

    /// The type-level default key for the same type
    pub fn type_default(&self) -> BuildKey {
        Self::from_tag(self.tag)
    }
}

impl fmt::Display for BuildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}[\"{name}\"]", self.tag),
            None => fmt::Display::fmt(&self.tag, f),
        }
    }
}
