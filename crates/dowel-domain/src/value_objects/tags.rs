//! Type and policy-kind identity tags
//!
//! Both tags wrap a `std::any::TypeId` captured at the call site, where the
//! concrete type is still statically known. Equality and hashing use the id
//! alone; the type name rides along for diagnostics and `Display` output.
//! No reflection is involved - the tag is ordinary data once captured.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ports::BuilderPolicy;

/// Value Object: Stable Type Identity
///
/// Identifies a Rust type for map lookups without carrying the type itself.
/// Unsized types (trait objects) are accepted, so a tag can name the
/// abstract contract being resolved rather than a concrete implementation.
///
/// ## Example
///
/// ```rust
/// use dowel_domain::value_objects::TypeTag;
///
/// let a = TypeTag::of::<u32>();
/// let b = TypeTag::of::<u32>();
/// assert_eq!(a, b);
/// assert!(a.name().contains("u32"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Capture the tag of a type known at the call site
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying type id
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type name, for diagnostics only
    ///
    /// Names come from `std::any::type_name` and are not guaranteed to be
    /// stable across compiler versions; identity always uses [`Self::id`].
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Value Object: Policy Kind
///
/// Names a policy contract and keys the entry within a policy set. Every
/// concrete policy type maps to exactly one kind, so "install a
/// `ConstructorPolicy`" and "look up the `ConstructorPolicy` kind" agree by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PolicyKind(TypeTag);

impl PolicyKind {
    /// The kind identifier for a concrete policy type
    pub fn of<P: BuilderPolicy>() -> Self {
        Self(TypeTag::of::<P>())
    }

    /// The kind name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
