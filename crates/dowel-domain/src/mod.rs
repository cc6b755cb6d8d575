//! Domain layer for Dowel
//!
//! Core vocabulary of the policy-indexed resolution pipeline: build keys,
//! type tags, dynamically typed values, the policy capability marker, and
//! the resolver/build-context contracts. This crate has no knowledge of
//! concrete resolvers or of the registry that stores policies - those live
//! in `dowel-resolvers` and `dowel-registry` and implement the ports
//! defined here.
//!
//! ## Architecture
//!
//! Ports follow the Dependency Inversion Principle:
//! - The domain defines the contracts (`BuilderPolicy`, `Resolver`,
//!   `BuildContext`)
//! - Outer layers implement them and wire them together

pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export the working vocabulary at the crate root
pub use error::{Error, Result};
pub use ports::{BuildContext, BuilderPolicy, Resolver, ResolverPolicy};
pub use value_objects::{AnyValue, BuildKey, PolicyKind, TypeTag};
