//! Domain Value Objects
//!
//! Immutable value objects that identify what is being resolved and carry
//! resolved values across the pipeline. Value objects are defined by their
//! attributes and compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeTag`] | Stable identity of a Rust type, captured as ordinary data |
//! | [`PolicyKind`] | Identity of a policy contract, the key within a policy set |
//! | [`BuildKey`] | What is being resolved: a type, optionally qualified by a name |
//! | [`AnyValue`] | A dynamically typed value paired with the tag it was created from |

/// Dynamically typed values with checked downcasts
pub mod any_value;
/// Build key value objects
pub mod build_key;
/// Type and policy-kind identity tags
pub mod tags;

// Re-export commonly used value objects
pub use any_value::AnyValue;
pub use build_key::BuildKey;
pub use tags::{PolicyKind, TypeTag};
