//! Domain Port Interfaces
//!
//! Boundary contracts between the domain vocabulary and the outer layers
//! that implement resolution. High-level modules define the interfaces
//! here; `dowel-resolvers` supplies concrete resolvers and
//! `dowel-registry` drives them.
//!
//! ## Organization
//!
//! - **policy** - the capability marker every policy entry implements
//! - **resolution** - the resolver and build-context contracts

/// Policy capability marker
pub mod policy;
/// Resolver and build-context contracts
pub mod resolution;

// Re-export commonly used port traits for convenience
pub use policy::BuilderPolicy;
pub use resolution::{BuildContext, Resolver, ResolverPolicy};
