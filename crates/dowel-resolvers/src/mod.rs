//! Concrete resolvers and injection values for Dowel
//!
//! Implementations of the domain's [`Resolver`](dowel_domain::Resolver)
//! port, the injection-value hierarchy that configuration code uses to
//! describe constructor arguments, and the constructor policy that ties
//! them together.
//!
//! ## Resolvers
//!
//! | Resolver | Produces |
//! |----------|----------|
//! | [`LiteralResolver`] | a pre-captured value, verbatim |
//! | [`KeyedResolver`] | whatever the pipeline resolves for another build key |
//! | [`FactoryResolver`] | the output of a caller-supplied closure |

pub mod constructor;
pub mod factory;
pub mod injection;
pub mod keyed;
pub mod literal;

// Re-export the configuration-facing surface
pub use constructor::{ConstructorPolicy, ParameterSlot};
pub use factory::FactoryResolver;
pub use injection::{InjectionParameter, InjectionValue, ResolvedParameter};
pub use keyed::KeyedResolver;
pub use literal::LiteralResolver;
