//! Policy registry and resolution driver for Dowel
//!
//! The mutable side of the pipeline: per-build-key policy sets, the
//! registry that owns them, and the driver that turns an installed policy
//! into a value.
//!
//! ## Data Flow
//!
//! ```text
//! caller requests a value for build key K
//!        │
//!        ▼
//! PolicyRegistry ── exact (type, name) ──┐ miss
//!        │                               ▼
//!        │                   (type, no-name) default
//!        ▼
//! PolicySet ── extract policy kind ──► ResolverPolicy / ConstructorPolicy
//!        │
//!        ▼
//! ResolutionDriver invokes the resolver with the build context
//!        │
//!        ▼
//! value flows back up (or a typed failure propagates)
//! ```
//!
//! None of these types lock internally - the contract is synchronous,
//! non-blocking computation over in-memory maps. [`SharedRegistry`] is the
//! wrapper for collaborators that share one registry across threads.

pub mod driver;
pub mod policy_set;
pub mod registry;
pub mod report;
pub mod shared;

pub use driver::ResolutionDriver;
pub use policy_set::PolicySet;
pub use registry::PolicyRegistry;
pub use report::{RegistryReport, ReportEntry};
pub use shared::SharedRegistry;
