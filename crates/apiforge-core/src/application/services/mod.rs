//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: "generate a service" and "clean up a failed run".

pub mod cleanup;
pub mod generator;

pub use generator::GeneratorService;
