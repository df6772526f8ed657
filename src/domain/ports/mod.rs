//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod id_generator;

pub use id_generator::{IdGenerator, SequentialIds};
