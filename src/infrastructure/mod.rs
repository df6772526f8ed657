//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `ids` - Random identifier generation (UUID v4)

pub mod ids;

pub use ids::UuidIdGenerator;
