//! Domain Layer
//!
//! The core of treemenu - pure navigation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Menu definitions and flattened nodes
//! - `services/` - Flattener and navigator
//! - `value_objects/` - Options and warnings
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Injected identity** - Identifiers come from an `IdGenerator` port
//! 3. **Ports & Adapters** - Randomness and storage live in the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
