//! Domain Services
//!
//! - `Flattener` - Turns a menu tree into an id → node index
//! - `TreeMenuResolver` - Cursor-based navigation over that index

mod flattener;
mod navigator;

pub use flattener::{inject_identity, Flattener, MenuIndex, WRAPPED_VALUE_KEY};
pub use navigator::{Resolution, ResolverApi, ResolverBuilder, Selection, TreeMenuResolver};
