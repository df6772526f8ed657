//! Treemenu - flattened, navigable multi-level menus
//!
//! A menu is declared as a tree of [`MenuItem`]s. [`TreeMenuResolver`]
//! flattens it once into an index of uniquely identified nodes and then
//! navigates level by level: list the current level, `choose` a node,
//! `go_back` one level, and dispatch the node's action.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, MenuEntryDef, MenuFile, ResolverOptions};
pub use domain::entities::{
    label, FlatNode, MenuAction, MenuCallback, MenuEntry, MenuItem, NodeId, NodeResolve,
};
pub use domain::ports::{IdGenerator, SequentialIds};
pub use domain::services::{
    inject_identity, Flattener, MenuIndex, Resolution, ResolverApi, ResolverBuilder, Selection,
    TreeMenuResolver,
};
pub use error::{MenuError, MenuResult};
pub use infrastructure::UuidIdGenerator;
