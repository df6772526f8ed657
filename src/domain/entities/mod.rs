//! Domain Entities
//!
//! - `MenuItem` - A node of the caller-supplied menu tree
//! - `FlatNode` - One flattened, uniquely identified menu node
//! - `NodeId` - Identifier minted during flattening

mod menu;
mod node;

pub use menu::{label, MenuAction, MenuCallback, MenuItem, MenuSpec};
pub use node::{FlatNode, MenuEntry, NodeId, NodeResolve, Thunk};
