//! Menu flattener
//!
//! Walks the caller's menu tree once, depth-first pre-order, and produces the
//! id → node index the navigator works against.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::domain::entities::{FlatNode, MenuItem, NodeId, NodeResolve};
use crate::domain::ports::IdGenerator;
use crate::error::{MenuError, MenuResult};

/// Field used when a non-object payload has to be wrapped for identity injection.
pub const WRAPPED_VALUE_KEY: &str = "value";

/// Flattened menu: every node keyed by its generated identifier.
///
/// Append-only while flattening, read-only afterwards. Iteration follows
/// insertion order, which is the pre-order of the input tree.
pub struct MenuIndex<R> {
    nodes: Vec<Rc<FlatNode<R>>>,
    positions: HashMap<NodeId, usize>,
}

impl<R> MenuIndex<R> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn insert(&mut self, node: FlatNode<R>) -> MenuResult<()> {
        if self.positions.contains_key(node.id().as_str()) {
            return Err(MenuError::InternalConsistency {
                id: node.id().to_string(),
            });
        }
        self.positions.insert(node.id().clone(), self.nodes.len());
        self.nodes.push(Rc::new(node));
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&FlatNode<R>> {
        self.positions.get(id).map(|&pos| self.nodes[pos].as_ref())
    }

    pub(crate) fn get_shared(&self, id: &str) -> Option<Rc<FlatNode<R>>> {
        self.positions.get(id).map(|&pos| Rc::clone(&self.nodes[pos]))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FlatNode<R>> {
        self.nodes.iter().map(|node| node.as_ref())
    }

    /// Nodes whose parent is `parent` (`None` = top level), in insertion order.
    pub fn children_of<'a>(
        &'a self,
        parent: Option<&'a NodeId>,
    ) -> impl Iterator<Item = &'a FlatNode<R>> + 'a {
        self.iter().filter(move |node| node.parent_id() == parent)
    }
}

impl<R> std::fmt::Debug for MenuIndex<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}

/// Single-pass flattener over a menu tree.
///
/// The walk keeps its own stack of open parents instead of recursing, so
/// nesting depth is bounded by memory rather than the thread's stack.
pub struct Flattener<'a> {
    ids: &'a mut dyn IdGenerator,
    inject_id_key: Option<&'a str>,
}

/// A parent on the current descent path and the next child to visit.
struct Frame<R> {
    item: MenuItem<R>,
    id: NodeId,
    next_child: usize,
}

impl<'a> Flattener<'a> {
    pub fn new(ids: &'a mut dyn IdGenerator) -> Self {
        Self {
            ids,
            inject_id_key: None,
        }
    }

    /// Merge each node's identifier into its payload under `key`.
    pub fn with_inject_id_key(mut self, key: Option<&'a str>) -> Self {
        self.inject_id_key = key;
        self
    }

    pub fn flatten<R>(mut self, roots: &[MenuItem<R>]) -> MenuResult<MenuIndex<R>> {
        let mut index = MenuIndex::new();
        let mut path: Vec<Frame<R>> = Vec::new();
        let mut on_path: HashSet<*const ()> = HashSet::new();

        for root in roots {
            self.enter(root, None, &mut path, &mut on_path, &mut index)?;

            while let Some(frame) = path.last_mut() {
                let next = frame.item.children().get(frame.next_child).cloned();
                match next {
                    Some(child) => {
                        frame.next_child += 1;
                        let parent = frame.id.clone();
                        self.enter(&child, Some(parent), &mut path, &mut on_path, &mut index)?;
                    }
                    None => {
                        if let Some(done) = path.pop() {
                            on_path.remove(&done.item.as_ptr());
                        }
                    }
                }
            }
        }

        tracing::debug!(nodes = index.len(), "flattened menu");
        Ok(index)
    }

    /// Record `item` and, if it has children, open it on the path.
    fn enter<R>(
        &mut self,
        item: &MenuItem<R>,
        parent: Option<NodeId>,
        path: &mut Vec<Frame<R>>,
        on_path: &mut HashSet<*const ()>,
        index: &mut MenuIndex<R>,
    ) -> MenuResult<()> {
        // Revisiting a node on the current descent path means the graph has a cycle.
        if on_path.contains(&item.as_ptr()) {
            let start = path
                .iter()
                .position(|frame| frame.item.ptr_eq(item))
                .unwrap_or(0);
            let mut cycle: Vec<String> = path[start..]
                .iter()
                .map(|frame| frame.item.describe())
                .collect();
            cycle.push(item.describe());
            return Err(MenuError::CircularReference { cycle });
        }

        let id = self.ids.next_id();
        let data = match self.inject_id_key {
            Some(key) => Some(inject_identity(item.data(), key, &id)),
            None => item.data().cloned(),
        };
        let has_children = item.has_children();
        let resolve = NodeResolve::wrap(item.action(), &id);

        index.insert(FlatNode::new(id.clone(), data, parent, has_children, resolve))?;

        if has_children {
            on_path.insert(item.as_ptr());
            path.push(Frame {
                item: item.clone(),
                id,
                next_child: 0,
            });
        }

        Ok(())
    }
}

/// Shallow copy of `data` with `key` set to `id`.
///
/// Absent (or null) payloads become `{key: id}`; non-object payloads are kept
/// under [`WRAPPED_VALUE_KEY`].
pub fn inject_identity(data: Option<&Value>, key: &str, id: &NodeId) -> Value {
    let mut map = match data {
        Some(Value::Object(map)) => map.clone(),
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            let mut map = Map::new();
            map.insert(WRAPPED_VALUE_KEY.to_string(), other.clone());
            map
        }
    };
    map.insert(key.to_string(), Value::String(id.to_string()));
    Value::Object(map)
}
