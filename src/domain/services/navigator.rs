//! Menu navigator
//!
//! Holds the flattened index plus one cursor and exposes level listing,
//! `choose`, `go_back` and action dispatch.
//!
//! ```text
//!   AtRoot ──choose(interior)──► AtNode(id) ──choose(interior)──► AtNode(child)
//!     ▲                              │
//!     └──────────go_back─────────────┘        choose(leaf): no transition
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use crate::domain::entities::{FlatNode, MenuEntry, MenuItem, NodeId, NodeResolve};
use crate::domain::ports::IdGenerator;
use crate::domain::value_objects::ResolverOptions;
use crate::error::{MenuError, MenuResult};
use crate::infrastructure::UuidIdGenerator;

use super::flattener::{Flattener, MenuIndex};

/// What `choose` hands back: the chosen node and its resolve value.
pub struct Selection<R> {
    pub id: NodeId,
    pub resolve: NodeResolve<R>,
}

impl<R> Clone for Selection<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            resolve: self.resolve.clone(),
        }
    }
}

impl<R> std::fmt::Debug for Selection<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("id", &self.id)
            .field("resolve", &self.resolve)
            .finish()
    }
}

/// Outcome of [`TreeMenuResolver::activate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<R> {
    /// The node carries no action
    None,
    /// Static action code to route on
    Static(String),
    /// Value returned by the node's callback
    Custom(R),
}

/// Navigation handle passed to custom action callbacks.
///
/// `choose` and `go_back` drive the same resolver that dispatched the
/// callback. `current_node` is always the node that owns the callback.
pub struct ResolverApi<'a, R> {
    resolver: &'a mut TreeMenuResolver<R>,
    current: Rc<FlatNode<R>>,
}

impl<'a, R> ResolverApi<'a, R> {
    pub(crate) fn new(resolver: &'a mut TreeMenuResolver<R>, current: Rc<FlatNode<R>>) -> Self {
        Self { resolver, current }
    }

    pub fn current_node(&self) -> &FlatNode<R> {
        &self.current
    }

    pub fn choose(&mut self, id: &str) -> MenuResult<Selection<R>> {
        self.resolver.choose(id)
    }

    pub fn go_back(&mut self) -> MenuResult<()> {
        self.resolver.go_back()
    }

    /// Read-only view of the resolver, e.g. to list the current level.
    pub fn resolver(&self) -> &TreeMenuResolver<R> {
        self.resolver
    }
}

/// Builder for [`TreeMenuResolver`].
///
/// `R` is the callback result type; it is inferred from the menu given to
/// [`build`](Self::build).
pub struct ResolverBuilder<R> {
    options: ResolverOptions,
    ids: Box<dyn IdGenerator>,
    _result: PhantomData<fn() -> R>,
}

impl<R> Default for ResolverBuilder<R> {
    fn default() -> Self {
        Self {
            options: ResolverOptions::default(),
            ids: Box::new(UuidIdGenerator),
            _result: PhantomData,
        }
    }
}

impl<R> ResolverBuilder<R> {
    pub fn options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn inject_id_key(mut self, key: impl Into<String>) -> Self {
        self.options.inject_id_key = Some(key.into());
        self
    }

    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Flatten `menu` and position the cursor at the top level.
    pub fn build(mut self, menu: &[MenuItem<R>]) -> MenuResult<TreeMenuResolver<R>> {
        let index = Flattener::new(&mut self.ids)
            .with_inject_id_key(self.options.inject_id_key.as_deref())
            .flatten(menu)?;
        Ok(TreeMenuResolver {
            index,
            cursor: None,
        })
    }
}

/// Stateful navigator over a flattened menu.
///
/// The index is built once at construction and never changes; the cursor
/// (`None` = top level) is the only mutable state.
pub struct TreeMenuResolver<R> {
    index: MenuIndex<R>,
    cursor: Option<NodeId>,
}

impl<R> TreeMenuResolver<R> {
    /// Flatten `menu` with random identifiers and no identity injection.
    pub fn new(menu: &[MenuItem<R>]) -> MenuResult<Self> {
        ResolverBuilder::default().build(menu)
    }

    pub fn builder() -> ResolverBuilder<R> {
        ResolverBuilder::default()
    }

    pub fn index(&self) -> &MenuIndex<R> {
        &self.index
    }

    pub fn node(&self, id: &str) -> Option<&FlatNode<R>> {
        self.index.get(id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// `None` when at the top level.
    pub fn current_node_id(&self) -> Option<&NodeId> {
        self.cursor.as_ref()
    }

    /// Items of the level under the cursor, in input order.
    pub fn displayable_menu(&self) -> Vec<MenuEntry<'_>> {
        self.index
            .children_of(self.cursor.as_ref())
            .map(|node| MenuEntry {
                id: node.id(),
                data: node.data(),
            })
            .collect()
    }

    /// Select a node by identifier.
    ///
    /// Any known identifier is accepted, not only those of the displayed
    /// level. The cursor moves only when the node has children.
    pub fn choose(&mut self, id: &str) -> MenuResult<Selection<R>> {
        let node = self
            .index
            .get(id)
            .ok_or_else(|| MenuError::NodeNotFound { id: id.to_string() })?;

        let selection = Selection {
            id: node.id().clone(),
            resolve: node.resolve().clone(),
        };

        if node.has_children() {
            tracing::debug!(from = ?self.cursor, to = %selection.id, "descending");
            self.cursor = Some(selection.id.clone());
        } else {
            tracing::debug!(node = %selection.id, "chose leaf");
        }

        Ok(selection)
    }

    /// Move the cursor up exactly one level.
    pub fn go_back(&mut self) -> MenuResult<()> {
        let current = self.cursor.as_ref().ok_or(MenuError::NoSelection)?;
        let node = self
            .index
            .get(current.as_str())
            .ok_or_else(|| MenuError::InternalConsistency {
                id: current.to_string(),
            })?;

        let parent = node.parent_id().cloned();
        tracing::debug!(from = %current, to = ?parent, "going back");
        self.cursor = parent;
        Ok(())
    }

    /// Run the resolve value of an earlier selection.
    pub fn dispatch(&mut self, selection: &Selection<R>) -> MenuResult<Resolution<R>> {
        match &selection.resolve {
            NodeResolve::None => Ok(Resolution::None),
            NodeResolve::Static(token) => Ok(Resolution::Static(token.clone())),
            NodeResolve::Dispatch(thunk) => thunk.invoke(self).map(Resolution::Custom),
        }
    }

    /// `choose(id)` followed by dispatching its resolve value.
    pub fn activate(&mut self, id: &str) -> MenuResult<Resolution<R>> {
        let selection = self.choose(id)?;
        self.dispatch(&selection)
    }

    /// Nodes from the top level down to the cursor.
    pub fn breadcrumbs(&self) -> MenuResult<Vec<&FlatNode<R>>> {
        let mut trail = Vec::new();
        let mut next = self.cursor.as_ref();

        while let Some(id) = next {
            // A parent chain longer than the index can only come from corruption.
            if trail.len() >= self.index.len() {
                return Err(MenuError::InternalConsistency { id: id.to_string() });
            }
            let node = self
                .index
                .get(id.as_str())
                .ok_or_else(|| MenuError::InternalConsistency { id: id.to_string() })?;
            trail.push(node);
            next = node.parent_id();
        }

        trail.reverse();
        Ok(trail)
    }
}

impl<R> std::fmt::Debug for TreeMenuResolver<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeMenuResolver")
            .field("nodes", &self.index.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
