//! Flattened menu nodes.

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use super::menu::{MenuAction, MenuCallback};
use crate::domain::services::{ResolverApi, TreeMenuResolver};
use crate::error::{MenuError, MenuResult};

/// Identifier minted for every flattened node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Deferred dispatch of a custom action, bound to the node that owns it.
pub struct Thunk<R> {
    owner: NodeId,
    callback: MenuCallback<R>,
}

impl<R> Thunk<R> {
    /// The node this dispatch is bound to.
    pub fn owner(&self) -> &NodeId {
        &self.owner
    }

    /// Run the callback against `resolver`.
    ///
    /// The callback sees its owning node as `current_node`, whatever the
    /// cursor points at. Navigation it performs through the API mutates the
    /// same resolver synchronously.
    pub fn invoke(&self, resolver: &mut TreeMenuResolver<R>) -> MenuResult<R> {
        let current = resolver.index().get_shared(self.owner.as_str()).ok_or_else(|| {
            MenuError::InternalConsistency {
                id: self.owner.to_string(),
            }
        })?;
        tracing::trace!(node = %self.owner, "dispatching custom action");
        let mut api = ResolverApi::new(resolver, current);
        Ok((self.callback)(&mut api))
    }
}

impl<R> Clone for Thunk<R> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner.clone(),
            callback: Rc::clone(&self.callback),
        }
    }
}

/// Resolve value carried by a flattened node.
pub enum NodeResolve<R> {
    None,
    Static(String),
    Dispatch(Thunk<R>),
}

impl<R> NodeResolve<R> {
    /// Wrap a menu action for the node identified by `owner`.
    pub(crate) fn wrap(action: &MenuAction<R>, owner: &NodeId) -> Self {
        match action {
            MenuAction::None => NodeResolve::None,
            MenuAction::Simple(token) => NodeResolve::Static(token.clone()),
            MenuAction::Custom(callback) => NodeResolve::Dispatch(Thunk {
                owner: owner.clone(),
                callback: Rc::clone(callback),
            }),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, NodeResolve::None)
    }

    pub fn as_static(&self) -> Option<&str> {
        match self {
            NodeResolve::Static(token) => Some(token),
            _ => None,
        }
    }
}

impl<R> Clone for NodeResolve<R> {
    fn clone(&self) -> Self {
        match self {
            NodeResolve::None => NodeResolve::None,
            NodeResolve::Static(token) => NodeResolve::Static(token.clone()),
            NodeResolve::Dispatch(thunk) => NodeResolve::Dispatch(thunk.clone()),
        }
    }
}

impl<R> fmt::Debug for NodeResolve<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeResolve::None => f.write_str("None"),
            NodeResolve::Static(token) => f.debug_tuple("Static").field(token).finish(),
            NodeResolve::Dispatch(thunk) => f.debug_tuple("Dispatch").field(&thunk.owner).finish(),
        }
    }
}

/// One flattened, uniquely identified menu node.
pub struct FlatNode<R> {
    id: NodeId,
    data: Option<Value>,
    parent_id: Option<NodeId>,
    has_children: bool,
    resolve: NodeResolve<R>,
}

impl<R> FlatNode<R> {
    pub(crate) fn new(
        id: NodeId,
        data: Option<Value>,
        parent_id: Option<NodeId>,
        has_children: bool,
        resolve: NodeResolve<R>,
    ) -> Self {
        Self {
            id,
            data,
            parent_id,
            has_children,
            resolve,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Payload, after identity injection when configured.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// `None` for top-level items.
    pub fn parent_id(&self) -> Option<&NodeId> {
        self.parent_id.as_ref()
    }

    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub fn resolve(&self) -> &NodeResolve<R> {
        &self.resolve
    }

    /// The `"label"` field of an object payload, if any.
    pub fn label(&self) -> Option<&str> {
        self.data.as_ref()?.get("label")?.as_str()
    }
}

impl<R> fmt::Debug for FlatNode<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatNode")
            .field("id", &self.id)
            .field("data", &self.data)
            .field("parent_id", &self.parent_id)
            .field("has_children", &self.has_children)
            .field("resolve", &self.resolve)
            .finish()
    }
}

/// One record of a level listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuEntry<'a> {
    pub id: &'a NodeId,
    pub data: Option<&'a Value>,
}

impl<'a> MenuEntry<'a> {
    pub fn label(&self) -> Option<&'a str> {
        self.data?.get("label")?.as_str()
    }
}
