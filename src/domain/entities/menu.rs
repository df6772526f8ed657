//! Menu definitions supplied by the caller.
//!
//! A `MenuItem` is a cheap, shared handle to one node of the input tree.
//! Handles can be reused under several parents; the flattener mints a fresh
//! identifier for every occurrence.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::domain::services::ResolverApi;

/// Callback run when a custom action is dispatched.
pub type MenuCallback<R> = Rc<dyn Fn(&mut ResolverApi<'_, R>) -> R>;

/// The resolve value attached to a menu node.
pub enum MenuAction<R> {
    /// Parent node: no action of its own
    None,
    /// Opaque action code the caller routes on
    Simple(String),
    /// Callback receiving a navigation handle bound to this node
    Custom(MenuCallback<R>),
}

impl<R> Clone for MenuAction<R> {
    fn clone(&self) -> Self {
        match self {
            MenuAction::None => MenuAction::None,
            MenuAction::Simple(token) => MenuAction::Simple(token.clone()),
            MenuAction::Custom(callback) => MenuAction::Custom(Rc::clone(callback)),
        }
    }
}

impl<R> fmt::Debug for MenuAction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::None => f.write_str("None"),
            MenuAction::Simple(token) => f.debug_tuple("Simple").field(token).finish(),
            MenuAction::Custom(_) => f.write_str("Custom(<callback>)"),
        }
    }
}

/// One node of the caller's menu tree.
pub struct MenuSpec<R> {
    data: Option<Value>,
    action: MenuAction<R>,
    children: RefCell<Vec<MenuItem<R>>>,
}

impl<R> Drop for MenuSpec<R> {
    fn drop(&mut self) {
        // Release uniquely owned descendants one at a time so deep menus drop
        // without recursing per level.
        let mut pending = std::mem::take(self.children.get_mut());
        while let Some(child) = pending.pop() {
            if let Ok(mut spec) = Rc::try_unwrap(child.0) {
                pending.append(spec.children.get_mut());
            }
        }
    }
}

/// Shared handle to a [`MenuSpec`].
pub struct MenuItem<R>(Rc<MenuSpec<R>>);

impl<R> Clone for MenuItem<R> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<R> MenuItem<R> {
    fn from_parts(data: Option<Value>, action: MenuAction<R>, children: Vec<MenuItem<R>>) -> Self {
        Self(Rc::new(MenuSpec {
            data,
            action,
            children: RefCell::new(children),
        }))
    }

    /// A node that only groups children.
    pub fn parent(data: Option<Value>, children: Vec<MenuItem<R>>) -> Self {
        Self::from_parts(data, MenuAction::None, children)
    }

    /// A node resolving to a static action code.
    pub fn simple(data: Option<Value>, token: impl Into<String>) -> Self {
        Self::from_parts(data, MenuAction::Simple(token.into()), Vec::new())
    }

    /// A node resolving through a callback.
    pub fn custom<F>(data: Option<Value>, callback: F) -> Self
    where
        F: Fn(&mut ResolverApi<'_, R>) -> R + 'static,
    {
        Self::from_parts(data, MenuAction::Custom(Rc::new(callback)), Vec::new())
    }

    /// Attach children to an action node (interior node with a default action).
    pub fn with_children(self, children: Vec<MenuItem<R>>) -> Self {
        self.0.children.borrow_mut().extend(children);
        self
    }

    /// Append a child after construction.
    pub fn push_child(&self, child: MenuItem<R>) {
        self.0.children.borrow_mut().push(child);
    }

    pub fn data(&self) -> Option<&Value> {
        self.0.data.as_ref()
    }

    pub fn action(&self) -> &MenuAction<R> {
        &self.0.action
    }

    pub fn children(&self) -> Ref<'_, Vec<MenuItem<R>>> {
        self.0.children.borrow()
    }

    pub fn has_children(&self) -> bool {
        !self.0.children.borrow().is_empty()
    }

    /// Structural identity: true when both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared node, usable as a set key for identity checks.
    pub(crate) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Short human-readable name used in error messages.
    pub fn describe(&self) -> String {
        match self.data() {
            Some(data) => match data.get("label").and_then(Value::as_str) {
                Some(label) => label.to_string(),
                None => data.to_string(),
            },
            None => "<unlabeled>".to_string(),
        }
    }
}

impl<R> fmt::Debug for MenuItem<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Children are summarized by count so a cyclic graph can still be printed.
        f.debug_struct("MenuItem")
            .field("data", &self.0.data)
            .field("action", &self.0.action)
            .field("children", &self.0.children.borrow().len())
            .finish()
    }
}

/// Payload of the `{label}` shape.
pub fn label(text: impl Into<String>) -> Option<Value> {
    let mut map = serde_json::Map::new();
    map.insert("label".to_string(), Value::String(text.into()));
    Some(Value::Object(map))
}
