//! Shared JSON event types for consistent CLI output.

use serde::Serialize;
use serde_json::Value;

use treemenu::{ConfigWarning, FlatNode, NodeId, Resolution};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Non-fatal menu file problem.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub key: &'a str,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, warning: &'a ConfigWarning) -> Self {
        Self {
            event: "warning",
            command,
            key: &warning.key,
            file: warning.file.display().to_string(),
            line: warning.line,
            suggestion: warning.suggestion.as_deref(),
            message: warning.to_string(),
        }
    }
}

/// One item of a level listing.
#[derive(Debug, Clone, Serialize)]
pub struct ItemRecord<'a> {
    pub id: &'a NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    pub has_children: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Value>,
}

impl<'a> ItemRecord<'a> {
    pub fn new<R>(node: &'a FlatNode<R>) -> Self {
        Self {
            id: node.id(),
            label: node.label(),
            has_children: node.has_children(),
            data: node.data(),
        }
    }
}

/// The level under the cursor.
#[derive(Debug, Clone, Serialize)]
pub struct LevelEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    /// Labels from the top level down to the cursor
    pub path: Vec<String>,
    pub items: Vec<ItemRecord<'a>>,
}

impl<'a> LevelEvent<'a> {
    pub fn new(command: &'a str, path: Vec<String>, items: Vec<ItemRecord<'a>>) -> Self {
        Self {
            event: "level",
            command,
            path,
            items,
        }
    }
}

/// Outcome of dispatching a chosen node's action.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub id: &'a NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    /// `none`, `static` or `custom`
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl<'a> ResolvedEvent<'a> {
    pub fn new<R: Serialize>(
        command: &'a str,
        id: &'a NodeId,
        label: Option<&'a str>,
        resolution: &Resolution<R>,
    ) -> Self {
        let (kind, value) = match resolution {
            Resolution::None => ("none", None),
            Resolution::Static(token) => ("static", Some(Value::String(token.clone()))),
            Resolution::Custom(value) => ("custom", serde_json::to_value(value).ok()),
        };
        Self {
            event: "resolved",
            command,
            id,
            label,
            kind,
            value,
        }
    }
}

/// One node of the flattened tree, in pre-order.
#[derive(Debug, Clone, Serialize)]
pub struct NodeEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub id: &'a NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<&'a NodeId>,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    pub has_children: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve: Option<&'a str>,
}

impl<'a> NodeEvent<'a> {
    pub fn new<R>(command: &'a str, node: &'a FlatNode<R>, depth: usize) -> Self {
        Self {
            event: "node",
            command,
            id: node.id(),
            parent_id: node.parent_id(),
            depth,
            label: node.label(),
            has_children: node.has_children(),
            resolve: node.resolve().as_static(),
        }
    }
}
