//! Configuration and menu-file type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::MenuItem;
use crate::domain::value_objects::{ConfigWarning, ResolverOptions};
use crate::error::MenuResult;

use super::loader;

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Use ASCII markers instead of Unicode glyphs
    #[serde(default)]
    pub ascii: bool,
}

/// User-level configuration (`~/.config/treemenu/config.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverOptions,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load(path: &Path) -> MenuResult<Self> {
        loader::load_config(path)
    }

    /// Load the user config if present, then apply `TREEMENU_*` overrides.
    pub fn load_or_default() -> Self {
        loader::load_or_default()
    }
}

/// One entry of a menu definition file.
///
/// An entry with `resolve` becomes an action node; without it, a parent.
/// `label` is merged into `data` when both are given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuEntryDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntryDef>,
}

impl MenuEntryDef {
    pub fn payload(&self) -> Option<Value> {
        if self.label.is_none() && self.data.is_none() {
            return None;
        }
        let mut map = self.data.clone().unwrap_or_default();
        if let Some(label) = &self.label {
            map.insert("label".to_string(), Value::String(label.clone()));
        }
        Some(Value::Object(map))
    }

    pub fn to_item<R>(&self) -> MenuItem<R> {
        let children: Vec<MenuItem<R>> = self.children.iter().map(MenuEntryDef::to_item).collect();
        match &self.resolve {
            Some(token) => MenuItem::simple(self.payload(), token.clone()).with_children(children),
            None => MenuItem::parent(self.payload(), children),
        }
    }
}

/// A menu definition file: resolver options plus the top-level entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuFile {
    #[serde(default)]
    pub resolver: ResolverOptions,

    #[serde(default)]
    pub menu: Vec<MenuEntryDef>,
}

impl MenuFile {
    /// Load a `.toml`, `.json`, `.yaml` or `.yml` menu file.
    pub fn load(path: &Path) -> MenuResult<Self> {
        Self::load_with_warnings(path).map(|(file, _)| file)
    }

    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_menu_file(path)
    }

    pub fn to_menu<R>(&self) -> Vec<MenuItem<R>> {
        self.menu.iter().map(MenuEntryDef::to_item).collect()
    }
}
