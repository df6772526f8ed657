//! Configuration module for treemenu
//!
//! Resolver options are layered, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (TREEMENU_*)
//! 3. The menu file's `[resolver]` table
//! 4. User config (~/.config/treemenu/config.toml)
//! 5. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::{ConfigWarning, ResolverOptions};

pub use loader::{
    effective_options, load_menu_file, with_env_overrides, ENV_ASCII, ENV_CONFIG_PATH,
    ENV_INJECT_ID_KEY,
};
pub use types::{Config, MenuEntryDef, MenuFile, UiConfig};
