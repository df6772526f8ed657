//! Terminal and NDJSON output for the `treemenu` binary.

pub mod context;
pub mod error;
pub mod json;
pub mod render;
pub mod terminal;
pub mod theme;
