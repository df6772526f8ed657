use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use treemenu::{Config, MenuIndex, NodeId};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, NodeEvent, StartEvent};
use crate::ui::render::render_tree;

use super::{load_resolver, report_warnings, LoadOptions};

const COMMAND: &str = "list";

pub fn cmd_list(
    file: &Path,
    show_ids: bool,
    options: &LoadOptions,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let (resolver, warnings) = load_resolver(file, options, config)?;
    report_warnings(COMMAND, &warnings, ui)?;

    if ui.json {
        for (node, depth) in resolver.index().iter().zip(depths(resolver.index())) {
            emit_event(&NodeEvent::new(COMMAND, node, depth))?;
        }
        emit_event(&CompleteEvent::success(COMMAND))?;
        return Ok(());
    }

    if resolver.is_empty() {
        println!("(empty menu)");
        return Ok(());
    }
    print!("{}", render_tree(resolver.index(), show_ids, ui.icons()));
    Ok(())
}

/// Depth of every node, in index order. Parents precede their children.
fn depths<R>(index: &MenuIndex<R>) -> Vec<usize> {
    let mut by_id: HashMap<&NodeId, usize> = HashMap::new();
    let mut out = Vec::with_capacity(index.len());

    for node in index.iter() {
        let depth = node
            .parent_id()
            .and_then(|parent| by_id.get(parent))
            .map_or(0, |d| d + 1);
        by_id.insert(node.id(), depth);
        out.push(depth);
    }
    out
}
