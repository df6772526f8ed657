//! Plain-text views of a menu: one level, the whole tree, outcomes.

use std::fmt::Write as _;

use serde::Serialize;
use treemenu::{
    ConfigWarning, FlatNode, MenuIndex, MenuResult, NodeId, NodeResolve, Resolution,
    TreeMenuResolver,
};

use crate::ui::theme::Icons;

/// Label, or the compact JSON payload when there is none.
pub fn display_label<R>(node: &FlatNode<R>) -> String {
    match (node.label(), node.data()) {
        (Some(label), _) => label.to_string(),
        (None, Some(data)) => data.to_string(),
        (None, None) => "<unlabeled>".to_string(),
    }
}

/// `Settings › Audio`, or `Top level` at the root.
pub fn render_breadcrumbs<R>(resolver: &TreeMenuResolver<R>, icons: Icons) -> MenuResult<String> {
    let trail = resolver.breadcrumbs()?;
    if trail.is_empty() {
        return Ok("Top level".to_string());
    }
    let labels: Vec<String> = trail.iter().map(|node| display_label(*node)).collect();
    Ok(labels.join(&format!(" {} ", icons.separator)))
}

/// The level under the cursor, headed by its breadcrumbs.
pub fn render_level<R>(resolver: &TreeMenuResolver<R>, icons: Icons) -> MenuResult<String> {
    let mut out = render_breadcrumbs(resolver, icons)?;
    out.push('\n');

    let mut empty = true;
    for node in resolver.index().children_of(resolver.current_node_id()) {
        empty = false;
        let _ = writeln!(out, "  {}", entry_line(node, false, icons));
    }
    if empty {
        out.push_str("  (no items)\n");
    }
    Ok(out)
}

/// Every node of the index, indented under its parent.
pub fn render_tree<R>(index: &MenuIndex<R>, show_ids: bool, icons: Icons) -> String {
    let mut out = String::new();
    for node in index.children_of(None) {
        let _ = writeln!(out, "{}", entry_line(node, show_ids, icons));
        write_subtree(index, node.id(), "", show_ids, icons, &mut out);
    }
    out
}

fn write_subtree<R>(
    index: &MenuIndex<R>,
    parent: &NodeId,
    prefix: &str,
    show_ids: bool,
    icons: Icons,
    out: &mut String,
) {
    let children: Vec<&FlatNode<R>> = index.children_of(Some(parent)).collect();
    let count = children.len();

    for (i, node) in children.into_iter().enumerate() {
        let last = i + 1 == count;
        let guide = if last { icons.elbow } else { icons.tee };
        let _ = writeln!(out, "{}{}{}", prefix, guide, entry_line(node, show_ids, icons));

        let continuation = if last { "   " } else { icons.pipe };
        write_subtree(
            index,
            node.id(),
            &format!("{}{}", prefix, continuation),
            show_ids,
            icons,
            out,
        );
    }
}

fn entry_line<R>(node: &FlatNode<R>, show_ids: bool, icons: Icons) -> String {
    let mut line = format!("{} {}", icons.entry(node.has_children()), display_label(node));
    match node.resolve() {
        NodeResolve::None => {}
        NodeResolve::Static(token) => {
            let _ = write!(line, " {} {}", icons.arrow, token);
        }
        NodeResolve::Dispatch(_) => {
            let _ = write!(line, " {} (callback)", icons.arrow);
        }
    }
    if show_ids {
        let _ = write!(line, " [{}]", node.id());
    }
    line
}

/// One line describing what dispatching a node produced.
pub fn render_resolution<R: Serialize>(
    label: &str,
    resolution: &Resolution<R>,
    icons: Icons,
) -> String {
    match resolution {
        Resolution::None => format!("{} {} (no action)", icons.arrow, label),
        Resolution::Static(token) => format!("{} {}: {}", icons.arrow, label, token),
        Resolution::Custom(value) => {
            let rendered = serde_json::to_string(value).unwrap_or_else(|_| "?".to_string());
            format!("{} {}: {}", icons.arrow, label, rendered)
        }
    }
}

pub fn render_warning(warning: &ConfigWarning, icons: Icons) -> String {
    format!("{} {}", icons.warning, warning)
}
