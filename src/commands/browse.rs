use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::Select;
use treemenu::{Config, NodeId, TreeMenuResolver};

use crate::ui::context::UiContext;
use crate::ui::render::{display_label, render_breadcrumbs, render_resolution};
use crate::ui::theme::{prompt_theme, Icons};

use super::{load_resolver, report_warnings, LoadOptions};

const COMMAND: &str = "browse";

/// What the user picked from one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pick {
    Item(NodeId),
    Back,
    Quit,
}

struct Prompt {
    items: Vec<String>,
    picks: Vec<Pick>,
}

pub fn cmd_browse(
    file: &Path,
    options: &LoadOptions,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    if !ui.interactive() {
        bail!("browse needs an interactive terminal; use `treemenu navigate` to script steps");
    }

    let (mut resolver, warnings) = load_resolver(file, options, config)?;
    report_warnings(COMMAND, &warnings, ui)?;

    let icons = ui.icons();
    let theme = prompt_theme(ui.unicode);

    loop {
        let prompt = build_prompt(&resolver, icons);
        let title = render_breadcrumbs(&resolver, icons)?;

        let index = Select::with_theme(theme.as_ref())
            .with_prompt(title)
            .items(&prompt.items)
            .default(0)
            .interact()?;

        match &prompt.picks[index] {
            Pick::Quit => return Ok(()),
            Pick::Back => resolver.go_back()?,
            Pick::Item(id) => {
                let (label, leaf) = match resolver.node(id.as_str()) {
                    Some(node) => (display_label(node), !node.has_children()),
                    None => (id.to_string(), true),
                };
                let resolution = resolver.activate(id.as_str())?;
                if leaf {
                    println!("{}", render_resolution(&label, &resolution, icons));
                    return Ok(());
                }
            }
        }
    }
}

/// Items of the current level, then Back (below the top level) and Quit.
fn build_prompt(resolver: &TreeMenuResolver<()>, icons: Icons) -> Prompt {
    let mut items = Vec::new();
    let mut picks = Vec::new();

    for node in resolver.index().children_of(resolver.current_node_id()) {
        items.push(format!(
            "{} {}",
            icons.entry(node.has_children()),
            display_label(node)
        ));
        picks.push(Pick::Item(node.id().clone()));
    }

    if resolver.current_node_id().is_some() {
        items.push(format!("{} Back", icons.back));
        picks.push(Pick::Back);
    }
    items.push(format!("{} Quit", icons.quit));
    picks.push(Pick::Quit);

    Prompt { items, picks }
}
