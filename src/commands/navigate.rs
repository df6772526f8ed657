use std::path::Path;

use anyhow::{anyhow, Context, Result};
use treemenu::{Config, NodeId, Resolution, TreeMenuResolver};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ItemRecord, LevelEvent, ResolvedEvent, StartEvent};
use crate::ui::render::{display_label, render_level, render_resolution};

use super::{load_resolver, report_warnings, LoadOptions};

const COMMAND: &str = "navigate";

/// Step that moves the cursor up one level.
pub const BACK_STEP: &str = "..";

/// The last node a step chose, with what dispatching it produced.
#[derive(Debug)]
pub struct Outcome {
    pub id: NodeId,
    pub label: String,
    pub resolution: Resolution<()>,
}

pub fn cmd_navigate(
    file: &Path,
    steps: &[String],
    options: &LoadOptions,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let (mut resolver, warnings) = load_resolver(file, options, config)?;
    report_warnings(COMMAND, &warnings, ui)?;

    let outcome = run_steps(&mut resolver, steps)?;

    if ui.json {
        if let Some(outcome) = &outcome {
            emit_event(&ResolvedEvent::new(
                COMMAND,
                &outcome.id,
                Some(outcome.label.as_str()),
                &outcome.resolution,
            ))?;
        }
        let path = resolver
            .breadcrumbs()?
            .into_iter()
            .map(display_label)
            .collect();
        let items = resolver
            .index()
            .children_of(resolver.current_node_id())
            .map(ItemRecord::new)
            .collect();
        emit_event(&LevelEvent::new(COMMAND, path, items))?;
        emit_event(&CompleteEvent::success(COMMAND))?;
        return Ok(());
    }

    let icons = ui.icons();
    if let Some(outcome) = &outcome {
        println!(
            "{}",
            render_resolution(&outcome.label, &outcome.resolution, icons)
        );
    }
    print!("{}", render_level(&resolver, icons)?);
    Ok(())
}

/// Apply `steps` in order and return the last action that resolved to
/// something.
///
/// A step names an item of the current level by label (exact match first,
/// then case-insensitive) or by id; `..` goes back one level.
pub fn run_steps(
    resolver: &mut TreeMenuResolver<()>,
    steps: &[String],
) -> Result<Option<Outcome>> {
    let mut last = None;

    for (i, step) in steps.iter().enumerate() {
        let n = i + 1;

        if step == BACK_STEP {
            resolver
                .go_back()
                .with_context(|| format!("step {} ('{}')", n, step))?;
            continue;
        }

        let id = find_item(resolver, step).ok_or_else(|| {
            anyhow!(
                "step {}: no item '{}' at this level (choices: {})",
                n,
                step,
                level_labels(resolver).join(", ")
            )
        })?;

        let label = resolver
            .node(id.as_str())
            .map(display_label)
            .unwrap_or_else(|| id.to_string());
        let resolution = resolver
            .activate(id.as_str())
            .with_context(|| format!("step {} ('{}')", n, step))?;
        tracing::info!(step = n, id = %id, "chose item");

        if resolution != Resolution::None {
            last = Some(Outcome {
                id,
                label,
                resolution,
            });
        }
    }

    Ok(last)
}

fn level_labels(resolver: &TreeMenuResolver<()>) -> Vec<String> {
    resolver
        .index()
        .children_of(resolver.current_node_id())
        .map(display_label)
        .collect()
}

fn find_item(resolver: &TreeMenuResolver<()>, step: &str) -> Option<NodeId> {
    let level: Vec<_> = resolver
        .index()
        .children_of(resolver.current_node_id())
        .collect();

    level
        .iter()
        .find(|node| node.label() == Some(step))
        .or_else(|| {
            level.iter().find(|node| {
                node.label()
                    .is_some_and(|label| label.eq_ignore_ascii_case(step))
            })
        })
        .or_else(|| level.iter().find(|node| node.id().as_str() == step))
        .map(|node| node.id().clone())
}
