use anyhow::{anyhow, Result};
use treemenu::{label, MenuError, MenuItem, NodeId, SequentialIds, TreeMenuResolver};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{
    CompleteEvent, ErrorEvent, ItemRecord, LevelEvent, ResolvedEvent, StartEvent,
};
use crate::ui::render::{display_label, render_level, render_resolution};

const COMMAND: &str = "demo";
const ID_KEY: &str = "id";

pub fn demo_menu() -> Vec<MenuItem<()>> {
    vec![
        MenuItem::parent(
            label("Settings"),
            vec![
                MenuItem::parent(label("Audio"), vec![]),
                MenuItem::parent(label("Graphics"), vec![]),
            ],
        ),
        MenuItem::simple(label("Exit"), "EXIT"),
    ]
}

pub fn cmd_demo(ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let mut resolver = TreeMenuResolver::builder()
        .inject_id_key(ID_KEY)
        .id_generator(SequentialIds::new(COMMAND))
        .build(&demo_menu())?;
    show_level(&resolver, "start", ui)?;

    let settings = id_for(&resolver, "Settings")?;
    resolver.choose(settings.as_str())?;
    show_level(&resolver, "choose Settings", ui)?;

    resolver.go_back()?;
    show_level(&resolver, "go back", ui)?;

    match resolver.go_back() {
        Err(err @ MenuError::NoSelection) => show_rejection(&err, ui)?,
        Err(err) => return Err(err.into()),
        Ok(()) => return Err(anyhow!("going back from the top level should fail")),
    }

    let exit = id_for(&resolver, "Exit")?;
    let resolution = resolver.activate(exit.as_str())?;
    if ui.json {
        emit_event(&ResolvedEvent::new(COMMAND, &exit, Some("Exit"), &resolution))?;
        emit_event(&CompleteEvent::success(COMMAND))?;
    } else {
        println!("{} choose Exit", ui.icons().branch);
        println!("{}", render_resolution("Exit", &resolution, ui.icons()));
    }
    Ok(())
}

/// The injected id of the item labelled `wanted` on the current level.
fn id_for(resolver: &TreeMenuResolver<()>, wanted: &str) -> Result<NodeId> {
    resolver
        .displayable_menu()
        .iter()
        .find(|entry| entry.label() == Some(wanted))
        .and_then(|entry| entry.data?.get(ID_KEY)?.as_str())
        .map(NodeId::from)
        .ok_or_else(|| anyhow!("no item '{}' at this level", wanted))
}

fn show_level(resolver: &TreeMenuResolver<()>, step: &str, ui: &UiContext) -> Result<()> {
    if ui.json {
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
        return Ok(());
    }

    println!("{} {}", ui.icons().branch, step);
    println!("{}", render_level(resolver, ui.icons())?);
    Ok(())
}

fn show_rejection(err: &MenuError, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&ErrorEvent::new(COMMAND, "NO_SELECTION", err.to_string()))?;
        return Ok(());
    }

    println!("{} go back", ui.icons().branch);
    println!("{} {} (expected at the top level)\n", ui.icons().error, err);
    Ok(())
}
