//! Subcommand implementations.

pub mod browse;
pub mod demo;
pub mod list;
pub mod navigate;

use std::path::Path;

use anyhow::{Context, Result};
use treemenu::{
    config::effective_options, Config, ConfigWarning, MenuFile, ResolverOptions, SequentialIds,
    TreeMenuResolver,
};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::WarningEvent};
use crate::ui::render::render_warning;

/// How a command wants its resolver built.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Options given on the command line
    pub cli: ResolverOptions,
    pub sequential_ids: bool,
}

/// Read a menu file and flatten it with the effective resolver options.
pub fn load_resolver(
    file: &Path,
    options: &LoadOptions,
    config: &Config,
) -> Result<(TreeMenuResolver<()>, Vec<ConfigWarning>)> {
    let (menu_file, warnings) = MenuFile::load_with_warnings(file)
        .with_context(|| format!("failed to load menu from {}", file.display()))?;

    let effective = effective_options(options.cli.clone(), &menu_file.resolver, &config.resolver);
    tracing::debug!(inject_id_key = ?effective.inject_id_key, "resolver options");

    let mut builder = TreeMenuResolver::builder().options(effective);
    if options.sequential_ids {
        builder = builder.id_generator(SequentialIds::default());
    }
    let resolver = builder.build(&menu_file.to_menu::<()>())?;

    Ok((resolver, warnings))
}

pub fn report_warnings(command: &str, warnings: &[ConfigWarning], ui: &UiContext) -> Result<()> {
    for warning in warnings {
        if ui.json {
            emit_event(&WarningEvent::new(command, warning))?;
        } else {
            eprintln!("{}", render_warning(warning, ui.icons()));
        }
    }
    Ok(())
}
