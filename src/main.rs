//! Treemenu CLI - browse and script multi-level menus
//!
//! Usage: treemenu [--json] [-v...] [--ascii] <COMMAND>
//!
//! Commands:
//!   browse    Walk a menu interactively
//!   navigate  Apply scripted steps and print the resulting level
//!   list      Print the whole flattened menu
//!   demo      Run the built-in Settings/Exit walkthrough

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ResolverArgs};
use commands::LoadOptions;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = treemenu::Config::load_or_default();
    let ui = UiContext::new(cli.json, cli.ascii, &config);
    let command = cli.command.name();

    if let Err(err) = run(cli.command, &config, &ui) {
        ui::error::print_error(&err, command, ui.json, ui.icons());
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &treemenu::Config, ui: &UiContext) -> Result<()> {
    match command {
        Commands::Browse { file, resolver } => {
            commands::browse::cmd_browse(&file, &load_options(&resolver), config, ui)
        }
        Commands::Navigate {
            file,
            steps,
            resolver,
        } => commands::navigate::cmd_navigate(&file, &steps, &load_options(&resolver), config, ui),
        Commands::List {
            file,
            show_ids,
            resolver,
        } => commands::list::cmd_list(&file, show_ids, &load_options(&resolver), config, ui),
        Commands::Demo => commands::demo::cmd_demo(ui),
    }
}

fn load_options(args: &ResolverArgs) -> LoadOptions {
    LoadOptions {
        cli: args.options(),
        sequential_ids: args.sequential_ids,
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
