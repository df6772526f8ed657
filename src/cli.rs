use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use treemenu::ResolverOptions;

/// Treemenu - browse and script multi-level menus
#[derive(Parser, Debug)]
#[command(name = "treemenu")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Menu files may be TOML, JSON or YAML (chosen by extension).")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use ASCII markers instead of Unicode glyphs
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a menu interactively (requires a terminal)
    Browse {
        /// Menu definition file
        file: PathBuf,

        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// Apply a scripted sequence of steps and print where it ends
    Navigate {
        /// Menu definition file
        file: PathBuf,

        /// Item labels (or ids) to choose in order; `..` goes back one level
        steps: Vec<String>,

        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// Print the whole flattened menu as a tree
    List {
        /// Menu definition file
        file: PathBuf,

        /// Show generated node ids
        #[arg(long)]
        show_ids: bool,

        #[command(flatten)]
        resolver: ResolverArgs,
    },

    /// Run the built-in Settings/Exit walkthrough
    Demo,
}

impl Commands {
    /// Name used in `--json` events.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Browse { .. } => "browse",
            Commands::Navigate { .. } => "navigate",
            Commands::List { .. } => "list",
            Commands::Demo => "demo",
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ResolverArgs {
    /// Payload key that receives each node's id
    #[arg(long, value_name = "KEY")]
    pub inject_id_key: Option<String>,

    /// Use deterministic ids (node-1, node-2, ...) instead of UUIDs
    #[arg(long)]
    pub sequential_ids: bool,
}

impl ResolverArgs {
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions {
            inject_id_key: self.inject_id_key.clone(),
        }
    }
}
