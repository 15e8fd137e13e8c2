//! menu-tree CLI - inspect and search dropdown menu definitions
//!
//! Usage: menu-tree <COMMAND>
//!
//! Commands:
//!   tree     Print the menu tree
//!   search   Search menus and items by label
//!   flatten  Print every item with its breadcrumb

mod cli;
mod commands;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Context;
use menu_tree::config::{Config, OutputFormat};
use menu_tree::render::terminal::detect_capabilities;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let (mut config, warnings) = Config::load_or_default(cli.config.as_deref(), &cwd)?;
    for warning in &warnings {
        warn!("{warning}");
    }

    // CLI flags win over env and config files
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.ascii {
        config.output.unicode = false;
    }

    let render = detect_capabilities().render_options(config.output.unicode);
    let ctx = Context { config, render };
    debug!(command = cli.command.name(), ?ctx, "starting");

    match &cli.command {
        Commands::Tree { file } => commands::cmd_tree(file, &ctx),
        Commands::Search { file, query, regex } => commands::cmd_search(file, query, *regex, &ctx),
        Commands::Flatten { file } => commands::cmd_flatten(file, &ctx),
    }
}

/// Log to stderr. `MENU_TREE_LOG` or `RUST_LOG` take precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("MENU_TREE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
