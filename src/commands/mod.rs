//! Subcommand implementations.

mod flatten;
mod search;
mod tree;

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::debug;

use menu_tree::config::{Config, OutputFormat};
use menu_tree::definition::{MenuBarDefinition, MenuRegistry};
use menu_tree::render::RenderOptions;

pub use flatten::cmd_flatten;
pub use search::cmd_search;
pub use tree::cmd_tree;

/// Settings shared by every subcommand, after CLI flags, env and config merge.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub render: RenderOptions,
}

impl Context {
    pub fn json(&self) -> bool {
        self.config.output.format == OutputFormat::Json
    }
}

/// Load, validate and register a menu definition file.
pub fn load_registry(file: &Path, config: &Config) -> Result<MenuRegistry> {
    let definition = MenuBarDefinition::load(file)
        .with_context(|| format!("failed to load menus from {}", file.display()))?;
    definition.validate(config.tree.max_depth)?;

    let registry = MenuRegistry::from_definition(&definition);
    debug!(
        menus = registry.menu_count(),
        items = registry.item_count(),
        "menu registry ready"
    );
    Ok(registry)
}

/// Print a value as pretty JSON on stdout.
pub fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
