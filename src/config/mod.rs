//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MENU_TREE_*)
//! 3. Explicit `--config` file, else project config (./menu-tree.toml)
//! 4. User config (~/.config/menu-tree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, OutputFormat, SearchConfig, TreeConfig};
