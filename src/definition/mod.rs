//! Menu definitions.
//!
//! A menu bar is described declaratively: a list of menus, each with a label
//! and groups of entries. An entry with `groups` is a nested menu, any other
//! entry is a flat button. Definitions are read from TOML, JSON or YAML and
//! registered into a [`MenuRegistry`] to build a tree.
//!
//! ```toml
//! [[menus]]
//! label = "File"
//!
//! [[menus.groups]]
//! items = [
//!     { label = "Open" },
//!     { label = "Export", groups = [{ items = [{ label = "PDF" }] }] },
//! ]
//! ```

mod registry;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MenuTreeError, MenuTreeResult};

pub use registry::{
    ContentEntry, ItemId, MenuId, MenuRegistry, RegisteredItem, RegisteredMenu,
};

/// File format of a definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefinitionFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Pick the format from the file extension, falling back to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => DefinitionFormat::Json,
            Some("yaml") | Some("yml") => DefinitionFormat::Yaml,
            _ => DefinitionFormat::Toml,
        }
    }
}

impl fmt::Display for DefinitionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DefinitionFormat::Toml => "TOML",
            DefinitionFormat::Json => "JSON",
            DefinitionFormat::Yaml => "YAML",
        };
        f.write_str(name)
    }
}

/// Document root: the top-level menus, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuBarDefinition {
    #[serde(default)]
    pub menus: Vec<MenuDefinition>,
}

/// A menu with a label and its groups of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    #[serde(default)]
    pub label: String,
    pub groups: Vec<MenuGroupDefinition>,
}

/// A group of entries. Groups are separated from each other when displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroupDefinition {
    #[serde(default)]
    pub items: Vec<MenuItemDefinition>,
}

/// One entry of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuItemDefinition {
    /// Nested menu (has `groups`)
    Menu(MenuDefinition),
    /// Flat button
    Button { label: String },
}

impl MenuDefinition {
    pub fn new(label: impl Into<String>, groups: Vec<MenuGroupDefinition>) -> Self {
        Self {
            label: label.into(),
            groups,
        }
    }

    /// Nesting depth of this menu: 1 without nested menus.
    pub fn depth(&self) -> usize {
        1 + self
            .nested_menus()
            .map(MenuDefinition::depth)
            .max()
            .unwrap_or(0)
    }

    /// Nested menus, across all groups
    pub fn nested_menus(&self) -> impl Iterator<Item = &MenuDefinition> {
        self.groups
            .iter()
            .flat_map(|group| group.items.iter())
            .filter_map(|item| match item {
                MenuItemDefinition::Menu(menu) => Some(menu),
                MenuItemDefinition::Button { .. } => None,
            })
    }
}

impl MenuGroupDefinition {
    pub fn new(items: Vec<MenuItemDefinition>) -> Self {
        Self { items }
    }
}

impl MenuItemDefinition {
    pub fn button(label: impl Into<String>) -> Self {
        MenuItemDefinition::Button {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuItemDefinition::Menu(menu) => &menu.label,
            MenuItemDefinition::Button { label } => label,
        }
    }
}

impl MenuBarDefinition {
    pub fn new(menus: Vec<MenuDefinition>) -> Self {
        Self { menus }
    }

    /// Parse a definition document.
    pub fn parse(text: &str, format: DefinitionFormat) -> MenuTreeResult<Self> {
        let parsed = match format {
            DefinitionFormat::Toml => toml::from_str(text).map_err(|e| e.message().to_string()),
            DefinitionFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            DefinitionFormat::Yaml => serde_yaml_ng::from_str(text).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| MenuTreeError::Parse { format, message })
    }

    /// Load a definition file, picking the format from its extension.
    pub fn load(path: &Path) -> MenuTreeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let format = DefinitionFormat::from_path(path);

        let definition = Self::parse(&content, format).map_err(|err| match err {
            MenuTreeError::Parse { message, .. } => MenuTreeError::InvalidDefinition {
                file: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        debug!(
            file = %path.display(),
            %format,
            menus = definition.menus.len(),
            "loaded menu definition"
        );
        Ok(definition)
    }

    /// Deepest menu nesting in the document (0 without menus).
    pub fn depth(&self) -> usize {
        self.menus
            .iter()
            .map(MenuDefinition::depth)
            .max()
            .unwrap_or(0)
    }

    /// Reject menus nested deeper than `max_depth`.
    ///
    /// Top-level menus are at depth 1. The error names the first offending
    /// menu in document order.
    pub fn validate(&self, max_depth: usize) -> MenuTreeResult<()> {
        fn check(menu: &MenuDefinition, depth: usize, max: usize) -> MenuTreeResult<()> {
            if depth > max {
                return Err(MenuTreeError::DepthExceeded {
                    label: menu.label.clone(),
                    depth,
                    max,
                });
            }
            menu.nested_menus()
                .try_for_each(|nested| check(nested, depth + 1, max))
        }

        self.menus
            .iter()
            .try_for_each(|menu| check(menu, 1, max_depth))
    }
}
