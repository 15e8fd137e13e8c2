//! menu-tree - tree engine for dropdown menus
//!
//! Builds a navigable tree from a flat list of menus, walks it with
//! enter/leave hooks, filters it by label and groups the matches under the
//! menu they were found in.
//!
//! ```
//! use menu_tree::definition::{MenuBarDefinition, DefinitionFormat, MenuRegistry};
//! use menu_tree::search::{search, MatchMode, SearchQuery};
//!
//! let def = MenuBarDefinition::parse(
//!     r#"
//!     [[menus]]
//!     label = "Menu 1"
//!     [[menus.groups]]
//!     items = [{ label = "Foo" }, { label = "Bar" }]
//!     "#,
//!     DefinitionFormat::Toml,
//! )?;
//! let tree = MenuRegistry::from_definition(&def).build_tree();
//!
//! let query = SearchQuery::parse("foo", MatchMode::Substring)?;
//! let result = search(&tree, &query);
//! assert_eq!(result.results_count, 1);
//! assert_eq!(result.total_items_count, 2);
//! # Ok::<(), menu_tree::MenuTreeError>(())
//! ```

pub mod config;
pub mod definition;
pub mod error;
pub mod render;
pub mod search;
pub mod tree;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use definition::{DefinitionFormat, ItemId, MenuBarDefinition, MenuId, MenuRegistry};
pub use error::{MenuTreeError, MenuTreeResult};
pub use search::{search, FoundEntry, MatchMode, SearchQuery, SearchView};
pub use tree::{
    build_tree, clone_tree, count_items, filter_by_pattern, filter_tree, flatten_tree,
    group_by_first_found_parent, walk, walk_mut, FlatItem, FoundGroup, ItemNode, MenuNode,
    NodeKind, NodeRef, RootTree, SearchMetadata, SearchResult, TreeChild,
};
