//! Menu tree engine: node model, builder, walkers and the algorithms built on
//! top of them.

pub mod builder;
pub mod clone;
pub mod filter;
pub mod flatten;
pub mod group;
pub mod node;
pub mod walk;

pub use builder::{build_tree, MenuContent, MenuSource};
pub use clone::clone_tree;
pub use filter::{filter_by_pattern, filter_tree, SearchResult};
pub use flatten::{count_items, flatten_tree, FlatItem};
pub use group::{group_by_first_found_parent, FoundGroup};
pub use node::{
    normalize_search_text, ItemNode, MenuNode, NodeKind, NodeRef, RootTree, SearchMetadata,
    TreeChild, MAX_MENU_DEPTH,
};
pub use walk::{
    walk, walk_mut, Ancestor, Entry, EntryMut, Flow, Hooks, IntoFlow, ItemEntry, MenuEntry, RootEntry,
    Visitor, VisitorMut, Walkers,
};
