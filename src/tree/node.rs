//! Tree node model.
//!
//! A menu tree has exactly one [`RootTree`], whose children are [`TreeChild`]
//! entries: either a [`MenuNode`] (an expandable sub-menu owning its own
//! children) or an [`ItemNode`] (a flat leaf). Menu and item nodes carry
//! [`SearchMetadata`] computed once from their label.
//!
//! `M` and `I` are opaque handles pointing back at whatever registry owns the
//! real menus and items. The tree only stores and clones them.

use serde::Serialize;

/// Deepest menu nesting a menu definition may declare.
pub const MAX_MENU_DEPTH: usize = 6;

/// Normalize label text for matching: trimmed and lower-cased.
pub fn normalize_search_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Raw label plus its normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchMetadata {
    /// Label exactly as displayed
    pub raw: String,
    /// `raw` trimmed and lower-cased
    pub text: String,
}

impl SearchMetadata {
    /// Create metadata from an optional label. A missing label is treated as empty.
    pub fn new(label: Option<&str>) -> Self {
        let raw = label.unwrap_or_default().to_string();
        let text = normalize_search_text(&raw);
        Self { raw, text }
    }
}

impl From<&str> for SearchMetadata {
    fn from(label: &str) -> Self {
        Self::new(Some(label))
    }
}

/// Discriminant of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Root,
    Menu,
    Item,
}

/// The single top-level container of a menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename = "Root")]
pub struct RootTree<M, I> {
    pub children: Vec<TreeChild<M, I>>,
}

impl<M, I> Default for RootTree<M, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, I> RootTree<M, I> {
    /// Create an empty root
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Create a root with the given children
    pub fn with_children(children: Vec<TreeChild<M, I>>) -> Self {
        Self { children }
    }

    /// Check if the root has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Deepest menu nesting below the root (0 for a root without menus).
    pub fn menu_depth(&self) -> usize {
        self.children
            .iter()
            .map(TreeChild::menu_depth)
            .max()
            .unwrap_or(0)
    }

    /// Find the first menu (depth-first) whose raw label equals `label`.
    pub fn find_menu(&self, label: &str) -> Option<&MenuNode<M, I>> {
        find_menu_in(&self.children, label)
    }
}

fn find_menu_in<'t, M, I>(children: &'t [TreeChild<M, I>], label: &str) -> Option<&'t MenuNode<M, I>> {
    children.iter().find_map(|child| match child {
        TreeChild::Menu(menu) if menu.search.raw == label => Some(menu),
        TreeChild::Menu(menu) => find_menu_in(&menu.children, label),
        TreeChild::Item(_) => None,
    })
}

/// A child of the root or of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TreeChild<M, I> {
    Menu(MenuNode<M, I>),
    Item(ItemNode<I>),
}

impl<M, I> TreeChild<M, I> {
    pub fn kind(&self) -> NodeKind {
        match self {
            TreeChild::Menu(_) => NodeKind::Menu,
            TreeChild::Item(_) => NodeKind::Item,
        }
    }

    pub fn search(&self) -> &SearchMetadata {
        match self {
            TreeChild::Menu(menu) => &menu.search,
            TreeChild::Item(item) => &item.search,
        }
    }

    /// Whether a filter marked this node as matching
    pub fn is_found(&self) -> bool {
        match self {
            TreeChild::Menu(menu) => menu.found,
            TreeChild::Item(item) => item.found,
        }
    }

    pub fn as_menu(&self) -> Option<&MenuNode<M, I>> {
        match self {
            TreeChild::Menu(menu) => Some(menu),
            TreeChild::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&ItemNode<I>> {
        match self {
            TreeChild::Item(item) => Some(item),
            TreeChild::Menu(_) => None,
        }
    }

    fn menu_depth(&self) -> usize {
        match self {
            TreeChild::Menu(menu) => {
                1 + menu
                    .children
                    .iter()
                    .map(TreeChild::menu_depth)
                    .max()
                    .unwrap_or(0)
            }
            TreeChild::Item(_) => 0,
        }
    }
}

/// An expandable sub-menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode<M, I> {
    /// Handle of the menu this node stands for
    pub menu: M,
    pub search: SearchMetadata,
    /// Ordered children, in definition order
    pub children: Vec<TreeChild<M, I>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub found: bool,
}

impl<M, I> MenuNode<M, I> {
    /// Create a menu node without children
    pub fn new(menu: M, search: SearchMetadata) -> Self {
        Self {
            menu,
            search,
            children: Vec::new(),
            found: false,
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: TreeChild<M, I>) {
        self.children.push(child);
    }
}

/// A flat, non-expandable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemNode<I> {
    /// Handle of the item this node stands for
    pub item: I,
    pub search: SearchMetadata,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub found: bool,
}

impl<I> ItemNode<I> {
    pub fn new(item: I, search: SearchMetadata) -> Self {
        Self {
            item,
            search,
            found: false,
        }
    }
}

/// Borrowed view of any node in a tree, root included.
#[derive(Debug)]
pub enum NodeRef<'t, M, I> {
    Root(&'t RootTree<M, I>),
    Menu(&'t MenuNode<M, I>),
    Item(&'t ItemNode<I>),
}

impl<M, I> Clone for NodeRef<'_, M, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, I> Copy for NodeRef<'_, M, I> {}

impl<'t, M, I> From<&'t TreeChild<M, I>> for NodeRef<'t, M, I> {
    fn from(child: &'t TreeChild<M, I>) -> Self {
        match child {
            TreeChild::Menu(menu) => NodeRef::Menu(menu),
            TreeChild::Item(item) => NodeRef::Item(item),
        }
    }
}

impl<'t, M, I> NodeRef<'t, M, I> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Root(_) => NodeKind::Root,
            NodeRef::Menu(_) => NodeKind::Menu,
            NodeRef::Item(_) => NodeKind::Item,
        }
    }

    /// Search metadata; the root has none
    pub fn search(&self) -> Option<&'t SearchMetadata> {
        match *self {
            NodeRef::Root(_) => None,
            NodeRef::Menu(menu) => Some(&menu.search),
            NodeRef::Item(item) => Some(&item.search),
        }
    }

    /// Raw label; the root has none
    pub fn label(&self) -> Option<&'t str> {
        self.search().map(|search| search.raw.as_str())
    }

    pub fn is_found(&self) -> bool {
        match self {
            NodeRef::Root(_) => false,
            NodeRef::Menu(menu) => menu.found,
            NodeRef::Item(item) => item.found,
        }
    }

    /// Children of the root or a menu; items have none
    pub fn children(&self) -> &'t [TreeChild<M, I>] {
        match *self {
            NodeRef::Root(root) => &root.children,
            NodeRef::Menu(menu) => &menu.children,
            NodeRef::Item(_) => &[],
        }
    }

    /// Identity comparison: both refs point at the same node object.
    pub fn ptr_eq(&self, other: &NodeRef<'_, M, I>) -> bool {
        match (self, other) {
            (NodeRef::Root(a), NodeRef::Root(b)) => std::ptr::eq(*a, *b),
            (NodeRef::Menu(a), NodeRef::Menu(b)) => std::ptr::eq(*a, *b),
            (NodeRef::Item(a), NodeRef::Item(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}
