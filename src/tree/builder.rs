//! Tree construction from a flat list of menus.
//!
//! The menus themselves live elsewhere (a [`MenuRegistry`](crate::MenuRegistry)
//! or any other [`MenuSource`]); the builder only asks each menu handle for its
//! label, its parent and its ordered content, then links the nodes together.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use super::node::{ItemNode, MenuNode, RootTree, SearchMetadata, TreeChild};

/// One content entry of a menu, as reported by a [`MenuSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuContent<M, I> {
    /// A flat item
    Item(I),
    /// A nested menu
    Menu(M),
    /// Anything else (separators, custom views). Skipped by the builder.
    Other,
}

/// Read access to the menus a tree is built from.
pub trait MenuSource {
    /// Menu handle. Identity is `Eq + Hash`.
    type MenuRef: Clone + Eq + Hash;
    /// Item handle
    type ItemRef: Clone;

    /// Label of the menu's button
    fn menu_label(&self, menu: &Self::MenuRef) -> Option<&str>;

    /// Parent menu, or `None` for a top-level menu
    fn parent_menu(&self, menu: &Self::MenuRef) -> Option<Self::MenuRef>;

    /// Ordered content of the menu's list
    fn menu_content(&self, menu: &Self::MenuRef) -> Vec<MenuContent<Self::MenuRef, Self::ItemRef>>;

    /// Label of an item
    fn item_label(&self, item: &Self::ItemRef) -> Option<&str>;
}

/// A menu node waiting to be attached, plus its unresolved content.
struct PendingMenu<M, I> {
    node: MenuNode<M, I>,
    slots: Vec<Slot<M, I>>,
}

enum Slot<M, I> {
    Item(ItemNode<I>),
    Menu(M),
}

/// Build a tree from a flat list of menus.
///
/// Every listed menu whose parent is `None` becomes a root child, in input
/// order. Nested menus are attached where their parent lists them. A menu is
/// attached at most once: root menus are claimed first, then the first parent
/// listing a menu wins. Menus that cannot be reached from a root menu are
/// dropped, as are content entries that are neither items nor listed menus.
pub fn build_tree<S: MenuSource>(
    source: &S,
    menus: &[S::MenuRef],
) -> RootTree<S::MenuRef, S::ItemRef> {
    let mut pending: HashMap<S::MenuRef, PendingMenu<S::MenuRef, S::ItemRef>> =
        HashMap::with_capacity(menus.len());
    let mut order: Vec<&S::MenuRef> = Vec::with_capacity(menus.len());

    // Create a detached node for every menu
    for menu in menus {
        if pending.contains_key(menu) {
            continue;
        }
        let search = SearchMetadata::new(source.menu_label(menu));
        pending.insert(
            menu.clone(),
            PendingMenu {
                node: MenuNode::new(menu.clone(), search),
                slots: Vec::new(),
            },
        );
        order.push(menu);
    }

    // Resolve each menu's content into items and menu links
    let mut skipped = 0usize;
    for menu in &order {
        let mut slots = Vec::new();
        for entry in source.menu_content(menu) {
            match entry {
                MenuContent::Item(item) => {
                    let search = SearchMetadata::new(source.item_label(&item));
                    slots.push(Slot::Item(ItemNode::new(item, search)));
                }
                MenuContent::Menu(child) if pending.contains_key(&child) => {
                    slots.push(Slot::Menu(child));
                }
                MenuContent::Menu(_) | MenuContent::Other => skipped += 1,
            }
        }
        if let Some(entry) = pending.get_mut(*menu) {
            entry.slots = slots;
        }
    }

    // Claim the top-level menus before anything links them as children
    let top_level: Vec<PendingMenu<_, _>> = order
        .iter()
        .filter(|menu| source.parent_menu(menu).is_none())
        .filter_map(|menu| pending.remove(*menu))
        .collect();

    let children: Vec<TreeChild<_, _>> = top_level
        .into_iter()
        .map(|menu| TreeChild::Menu(attach(menu, &mut pending)))
        .collect();

    if !pending.is_empty() {
        trace!(
            unreachable = pending.len(),
            "menus not reachable from a top-level menu"
        );
    }
    debug!(
        menus = order.len(),
        top_level = children.len(),
        skipped,
        "built menu tree"
    );

    RootTree::with_children(children)
}

fn attach<M: Eq + Hash, I>(
    menu: PendingMenu<M, I>,
    pending: &mut HashMap<M, PendingMenu<M, I>>,
) -> MenuNode<M, I> {
    let PendingMenu { mut node, slots } = menu;

    for slot in slots {
        match slot {
            Slot::Item(item) => node.add_child(TreeChild::Item(item)),
            Slot::Menu(key) => {
                // Already claimed elsewhere (or a cycle back to an ancestor)
                if let Some(child) = pending.remove(&key) {
                    node.add_child(TreeChild::Menu(attach(child, pending)));
                }
            }
        }
    }

    node
}
