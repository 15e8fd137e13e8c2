//! Structural tree copy.

use super::node::{ItemNode, MenuNode, RootTree, TreeChild};

/// Deep-copy every node and child list of `tree`.
///
/// Menu and item handles are copied through their own `Clone`, so ids and
/// reference-counted handles keep pointing at the same menus. `found` markers
/// are copied as they are.
pub fn clone_tree<M: Clone, I: Clone>(tree: &RootTree<M, I>) -> RootTree<M, I> {
    RootTree::with_children(clone_children(&tree.children))
}

fn clone_children<M: Clone, I: Clone>(children: &[TreeChild<M, I>]) -> Vec<TreeChild<M, I>> {
    children
        .iter()
        .map(|child| match child {
            TreeChild::Menu(menu) => TreeChild::Menu(MenuNode {
                menu: menu.menu.clone(),
                search: menu.search.clone(),
                children: clone_children(&menu.children),
                found: menu.found,
            }),
            TreeChild::Item(item) => TreeChild::Item(ItemNode {
                item: item.item.clone(),
                search: item.search.clone(),
                found: item.found,
            }),
        })
        .collect()
}
