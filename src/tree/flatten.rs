//! Flat views over a tree.

use super::node::{ItemNode, NodeRef, RootTree};
use super::walk::{walk, Flow, ItemEntry, Visitor, Walkers};

/// An item together with the chain of nodes leading to it.
#[derive(Debug)]
pub struct FlatItem<'t, M, I> {
    /// Ancestors from the root down to the immediate parent. Never empty.
    pub parents: Vec<NodeRef<'t, M, I>>,
    /// Immediate parent (the last entry of `parents`)
    pub parent: NodeRef<'t, M, I>,
    pub node: &'t ItemNode<I>,
}

impl<M, I> Clone for FlatItem<'_, M, I> {
    fn clone(&self) -> Self {
        Self {
            parents: self.parents.clone(),
            parent: self.parent,
            node: self.node,
        }
    }
}

impl<'t, M, I> FlatItem<'t, M, I> {
    /// Raw labels of the menus leading to the item, outermost first.
    pub fn breadcrumb(&self) -> Vec<&'t str> {
        self.parents.iter().filter_map(NodeRef::label).collect()
    }
}

struct FlattenVisitor<'t, M, I> {
    items: Vec<FlatItem<'t, M, I>>,
}

impl<'t, M, I> Visitor<'t, M, I> for FlattenVisitor<'t, M, I> {
    fn enter_item(&mut self, entry: &ItemEntry<'_, 't, M, I>) -> Flow {
        self.items.push(FlatItem {
            parents: entry.parents.to_vec(),
            parent: entry.parent,
            node: entry.node,
        });
        Flow::Descend
    }
}

/// Every item of the tree with its ancestor chain, in traversal order.
pub fn flatten_tree<M, I>(tree: &RootTree<M, I>) -> Vec<FlatItem<'_, M, I>> {
    let mut visitor = FlattenVisitor { items: Vec::new() };
    walk(&mut visitor, tree);
    visitor.items
}

/// Number of items in the tree. Menus are not counted.
pub fn count_items<M, I>(tree: &RootTree<M, I>) -> usize {
    let mut count = 0;
    let mut walkers = Walkers::new().item(|_| count += 1);
    walk(&mut walkers, tree);
    drop(walkers);
    count
}
