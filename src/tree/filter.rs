//! Tree filtering.
//!
//! Filters always work on a clone: the input tree is borrowed and never
//! changed. Matching nodes in the clone get their `found` marker set, and
//! everything that neither matches nor leads to a match is removed.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::clone::clone_tree;
use super::flatten::count_items;
use super::node::{ItemNode, MenuNode, NodeRef, RootTree};
use super::walk::{walk_mut, EntryMut, Flow, VisitorMut};

/// Outcome of a filter run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<M, I> {
    /// Pruned copy of the input, with `found` markers set
    pub filtered_tree: RootTree<M, I>,
    /// Items left in `filtered_tree`
    pub results_count: usize,
    /// Items in the input tree
    pub total_items_count: usize,
}

impl<M, I> SearchResult<M, I> {
    /// Whether every item of the input survived
    pub fn is_complete(&self) -> bool {
        self.results_count == self.total_items_count
    }
}

struct PruneVisitor<F> {
    predicate: F,
}

impl<M, I, F> VisitorMut<M, I> for PruneVisitor<F>
where
    F: FnMut(NodeRef<'_, M, I>) -> bool,
{
    fn enter_menu(&mut self, entry: &mut EntryMut<'_, MenuNode<M, I>>) -> Flow {
        if (self.predicate)(NodeRef::Menu(entry.node)) {
            // A matching menu keeps its whole subtree
            entry.node.found = true;
            Flow::Skip
        } else {
            Flow::Descend
        }
    }

    fn leave_menu(&mut self, entry: &mut EntryMut<'_, MenuNode<M, I>>) {
        if entry.node.children.is_empty() {
            entry.detach();
        }
    }

    fn enter_item(&mut self, entry: &mut EntryMut<'_, ItemNode<I>>) -> Flow {
        if (self.predicate)(NodeRef::Item(entry.node)) {
            entry.node.found = true;
        } else {
            entry.detach();
        }
        Flow::Descend
    }
}

/// Keep the nodes accepted by `predicate`, plus the menus leading to them.
///
/// A menu accepted by the predicate is marked found and kept with its whole
/// subtree; its descendants are not tested. Menus left without children are
/// removed, found or not. The predicate is never called with the root.
pub fn filter_tree<M, I, F>(predicate: F, tree: &RootTree<M, I>) -> SearchResult<M, I>
where
    M: Clone,
    I: Clone,
    F: FnMut(NodeRef<'_, M, I>) -> bool,
{
    let total_items_count = count_items(tree);

    let mut filtered_tree = clone_tree(tree);
    walk_mut(&mut PruneVisitor { predicate }, &mut filtered_tree);

    let results_count = count_items(&filtered_tree);
    debug!(results_count, total_items_count, "filtered menu tree");

    SearchResult {
        filtered_tree,
        results_count,
        total_items_count,
    }
}

/// Filter by matching `pattern` against each node's normalized label.
///
/// `None` matches every node.
pub fn filter_by_pattern<M, I>(pattern: Option<&Regex>, tree: &RootTree<M, I>) -> SearchResult<M, I>
where
    M: Clone,
    I: Clone,
{
    filter_tree(
        |node| match (pattern, node.search()) {
            (None, _) => true,
            (Some(pattern), Some(search)) => pattern.is_match(&search.text),
            (Some(_), None) => false,
        },
        tree,
    )
}
