//! Grouping of filtered items under the menu that matched.

use super::flatten::flatten_tree;
use super::node::{ItemNode, NodeRef, RootTree};

/// Items sharing the same display parent.
#[derive(Debug)]
pub struct FoundGroup<'t, M, I> {
    /// The nearest found ancestor, or the immediate parent if none was found
    pub parent: NodeRef<'t, M, I>,
    /// Items in traversal order
    pub children: Vec<&'t ItemNode<I>>,
}

/// Group every item of a filtered tree by its nearest found ancestor.
///
/// Items without a found ancestor are grouped under their immediate parent,
/// which may be the root. Groups are compared by node identity and keep the
/// order in which they are first encountered.
pub fn group_by_first_found_parent<M, I>(tree: &RootTree<M, I>) -> Vec<FoundGroup<'_, M, I>> {
    let mut groups: Vec<FoundGroup<'_, M, I>> = Vec::new();

    for flat in flatten_tree(tree) {
        let parent = flat
            .parents
            .iter()
            .rev()
            .find(|node| node.is_found())
            .copied()
            .unwrap_or(flat.parent);

        match groups.iter_mut().find(|group| group.parent.ptr_eq(&parent)) {
            Some(group) => group.children.push(flat.node),
            None => groups.push(FoundGroup {
                parent,
                children: vec![flat.node],
            }),
        }
    }

    groups
}
