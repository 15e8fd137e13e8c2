//! Walker contracts (WALK-001 through WALK-002)

use crate::common::*;
use menu_tree::tree::{walk_mut, EntryMut, Flow, ItemNode, MenuNode, VisitorMut, Walkers};
use menu_tree::{walk, ItemId, MenuId};

/// CONTRACT WALK-001: Every reachable node is visited exactly once
mod visit_once {
    use super::*;

    #[test]
    fn contract_walk_visits_each_node_once() {
        let tree = menu_bar_tree();
        let mut menus = Vec::new();
        let mut items = Vec::new();
        {
            let mut walkers = Walkers::<MenuId, ItemId>::new()
                .menu(|entry| menus.push(entry.node.menu))
                .item(|entry| items.push(entry.node.item));
            walk(&mut walkers, &tree);
        }

        menus.sort();
        menus.dedup();
        items.sort();
        items.dedup();
        assert_eq!(menus.len(), 2);
        assert_eq!(items.len(), 5);
    }
}

/// CONTRACT WALK-002: Removing a node never skips its next sibling
mod removal_cursor {
    use super::*;

    struct RemoveAll {
        visited: usize,
    }

    impl VisitorMut<MenuId, ItemId> for RemoveAll {
        fn enter_item(&mut self, entry: &mut EntryMut<'_, ItemNode<ItemId>>) -> Flow {
            self.visited += 1;
            entry.detach();
            Flow::Descend
        }

        fn leave_menu(&mut self, entry: &mut EntryMut<'_, MenuNode<MenuId, ItemId>>) {
            entry.detach();
        }
    }

    #[test]
    fn contract_removing_every_item_visits_every_item() {
        let mut tree = menu_bar_tree();
        let mut visitor = RemoveAll { visited: 0 };
        walk_mut(&mut visitor, &mut tree);

        assert_eq!(visitor.visited, 5);
        assert!(tree.is_empty());
    }
}
