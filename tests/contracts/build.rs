//! Build contracts (BUILD-001 through BUILD-003)

use crate::common::*;
use menu_tree::definition::MenuRegistry;
use menu_tree::{count_items, NodeKind, TreeChild};

/// CONTRACT BUILD-001: Top-level menus become root children in input order
mod top_level_order {
    use super::*;

    #[test]
    fn contract_top_level_menus_are_root_children_in_order() {
        let tree = menu_bar_tree();

        let labels: Vec<&str> = tree.children.iter().map(|c| c.search().raw.as_str()).collect();
        assert_eq!(labels, vec!["Menu 1", "Menu 2"]);
        assert!(tree.children.iter().all(|c| c.kind() == NodeKind::Menu));
    }

    #[test]
    fn contract_items_keep_definition_order_across_groups() {
        let tree = menu_bar_tree();
        let menu_1 = tree.children[0].as_menu().unwrap();

        let labels: Vec<&str> = menu_1.children.iter().map(|c| c.search().raw.as_str()).collect();
        assert_eq!(labels, vec!["Foo", "Bar", "Buz"]);
    }
}

/// CONTRACT BUILD-002: Every registered menu appears exactly once
mod no_duplicates {
    use super::*;

    fn count_menus(children: &[TreeChild<menu_tree::MenuId, menu_tree::ItemId>]) -> usize {
        children
            .iter()
            .filter_map(TreeChild::as_menu)
            .map(|menu| 1 + count_menus(&menu.children))
            .sum()
    }

    #[test]
    fn contract_each_menu_node_appears_once() {
        let registry = MenuRegistry::from_definition(&parse_toml(EDITOR_MENUS_TOML));
        let tree = registry.build_tree();

        assert_eq!(count_menus(&tree.children), registry.menu_count());
        assert_eq!(count_items(&tree), registry.item_count());
    }
}

/// CONTRACT BUILD-003: Empty input yields an empty root
mod empty_input {
    use super::*;

    #[test]
    fn contract_empty_registry_builds_empty_root() {
        let tree = MenuRegistry::new().build_tree();

        assert!(tree.is_empty());
        assert_eq!(count_items(&tree), 0);
    }
}
