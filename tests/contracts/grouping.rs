//! Grouping contracts (GROUP-001 through GROUP-002)

use crate::common::*;
use menu_tree::definition::MenuRegistry;
use menu_tree::{filter_by_pattern, group_by_first_found_parent, search, MatchMode, NodeKind, SearchQuery, SearchView, FoundEntry};
use regex::Regex;

/// CONTRACT GROUP-001: Items are grouped under their nearest found menu
mod nearest_found {
    use super::*;

    #[test]
    fn contract_menu_match_groups_items_under_that_menu() {
        let tree = menu_bar_tree();
        let pattern = Regex::new("menu 1").unwrap();
        let result = filter_by_pattern(Some(&pattern), &tree);
        let groups = group_by_first_found_parent(&result.filtered_tree);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].parent.label(), Some("Menu 1"));
        let labels: Vec<&str> = groups[0].children.iter().map(|i| i.search.raw.as_str()).collect();
        assert_eq!(labels, vec!["Foo", "Bar", "Buz"]);
    }

    #[test]
    fn contract_nested_menu_match_wins_over_immediate_parent() {
        let tree = MenuRegistry::from_definition(&parse_toml(EDITOR_MENUS_TOML)).build_tree();
        let pattern = Regex::new("table").unwrap();
        let result = filter_by_pattern(Some(&pattern), &tree);
        let groups = group_by_first_found_parent(&result.filtered_tree);

        let summary: Vec<(Option<&str>, usize)> =
            groups.iter().map(|g| (g.parent.label(), g.children.len())).collect();
        assert_eq!(summary, vec![(Some("Table"), 2), (Some("Format"), 1)]);
        assert!(groups.iter().all(|g| g.parent.kind() == NodeKind::Menu));
    }
}

/// CONTRACT GROUP-002: Search views switch on completeness
mod search_view {
    use super::*;

    #[test]
    fn contract_full_match_shows_full_tree() {
        let tree = menu_bar_tree();
        let result = search(&tree, &SearchQuery::parse("", MatchMode::Substring).unwrap());

        assert!(matches!(result.view(), SearchView::FullTree { results_count: 5, total_items_count: 5 }));
    }

    #[test]
    fn contract_partial_match_shows_found_groups() {
        let tree = menu_bar_tree();
        let query = SearchQuery::parse("Menu 1", MatchMode::Substring).unwrap();
        let result = search(&tree, &query);

        match result.view() {
            SearchView::Found { entries, results_count, total_items_count } => {
                assert_eq!((results_count, total_items_count), (3, 5));
                assert_eq!(entries.len(), 1);
                assert!(matches!(&entries[0], FoundEntry::Group { label: "Menu 1", items, .. } if items.len() == 3));
            }
            other => panic!("expected found view, got {other:?}"),
        }
    }
}
