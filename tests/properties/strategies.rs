//! Generators for random menu definitions.

use proptest::collection::vec;
use proptest::prelude::*;

use menu_tree::definition::{
    MenuBarDefinition, MenuDefinition, MenuGroupDefinition, MenuItemDefinition,
};

/// Short labels, occasionally blank or padded
pub fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex(" ?[A-Za-z][a-z ]{0,7}|")
        .unwrap()
}

fn button() -> impl Strategy<Value = MenuItemDefinition> {
    label().prop_map(MenuItemDefinition::button)
}

fn groups<S>(entry: S) -> impl Strategy<Value = Vec<MenuGroupDefinition>>
where
    S: Strategy<Value = MenuItemDefinition>,
{
    vec(vec(entry, 0..4).prop_map(MenuGroupDefinition::new), 0..3)
}

pub fn menu() -> impl Strategy<Value = MenuDefinition> {
    let leaf = (label(), groups(button())).prop_map(|(label, groups)| MenuDefinition::new(label, groups));

    leaf.prop_recursive(3, 32, 4, |inner| {
        let entry = prop_oneof![
            3 => button(),
            1 => inner.prop_map(MenuItemDefinition::Menu),
        ];
        (label(), groups(entry)).prop_map(|(label, groups)| MenuDefinition::new(label, groups))
    })
}

pub fn menu_bar() -> impl Strategy<Value = MenuBarDefinition> {
    vec(menu(), 0..4).prop_map(MenuBarDefinition::new)
}
