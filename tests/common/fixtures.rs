//! Test fixtures - reusable menu definitions for tests.

use menu_tree::definition::{
    DefinitionFormat, MenuBarDefinition, MenuDefinition, MenuGroupDefinition, MenuItemDefinition,
    MenuRegistry,
};
use menu_tree::{ItemId, MenuId, RootTree};

/// Two menus: "Menu 1" with two groups {Foo, Bar} {Buz}, "Menu 2" with {A, B}
pub const MENU_BAR_TOML: &str = r#"
[[menus]]
label = "Menu 1"

[[menus.groups]]
items = [{ label = "Foo" }, { label = "Bar" }]

[[menus.groups]]
items = [{ label = "Buz" }]

[[menus]]
label = "Menu 2"

[[menus.groups]]
items = [{ label = "A" }, { label = "B" }]
"#;

/// Same menus as `MENU_BAR_TOML`
pub const MENU_BAR_JSON: &str = r#"{
  "menus": [
    { "label": "Menu 1", "groups": [
      { "items": [{ "label": "Foo" }, { "label": "Bar" }] },
      { "items": [{ "label": "Buz" }] }
    ] },
    { "label": "Menu 2", "groups": [
      { "items": [{ "label": "A" }, { "label": "B" }] }
    ] }
  ]
}"#;

/// Same menus as `MENU_BAR_TOML`
pub const MENU_BAR_YAML: &str = r#"
menus:
  - label: Menu 1
    groups:
      - items:
          - label: Foo
          - label: Bar
      - items:
          - label: Buz
  - label: Menu 2
    groups:
      - items:
          - label: A
          - label: B
"#;

/// An editor-like menu bar with nested menus
pub const EDITOR_MENUS_TOML: &str = r#"
[[menus]]
label = "Insert"

[[menus.groups]]
items = [
    { label = "Image" },
    { label = "Table", groups = [{ items = [{ label = "Row above" }, { label = "Column left" }] }] },
]

[[menus]]
label = "Format"

[[menus.groups]]
items = [{ label = "Bold" }, { label = "Table style" }]
"#;

/// Parse a TOML fixture
pub fn parse_toml(text: &str) -> MenuBarDefinition {
    MenuBarDefinition::parse(text, DefinitionFormat::Toml).expect("fixture must parse")
}

/// Build the tree of `MENU_BAR_TOML`
pub fn menu_bar_tree() -> RootTree<MenuId, ItemId> {
    MenuRegistry::from_definition(&parse_toml(MENU_BAR_TOML)).build_tree()
}

/// A chain of menus `depth` levels deep with one button at the bottom
pub fn nested_menus(depth: usize) -> MenuBarDefinition {
    let mut menu = MenuDefinition::new(
        format!("Level {depth}"),
        vec![MenuGroupDefinition::new(vec![MenuItemDefinition::button("Leaf")])],
    );
    for level in (1..depth).rev() {
        menu = MenuDefinition::new(
            format!("Level {level}"),
            vec![MenuGroupDefinition::new(vec![MenuItemDefinition::Menu(menu)])],
        );
    }
    MenuBarDefinition::new(vec![menu])
}

/// JSON text of `nested_menus(depth)`
pub fn nested_menus_json(depth: usize) -> String {
    serde_json::to_string_pretty(&nested_menus(depth)).expect("fixture must serialize")
}
