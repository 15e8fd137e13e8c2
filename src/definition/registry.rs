//! Arena of registered menus and items.

use serde::Serialize;
use tracing::debug;

use super::{MenuBarDefinition, MenuDefinition, MenuItemDefinition};
use crate::tree::{build_tree, MenuContent, MenuSource, RootTree};

/// Handle of a registered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MenuId(usize);

/// Handle of a registered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(usize);

impl MenuId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One slot of a menu's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEntry {
    Item(ItemId),
    Menu(MenuId),
    /// Divider between two groups
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredMenu {
    pub label: String,
    /// `None` for top-level menus
    pub parent: Option<MenuId>,
    pub content: Vec<ContentEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredItem {
    pub label: String,
    pub menu: MenuId,
}

/// Flat storage of menus and items, addressed by [`MenuId`] and [`ItemId`].
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    menus: Vec<RegisteredMenu>,
    items: Vec<RegisteredItem>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every menu and item of a definition.
    ///
    /// Groups of the same menu are separated by a [`ContentEntry::Separator`].
    pub fn from_definition(definition: &MenuBarDefinition) -> Self {
        let mut registry = Self::new();
        for menu in &definition.menus {
            registry.register_definition(menu, None);
        }
        debug!(
            menus = registry.menu_count(),
            items = registry.item_count(),
            "registered menu definition"
        );
        registry
    }

    fn register_definition(&mut self, definition: &MenuDefinition, parent: Option<MenuId>) -> MenuId {
        let id = self.add_menu(&definition.label, parent);

        for (index, group) in definition.groups.iter().enumerate() {
            if index > 0 {
                self.add_separator(id);
            }
            for entry in &group.items {
                match entry {
                    MenuItemDefinition::Menu(nested) => {
                        self.register_definition(nested, Some(id));
                    }
                    MenuItemDefinition::Button { label } => {
                        self.add_item(id, label);
                    }
                }
            }
        }

        id
    }

    /// Register a menu. A nested menu is appended to its parent's content.
    pub fn add_menu(&mut self, label: impl Into<String>, parent: Option<MenuId>) -> MenuId {
        let id = MenuId(self.menus.len());
        self.menus.push(RegisteredMenu {
            label: label.into(),
            parent,
            content: Vec::new(),
        });
        if let Some(parent) = parent {
            self.push_content(parent, ContentEntry::Menu(id));
        }
        id
    }

    /// Register an item at the end of `menu`'s content.
    pub fn add_item(&mut self, menu: MenuId, label: impl Into<String>) -> ItemId {
        let id = ItemId(self.items.len());
        self.items.push(RegisteredItem {
            label: label.into(),
            menu,
        });
        self.push_content(menu, ContentEntry::Item(id));
        id
    }

    /// Append a group separator to `menu`'s content.
    pub fn add_separator(&mut self, menu: MenuId) {
        self.push_content(menu, ContentEntry::Separator);
    }

    fn push_content(&mut self, menu: MenuId, entry: ContentEntry) {
        if let Some(menu) = self.menus.get_mut(menu.0) {
            menu.content.push(entry);
        }
    }

    /// All registered menus, in registration order.
    pub fn menus(&self) -> Vec<MenuId> {
        (0..self.menus.len()).map(MenuId).collect()
    }

    pub fn menu(&self, id: MenuId) -> Option<&RegisteredMenu> {
        self.menus.get(id.0)
    }

    pub fn item(&self, id: ItemId) -> Option<&RegisteredItem> {
        self.items.get(id.0)
    }

    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Build a tree from every registered menu.
    pub fn build_tree(&self) -> RootTree<MenuId, ItemId> {
        build_tree(self, &self.menus())
    }
}

impl MenuSource for MenuRegistry {
    type MenuRef = MenuId;
    type ItemRef = ItemId;

    fn menu_label(&self, menu: &MenuId) -> Option<&str> {
        self.menu(*menu).map(|menu| menu.label.as_str())
    }

    fn parent_menu(&self, menu: &MenuId) -> Option<MenuId> {
        self.menu(*menu).and_then(|menu| menu.parent)
    }

    fn menu_content(&self, menu: &MenuId) -> Vec<MenuContent<MenuId, ItemId>> {
        self.menu(*menu)
            .map(|menu| {
                menu.content
                    .iter()
                    .map(|entry| match *entry {
                        ContentEntry::Item(item) => MenuContent::Item(item),
                        ContentEntry::Menu(menu) => MenuContent::Menu(menu),
                        ContentEntry::Separator => MenuContent::Other,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn item_label(&self, item: &ItemId) -> Option<&str> {
        self.item(*item).map(|item| item.label.as_str())
    }
}
