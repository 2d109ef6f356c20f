//! Plain data for the shopping list: items, the add-dialog draft and the
//! inline row editor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed out by the store when an item is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    /// Set while this row shows its inline editor.
    #[serde(default)]
    pub editing: bool,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            editing: false,
        }
    }
}

/// Raw text typed into the add-item dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub quantity: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.quantity.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
    }
}

/// Text state of a row's inline editor.
///
/// Seeded from the item when editing starts; the text fields are free-form
/// until [`finish`](Self::finish) turns them into a name and quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEditor {
    id: ItemId,
    pub name: String,
    pub quantity: String,
}

impl ItemEditor {
    pub fn for_item(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    pub fn set_quantity(&mut self, text: impl Into<String>) {
        self.quantity = text.into();
    }

    /// Name and quantity to save. A quantity that does not parse saves as 1.
    pub fn finish(&self) -> (String, u32) {
        (self.name.clone(), parse_edit_quantity(&self.quantity))
    }
}

/// How the rendering layer should present one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Display(&'a Item),
    Editor(&'a Item),
}

impl<'a> Row<'a> {
    pub fn item(&self) -> &'a Item {
        match *self {
            Row::Display(item) | Row::Editor(item) => item,
        }
    }
}

impl<'a> From<&'a Item> for Row<'a> {
    fn from(item: &'a Item) -> Self {
        if item.editing {
            Row::Editor(item)
        } else {
            Row::Display(item)
        }
    }
}

/// Quantity typed into the add dialog. `None` unless it is a whole number above zero.
pub fn parse_add_quantity(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|&n| n > 0)
}

/// Quantity typed into a row editor, falling back to 1.
pub fn parse_edit_quantity(text: &str) -> u32 {
    text.trim().parse().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_quantity_requires_positive_integer() {
        assert_eq!(parse_add_quantity("2"), Some(2));
        assert_eq!(parse_add_quantity(" 12 "), Some(12));
        assert_eq!(parse_add_quantity("0"), None);
        assert_eq!(parse_add_quantity("-1"), None);
        assert_eq!(parse_add_quantity("two"), None);
        assert_eq!(parse_add_quantity(""), None);
    }

    #[test]
    fn edit_quantity_defaults_to_one() {
        assert_eq!(parse_edit_quantity("5"), 5);
        assert_eq!(parse_edit_quantity("abc"), 1);
        assert_eq!(parse_edit_quantity(""), 1);
        assert_eq!(parse_edit_quantity("1.5"), 1);
    }

    #[test]
    fn editor_starts_from_item() {
        let item = Item::new(ItemId(3), "Eggs", 12);
        let mut editor = ItemEditor::for_item(&item);
        assert_eq!(editor.id(), ItemId(3));
        assert_eq!(editor.finish(), ("Eggs".to_string(), 12));

        editor.set_name("Brown eggs");
        editor.set_quantity("a dozen");
        assert_eq!(editor.finish(), ("Brown eggs".to_string(), 1));
    }

    #[test]
    fn row_follows_editing_flag() {
        let mut item = Item::new(ItemId(1), "Milk", 2);
        assert!(matches!(Row::from(&item), Row::Display(_)));
        item.editing = true;
        let row = Row::from(&item);
        assert!(matches!(row, Row::Editor(_)));
        assert_eq!(row.item().name, "Milk");
    }
}
