// SPDX-License-Identifier: MPL-2.0
//! Storage inventory: a small table of physical items.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Furniture,
    Stationery,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Furniture,
        Category::Stationery,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Stationery => "Stationery",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}

/// One row of the inventory table. A freshly added row may have no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub category: Option<Category>,
    pub quantity: u32,
    pub location: String,
}

impl InventoryItem {
    /// A blank row carrying only its id.
    #[must_use]
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            category: None,
            quantity: 0,
            location: String::new(),
        }
    }

    fn seed(id: u32, name: &str, category: Category, quantity: u32, location: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: Some(category),
            quantity,
            location: location.to_string(),
        }
    }
}

/// Parses a quantity field the lenient way: optional leading whitespace and
/// sign, then leading digits. Anything unparsable, zero or negative is 0.
#[must_use]
pub fn parse_quantity(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

/// Ordered inventory rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    #[must_use]
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    /// The five rows a fresh inventory starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            InventoryItem::seed(1, "Laptop", Category::Electronics, 5, "Room A"),
            InventoryItem::seed(2, "Desk Chair", Category::Furniture, 10, "Warehouse B"),
            InventoryItem::seed(3, "Notebooks", Category::Stationery, 100, "Storage C"),
            InventoryItem::seed(4, "Monitors", Category::Electronics, 15, "Room A"),
            InventoryItem::seed(5, "Filing Cabinet", Category::Furniture, 8, "Office D"),
        ])
    }

    #[must_use]
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Highest id plus one, or 1 for an empty inventory.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    pub fn append(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Replaces every row whose id matches `item.id`. Returns `true` if any did.
    pub fn replace(&mut self, item: InventoryItem) -> bool {
        let mut replaced = false;
        for row in self.items.iter_mut().filter(|row| row.id == item.id) {
            *row = item.clone();
            replaced = true;
        }
        replaced
    }

    pub fn delete(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_inventory_has_five_rows() {
        let inventory = Inventory::seeded();
        assert_eq!(inventory.items().len(), 5);
        assert_eq!(inventory.next_id(), 6);
    }

    #[test]
    fn next_id_on_empty_inventory_is_one() {
        assert_eq!(Inventory::default().next_id(), 1);
    }

    #[test]
    fn next_id_uses_max_not_len() {
        let mut inventory = Inventory::seeded();
        inventory.delete(2);
        assert_eq!(inventory.next_id(), 6);
        inventory.delete(5);
        assert_eq!(inventory.next_id(), 5);
    }

    #[test]
    fn replace_updates_matching_row_in_place() {
        let mut inventory = Inventory::seeded();
        let mut edited = inventory.get(3).cloned().unwrap();
        edited.quantity = 42;
        assert!(inventory.replace(edited));
        assert_eq!(inventory.items()[2].quantity, 42);
    }

    #[test]
    fn replace_unknown_id_changes_nothing() {
        let mut inventory = Inventory::seeded();
        let before = inventory.clone();
        assert!(!inventory.replace(InventoryItem::blank(99)));
        assert_eq!(inventory, before);
    }

    #[test]
    fn quantity_parsing_is_lenient() {
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity(" 7 boxes"), 7);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("-4"), 0);
        assert_eq!(parse_quantity("+3"), 3);
    }
}
