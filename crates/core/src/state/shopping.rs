//! # Shopping List State Management
//!
//! Shopping list entries in insertion order. Entries are added directly by
//! the user or merged in from a recipe's missing ingredients.

use crate::models::{
    generate_id, names_match, non_negative, NewShoppingListItem, ShoppingListItem,
};

/// Result of merging an entry into the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A new entry was appended
    Added(String),
    /// An existing entry with the same name had its quantity increased
    Merged(String),
}

impl MergeOutcome {
    /// ID of the affected entry
    pub fn id(&self) -> &str {
        match self {
            Self::Added(id) | Self::Merged(id) => id,
        }
    }
}

/// Manager for the shopping list
#[derive(Debug, Clone, Default)]
pub struct ShoppingListManager {
    items: Vec<ShoppingListItem>,
}

impl ShoppingListManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, in insertion order
    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an entry by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| names_match(&item.name, name))
    }

    /// Entries still to buy
    pub fn unchecked_items(&self) -> Vec<&ShoppingListItem> {
        self.items.iter().filter(|item| !item.checked).collect()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Append a new entry, returning its assigned ID
    pub fn add_item(&mut self, data: NewShoppingListItem) -> String {
        let item = ShoppingListItem {
            id: generate_id("shop"),
            quantity: non_negative(data.quantity, &data.name),
            name: data.name,
            unit: data.unit,
            category: data.category,
            checked: data.checked,
            notes: data.notes,
        };

        tracing::debug!(item_id = %item.id, name = %item.name, "Shopping item added");
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Add `data` to the list, or increase the quantity of an existing
    /// entry with the same name. Units are assumed to agree.
    pub fn merge_item(&mut self, data: NewShoppingListItem) -> MergeOutcome {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| names_match(&item.name, &data.name))
        {
            existing.quantity += non_negative(data.quantity, &data.name);
            tracing::debug!(
                item_id = %existing.id,
                quantity = existing.quantity,
                "Shopping item quantity increased"
            );
            return MergeOutcome::Merged(existing.id.clone());
        }

        MergeOutcome::Added(self.add_item(data))
    }

    /// Flip the checked flag of an entry. Unknown IDs are ignored.
    pub fn toggle_item(&mut self, id: &str) {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                tracing::debug!(item_id = %id, checked = item.checked, "Shopping item toggled");
            }
            None => tracing::debug!(item_id = %id, "Toggle skipped, shopping item not found"),
        }
    }

    /// Remove an entry. Unknown IDs are ignored.
    pub fn delete_item(&mut self, id: &str) {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                tracing::debug!(item_id = %id, "Shopping item deleted");
            }
            None => tracing::debug!(item_id = %id, "Delete skipped, shopping item not found"),
        }
    }

    /// Remove every checked entry, keeping the order of the rest
    pub fn clear_checked(&mut self) {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        tracing::debug!(removed = before - self.items.len(), "Cleared checked shopping items");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn sample_list() -> ShoppingListManager {
        let mut list = ShoppingListManager::new();
        list.add_item(NewShoppingListItem::new("Bread", 1.0, "loaf", Category::Grains));
        list.add_item(NewShoppingListItem::new("Apples", 6.0, "count", Category::Produce));
        list.add_item(NewShoppingListItem::new("Coffee", 1.0, "bag", Category::Beverages));
        list
    }

    #[test]
    fn test_add_then_get_returns_input() {
        let mut list = ShoppingListManager::new();
        let data = NewShoppingListItem::new("Butter", 2.0, "stick", Category::Dairy)
            .with_notes("unsalted");

        let id = list.add_item(data.clone());
        let item = list.get(&id).unwrap();

        assert_eq!(item.name, data.name);
        assert_eq!(item.quantity, data.quantity);
        assert_eq!(item.unit, data.unit);
        assert_eq!(item.category, data.category);
        assert!(!item.checked);
        assert_eq!(item.notes.as_deref(), Some("unsalted"));
    }

    #[test]
    fn test_add_clamps_negative_quantity() {
        let mut list = ShoppingListManager::new();

        let id = list.add_item(NewShoppingListItem::new("Flour", -2.0, "kg", Category::Grains));

        let item = list.get(&id).unwrap();
        assert_eq!(item.name, "Flour");
        assert_eq!(item.quantity, 0.0);
    }

    #[test]
    fn test_toggle_flips_checked() {
        let mut list = sample_list();
        let id = list.items()[0].id.clone();

        list.toggle_item(&id);
        assert!(list.get(&id).unwrap().checked);

        list.toggle_item(&id);
        assert!(!list.get(&id).unwrap().checked);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = sample_list();
        let before = list.items().to_vec();
        list.toggle_item("missing");
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_delete_item() {
        let mut list = sample_list();
        let id = list.items()[1].id.clone();

        list.delete_item(&id);
        assert_eq!(list.len(), 2);
        assert!(list.get(&id).is_none());

        list.delete_item(&id);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_clear_checked_keeps_unchecked_in_order() {
        let mut list = sample_list();
        let apples = list.items()[1].id.clone();
        list.toggle_item(&apples);
        assert_eq!(list.checked_count(), 1);

        list.clear_checked();

        let names: Vec<_> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Bread", "Coffee"]);
        assert_eq!(list.checked_count(), 0);
    }

    #[test]
    fn test_clear_checked_is_idempotent() {
        let mut list = sample_list();
        let bread = list.items()[0].id.clone();
        list.toggle_item(&bread);

        list.clear_checked();
        let once = list.items().to_vec();
        list.clear_checked();

        assert_eq!(list.items(), once.as_slice());
    }

    #[test]
    fn test_merge_increments_existing_entry() {
        let mut list = sample_list();
        let bread = list.items()[0].id.clone();

        let outcome =
            list.merge_item(NewShoppingListItem::new("bread", 2.0, "loaf", Category::Other));

        assert_eq!(outcome, MergeOutcome::Merged(bread.clone()));
        assert_eq!(list.len(), 3);
        let item = list.get(&bread).unwrap();
        assert_eq!(item.quantity, 3.0);
        assert_eq!(item.category, Category::Grains);
    }

    #[test]
    fn test_merge_appends_new_entry() {
        let mut list = sample_list();

        let outcome = list.merge_item(
            NewShoppingListItem::new("Salt", 1.0, "tsp", Category::Other).with_notes("For Salad"),
        );

        assert!(matches!(outcome, MergeOutcome::Added(_)));
        assert_eq!(list.len(), 4);
        let added = list.get(outcome.id()).unwrap();
        assert_eq!(added.notes.as_deref(), Some("For Salad"));
        assert_eq!(list.unchecked_items().len(), 4);
    }
}
