//! # Inventory State Management
//!
//! Pantry items in insertion order, plus the low-stock and expiring-soon
//! views. Views are recomputed from the current items on every call.

use crate::config::PantryConfig;
use crate::models::{
    generate_id, names_match, non_negative, Category, InventoryItem, InventoryItemUpdate,
    NewInventoryItem,
};
use chrono::{DateTime, Duration, Utc};

/// Manager for the pantry inventory
#[derive(Debug, Clone)]
pub struct InventoryManager {
    items: Vec<InventoryItem>,
    expiring_soon_days: i64,
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new(&PantryConfig::default())
    }
}

impl InventoryManager {
    /// Create an empty inventory
    pub fn new(config: &PantryConfig) -> Self {
        Self {
            items: Vec::new(),
            expiring_soon_days: config.expiring_soon_days,
        }
    }

    /// All items, in insertion order
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by ID
    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an item by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| names_match(&item.name, name))
    }

    /// Add a new item, returning its assigned ID
    pub fn add_item(&mut self, data: NewInventoryItem) -> String {
        let item = InventoryItem {
            id: generate_id("inv"),
            quantity: non_negative(data.quantity, &data.name),
            name: data.name,
            unit: data.unit,
            category: data.category,
            expiration_date: data.expiration_date,
            low_stock_threshold: data.low_stock_threshold,
            added_date: Utc::now(),
        };

        tracing::debug!(item_id = %item.id, name = %item.name, "Inventory item added");
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Merge `updates` over the item with this ID. Unknown IDs are ignored.
    pub fn update_item(&mut self, id: &str, mut updates: InventoryItemUpdate) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(item_id = %id, "Update skipped, inventory item not found");
            return;
        };

        if let Some(quantity) = updates.quantity {
            updates.quantity = Some(non_negative(quantity, &item.name));
        }
        updates.apply_to(item);
        tracing::debug!(item_id = %id, "Inventory item updated");
    }

    /// Remove the item with this ID. Unknown IDs are ignored.
    pub fn delete_item(&mut self, id: &str) {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                tracing::debug!(item_id = %id, "Inventory item deleted");
            }
            None => tracing::debug!(item_id = %id, "Delete skipped, inventory item not found"),
        }
    }

    /// Items in a category, in insertion order
    pub fn get_items_by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &InventoryItem> + Clone + '_ {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Items whose quantity is at or below their low-stock threshold
    pub fn low_stock_items(&self) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| item.quantity <= item.low_stock_threshold)
            .collect()
    }

    /// Items expiring within the configured window from now
    pub fn expiring_soon(&self) -> Vec<&InventoryItem> {
        self.expiring_soon_at(Utc::now())
    }

    /// Items with an expiration date at or before `now` plus the window.
    ///
    /// A window too large to represent has no cutoff: every dated item counts.
    pub fn expiring_soon_at(&self, now: DateTime<Utc>) -> Vec<&InventoryItem> {
        let cutoff = Duration::try_days(self.expiring_soon_days)
            .and_then(|window| now.checked_add_signed(window));
        let within = |date: DateTime<Utc>| cutoff.map_or(true, |cutoff| date <= cutoff);
        self.items
            .iter()
            .filter(|item| item.expiration_date.is_some_and(&within))
            .collect()
    }
}
