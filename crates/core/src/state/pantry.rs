//! # Pantry Context
//!
//! The single object owning the inventory, shopping list and recipes.
//! Built once at start-up and handed to whatever presents the data; there is
//! no global store. Cross-collection operations live here so the borrows of
//! the three managers can be split explicitly.

use super::inventory::InventoryManager;
use super::recipes::{can_make, RecipeManager};
use super::seed;
use super::shopping::ShoppingListManager;
use crate::config::PantryConfig;
use crate::error::Result;
use crate::models::{AvailableRecipe, InventoryItem, MissingIngredient, Recipe, ShoppingListItem};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Dashboard counts for the home page
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PantrySummary {
    pub inventory_items: usize,
    pub low_stock: usize,
    pub expiring_soon: usize,
    /// Shopping list entries not yet checked off
    pub to_buy: usize,
    pub recipes: usize,
    pub makeable_recipes: usize,
    pub favorite_recipes: usize,
}

/// Read-only view of every collection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PantrySnapshot<'a> {
    pub inventory: &'a [InventoryItem],
    pub shopping_list: &'a [ShoppingListItem],
    pub recipes: &'a [Recipe],
}

/// Owner of the three pantry collections
#[derive(Debug, Clone)]
pub struct Pantry {
    config: PantryConfig,
    inventory: InventoryManager,
    shopping: ShoppingListManager,
    recipes: RecipeManager,
}

impl Default for Pantry {
    fn default() -> Self {
        Self::new(PantryConfig::default())
    }
}

impl Pantry {
    /// Create a pantry with empty collections
    pub fn new(config: PantryConfig) -> Self {
        Self {
            inventory: InventoryManager::new(&config),
            shopping: ShoppingListManager::new(),
            recipes: RecipeManager::new(),
            config,
        }
    }

    /// Create a pantry holding the example snapshot
    pub fn seeded(config: PantryConfig) -> Self {
        let mut pantry = Self::new(config);
        seed::seed_all(
            &mut pantry.inventory,
            &mut pantry.shopping,
            &mut pantry.recipes,
        );
        pantry
    }

    /// Seeded or empty, as the config asks
    pub fn from_config(config: PantryConfig) -> Self {
        if config.seed_example_data {
            Self::seeded(config)
        } else {
            Self::new(config)
        }
    }

    pub fn config(&self) -> &PantryConfig {
        &self.config
    }

    pub fn inventory(&self) -> &InventoryManager {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryManager {
        &mut self.inventory
    }

    pub fn shopping(&self) -> &ShoppingListManager {
        &self.shopping
    }

    pub fn shopping_mut(&mut self) -> &mut ShoppingListManager {
        &mut self.shopping
    }

    pub fn recipes(&self) -> &RecipeManager {
        &self.recipes
    }

    pub fn recipes_mut(&mut self) -> &mut RecipeManager {
        &mut self.recipes
    }

    /// Every recipe annotated with whether the inventory covers it
    pub fn available_recipes(&self) -> Vec<AvailableRecipe<'_>> {
        self.recipes.available_recipes(&self.inventory)
    }

    pub fn missing_ingredients(&self, recipe_id: &str) -> Result<Vec<MissingIngredient>> {
        self.recipes.missing_ingredients(recipe_id, &self.inventory)
    }

    /// See [`RecipeManager::add_recipe_to_shopping_list`]
    pub fn add_recipe_to_shopping_list(&mut self, recipe_id: &str) -> Result<usize> {
        self.recipes
            .add_recipe_to_shopping_list(recipe_id, &self.inventory, &mut self.shopping)
    }

    pub fn snapshot(&self) -> PantrySnapshot<'_> {
        PantrySnapshot {
            inventory: self.inventory.items(),
            shopping_list: self.shopping.items(),
            recipes: self.recipes.recipes(),
        }
    }

    pub fn summary(&self) -> PantrySummary {
        self.summary_at(Utc::now())
    }

    /// Dashboard counts with expiry evaluated at `now`
    pub fn summary_at(&self, now: DateTime<Utc>) -> PantrySummary {
        PantrySummary {
            inventory_items: self.inventory.len(),
            low_stock: self.inventory.low_stock_items().len(),
            expiring_soon: self.inventory.expiring_soon_at(now).len(),
            to_buy: self.shopping.unchecked_items().len(),
            recipes: self.recipes.len(),
            makeable_recipes: self
                .recipes
                .recipes()
                .iter()
                .filter(|recipe| can_make(recipe, &self.inventory))
                .count(),
            favorite_recipes: self.recipes.favorite_recipes().len(),
        }
    }
}
