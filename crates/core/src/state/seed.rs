//! # Example Data
//!
//! The snapshot a fresh pantry starts from: a few staples in stock, two
//! things on the shopping list and three everyday recipes.

use super::inventory::InventoryManager;
use super::recipes::RecipeManager;
use super::shopping::ShoppingListManager;
use crate::models::{Category, NewInventoryItem, NewRecipe, NewShoppingListItem, RecipeIngredient};
use chrono::{DateTime, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

/// Default inventory items
pub fn default_inventory() -> Vec<NewInventoryItem> {
    vec![
        NewInventoryItem {
            expiration_date: date(2025, 12, 30),
            ..NewInventoryItem::new("Milk", 2.0, "L", Category::Dairy, 1.0)
        },
        NewInventoryItem {
            expiration_date: date(2026, 1, 5),
            ..NewInventoryItem::new("Eggs", 12.0, "count", Category::Dairy, 6.0)
        },
        NewInventoryItem {
            expiration_date: date(2025, 12, 28),
            ..NewInventoryItem::new("Tomatoes", 5.0, "count", Category::Produce, 2.0)
        },
    ]
}

/// Default shopping list entries
pub fn default_shopping_list() -> Vec<NewShoppingListItem> {
    vec![
        NewShoppingListItem::new("Bread", 1.0, "loaf", Category::Grains),
        NewShoppingListItem::new("Apples", 6.0, "count", Category::Produce),
    ]
}

/// Default recipes
pub fn default_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe::new("Scrambled Eggs")
            .with_ingredient(RecipeIngredient::new("Eggs", 3.0, "count"))
            .with_ingredient(RecipeIngredient::new("Milk", 0.05, "L"))
            .with_ingredient(RecipeIngredient::new("Butter", 1.0, "tbsp").optional())
            .with_instruction("Beat eggs and milk together in a bowl")
            .with_instruction("Heat butter in a pan over medium heat")
            .with_instruction("Pour egg mixture into pan")
            .with_instruction("Stir gently until eggs are cooked")
            .with_times(5, 5)
            .with_servings(2),
        NewRecipe::new("Tomato Salad")
            .with_ingredient(RecipeIngredient::new("Tomatoes", 3.0, "count"))
            .with_ingredient(RecipeIngredient::new("Olive Oil", 2.0, "tbsp"))
            .with_ingredient(RecipeIngredient::new("Salt", 1.0, "tsp"))
            .with_instruction("Chop tomatoes into quarters")
            .with_instruction("Drizzle with olive oil")
            .with_instruction("Season with salt")
            .with_instruction("Serve fresh")
            .with_times(10, 0)
            .with_servings(2),
        NewRecipe::new("Egg Salad Sandwich")
            .with_ingredient(RecipeIngredient::new("Eggs", 4.0, "count"))
            .with_ingredient(RecipeIngredient::new("Bread", 4.0, "slices"))
            .with_ingredient(RecipeIngredient::new("Mayonnaise", 3.0, "tbsp"))
            .with_instruction("Hard boil eggs for 10 minutes")
            .with_instruction("Peel and chop eggs")
            .with_instruction("Mix with mayonnaise")
            .with_instruction("Spread on bread and serve")
            .with_times(5, 15)
            .with_servings(2),
    ]
}

/// Load the example snapshot into empty managers
pub fn seed_all(
    inventory: &mut InventoryManager,
    shopping: &mut ShoppingListManager,
    recipes: &mut RecipeManager,
) {
    for item in default_inventory() {
        inventory.add_item(item);
    }
    for item in default_shopping_list() {
        shopping.add_item(item);
    }
    for recipe in default_recipes() {
        recipes.add_recipe(recipe);
    }

    tracing::info!(
        inventory = inventory.len(),
        shopping = shopping.len(),
        recipes = recipes.len(),
        "Seeded example pantry data"
    );
}
