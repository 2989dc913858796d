//! # Recipe State Management
//!
//! Recipes and the cross-collection operations on them. The recipe manager
//! reads the inventory and writes into the shopping list; both are passed in
//! explicitly, so neither of them depends back on recipes.
//!
//! Ingredients are matched to inventory items by case-insensitive name.
//! Optional ingredients never block a recipe and are never shopped for.

use super::inventory::InventoryManager;
use super::shopping::{MergeOutcome, ShoppingListManager};
use crate::error::{PantryError, Result};
use crate::models::{
    generate_id, names_match, AvailableRecipe, Category, MissingIngredient, NewRecipe,
    NewShoppingListItem, Recipe,
};

/// Manager for the recipe collection
#[derive(Debug, Clone, Default)]
pub struct RecipeManager {
    recipes: Vec<Recipe>,
}

impl RecipeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recipes, in insertion order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Look up a recipe by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| names_match(&recipe.name, name))
    }

    /// Add a new recipe, returning its assigned ID
    pub fn add_recipe(&mut self, data: NewRecipe) -> String {
        let recipe = Recipe {
            id: generate_id("rcp"),
            name: data.name,
            ingredients: data.ingredients,
            instructions: data.instructions,
            prep_time: data.prep_time,
            cook_time: data.cook_time,
            servings: data.servings,
            image_url: data.image_url,
            is_favorite: data.is_favorite,
        };

        tracing::debug!(recipe_id = %recipe.id, name = %recipe.name, "Recipe added");
        let id = recipe.id.clone();
        self.recipes.push(recipe);
        id
    }

    /// Flip the favorite flag of a recipe. Unknown IDs are ignored.
    pub fn toggle_favorite(&mut self, id: &str) {
        match self.recipes.iter_mut().find(|recipe| recipe.id == id) {
            Some(recipe) => {
                recipe.is_favorite = !recipe.is_favorite;
                tracing::debug!(
                    recipe_id = %id,
                    is_favorite = recipe.is_favorite,
                    "Recipe favorite toggled"
                );
            }
            None => tracing::debug!(recipe_id = %id, "Toggle skipped, recipe not found"),
        }
    }

    /// Recipes marked as favorite
    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|recipe| recipe.is_favorite).collect()
    }

    /// Every recipe with whether current inventory covers it
    pub fn available_recipes(&self, inventory: &InventoryManager) -> Vec<AvailableRecipe<'_>> {
        self.recipes
            .iter()
            .map(|recipe| AvailableRecipe {
                recipe,
                can_make: can_make(recipe, inventory),
            })
            .collect()
    }

    /// Shortfall of each required ingredient of a recipe against inventory
    pub fn missing_ingredients(
        &self,
        recipe_id: &str,
        inventory: &InventoryManager,
    ) -> Result<Vec<MissingIngredient>> {
        let recipe = self.require(recipe_id)?;
        Ok(missing_for(recipe, inventory))
    }

    /// Put everything the recipe lacks onto the shopping list.
    ///
    /// Entries already on the list (matched by name) have their quantity
    /// increased; the rest are added unchecked with a note naming the recipe.
    /// Returns the number of missing ingredients, or `NotFound` if the recipe
    /// does not exist (in which case nothing is modified).
    pub fn add_recipe_to_shopping_list(
        &self,
        recipe_id: &str,
        inventory: &InventoryManager,
        shopping: &mut ShoppingListManager,
    ) -> Result<usize> {
        let recipe = self.require(recipe_id)?;
        let missing = missing_for(recipe, inventory);
        let note = format!("For {}", recipe.name);

        let mut merged = 0;
        for ingredient in &missing {
            let entry = NewShoppingListItem::new(
                ingredient.name.clone(),
                ingredient.quantity,
                ingredient.unit.clone(),
                ingredient.category,
            )
            .with_notes(note.clone());

            if let MergeOutcome::Merged(_) = shopping.merge_item(entry) {
                merged += 1;
            }
        }

        tracing::info!(
            recipe_id = %recipe.id,
            recipe = %recipe.name,
            missing = missing.len(),
            merged,
            "Added recipe ingredients to shopping list"
        );

        Ok(missing.len())
    }

    fn require(&self, id: &str) -> Result<&Recipe> {
        self.get(id).ok_or_else(|| PantryError::NotFound { id: id.to_string() })
    }
}

/// Whether every required ingredient is in stock in sufficient quantity
pub fn can_make(recipe: &Recipe, inventory: &InventoryManager) -> bool {
    recipe.required_ingredients().all(|ingredient| {
        inventory
            .find_by_name(&ingredient.name)
            .is_some_and(|item| item.quantity >= ingredient.quantity)
    })
}

fn missing_for(recipe: &Recipe, inventory: &InventoryManager) -> Vec<MissingIngredient> {
    recipe
        .required_ingredients()
        .filter_map(|ingredient| {
            let (quantity, category) = match inventory.find_by_name(&ingredient.name) {
                // No inventory record to take a category from
                None => (ingredient.quantity, Category::Other),
                Some(item) if item.quantity < ingredient.quantity => {
                    (ingredient.quantity - item.quantity, item.category)
                }
                Some(_) => return None,
            };

            Some(MissingIngredient {
                name: ingredient.name.clone(),
                quantity,
                unit: ingredient.unit.clone(),
                category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewInventoryItem, RecipeIngredient};

    fn stocked_inventory() -> InventoryManager {
        let mut inventory = InventoryManager::default();
        inventory.add_item(NewInventoryItem::new("Eggs", 12.0, "count", Category::Dairy, 6.0));
        inventory.add_item(NewInventoryItem::new("Milk", 2.0, "L", Category::Dairy, 1.0));
        inventory.add_item(NewInventoryItem::new(
            "Tomatoes",
            2.0,
            "count",
            Category::Produce,
            2.0,
        ));
        inventory
    }

    fn scrambled_eggs() -> NewRecipe {
        NewRecipe::new("Scrambled Eggs")
            .with_ingredient(RecipeIngredient::new("Eggs", 3.0, "count"))
            .with_ingredient(RecipeIngredient::new("milk", 0.05, "L"))
            .with_ingredient(RecipeIngredient::new("Butter", 1.0, "tbsp").optional())
            .with_instruction("Beat eggs and milk together")
            .with_times(5, 5)
            .with_servings(2)
    }

    #[test]
    fn test_add_then_get_returns_input() {
        let mut recipes = RecipeManager::new();
        let data = scrambled_eggs();

        let id = recipes.add_recipe(data.clone());
        let recipe = recipes.get(&id).unwrap();

        assert_eq!(recipe.name, data.name);
        assert_eq!(recipe.ingredients, data.ingredients);
        assert_eq!(recipe.instructions, data.instructions);
        assert_eq!(recipe.total_time(), 10);
        assert!(!recipe.is_favorite);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut recipes = RecipeManager::new();
        let id = recipes.add_recipe(scrambled_eggs());
        recipes.add_recipe(NewRecipe::new("Toast"));

        recipes.toggle_favorite(&id);
        let favorites: Vec<_> = recipes.favorite_recipes().iter().map(|r| r.id.clone()).collect();
        assert_eq!(favorites, [id.clone()]);

        recipes.toggle_favorite(&id);
        assert!(recipes.favorite_recipes().is_empty());

        recipes.toggle_favorite("missing");
        assert!(recipes.favorite_recipes().is_empty());
    }

    #[test]
    fn test_satisfied_recipe_is_makeable_and_adds_nothing() {
        let inventory = stocked_inventory();
        let mut shopping = ShoppingListManager::new();
        let mut recipes = RecipeManager::new();
        let id = recipes.add_recipe(scrambled_eggs());

        let available = recipes.available_recipes(&inventory);
        assert_eq!(available.len(), 1);
        assert!(available[0].can_make);

        let count = recipes
            .add_recipe_to_shopping_list(&id, &inventory, &mut shopping)
            .unwrap();
        assert_eq!(count, 0);
        assert!(shopping.is_empty());
    }

    #[test]
    fn test_absent_ingredient_defaults_to_other() {
        let inventory = stocked_inventory();
        let mut shopping = ShoppingListManager::new();
        let mut recipes = RecipeManager::new();
        let id = recipes.add_recipe(
            NewRecipe::new("Buttered Eggs")
                .with_ingredient(RecipeIngredient::new("Eggs", 2.0, "count"))
                .with_ingredient(RecipeIngredient::new("Butter", 2.0, "tbsp")),
        );

        assert!(!recipes.available_recipes(&inventory)[0].can_make);

        let count = recipes
            .add_recipe_to_shopping_list(&id, &inventory, &mut shopping)
            .unwrap();
        assert_eq!(count, 1);

        let butter = shopping.find_by_name("Butter").unwrap();
        assert_eq!(butter.quantity, 2.0);
        assert_eq!(butter.unit, "tbsp");
        assert_eq!(butter.category, Category::Other);
        assert!(!butter.checked);
        assert_eq!(butter.notes.as_deref(), Some("For Buttered Eggs"));
    }

    #[test]
    fn test_shortfall_uses_inventory_category() {
        let inventory = stocked_inventory();
        let mut recipes = RecipeManager::new();
        let id = recipes.add_recipe(
            NewRecipe::new("Tomato Salad")
                .with_ingredient(RecipeIngredient::new("Tomatoes", 3.0, "count")),
        );

        let missing = recipes.missing_ingredients(&id, &inventory).unwrap();
        assert_eq!(
            missing,
            [MissingIngredient {
                name: "Tomatoes".to_string(),
                quantity: 1.0,
                unit: "count".to_string(),
                category: Category::Produce,
            }]
        );
    }

    #[test]
    fn test_shortfall_merges_into_existing_entry() {
        let inventory = stocked_inventory();
        let mut shopping = ShoppingListManager::new();
        let existing = shopping.add_item(NewShoppingListItem::new(
            "tomatoes",
            4.0,
            "count",
            Category::Produce,
        ));
        let mut recipes = RecipeManager::new();
        let id = recipes.add_recipe(
            NewRecipe::new("Tomato Salad")
                .with_ingredient(RecipeIngredient::new("Tomatoes", 3.0, "count")),
        );

        let count = recipes
            .add_recipe_to_shopping_list(&id, &inventory, &mut shopping)
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(shopping.len(), 1);
        let item = shopping.get(&existing).unwrap();
        assert_eq!(item.quantity, 5.0);
        assert_eq!(item.notes, None);
    }

    #[test]
    fn test_unknown_recipe_is_not_found_and_modifies_nothing() {
        let inventory = stocked_inventory();
        let mut shopping = ShoppingListManager::new();
        shopping.add_item(NewShoppingListItem::new("Bread", 1.0, "loaf", Category::Grains));
        let inventory_before = inventory.items().to_vec();
        let shopping_before = shopping.items().to_vec();
        let recipes = RecipeManager::new();

        let err = recipes
            .add_recipe_to_shopping_list("missing", &inventory, &mut shopping)
            .unwrap_err();

        assert_eq!(
            err,
            PantryError::NotFound {
                id: "missing".to_string()
            }
        );
        assert_eq!(inventory.items(), inventory_before.as_slice());
        assert_eq!(shopping.items(), shopping_before.as_slice());
    }

    #[test]
    fn test_optional_ingredients_never_block_or_get_shopped() {
        let inventory = stocked_inventory();
        let mut shopping = ShoppingListManager::new();
        let mut recipes = RecipeManager::new();
        let id = recipes.add_recipe(
            NewRecipe::new("Fancy Eggs")
                .with_ingredient(RecipeIngredient::new("Eggs", 3.0, "count"))
                .with_ingredient(RecipeIngredient::new("Truffle", 1.0, "g").optional())
                .with_ingredient(RecipeIngredient::new("Milk", 5.0, "L").optional()),
        );

        assert!(recipes.available_recipes(&inventory)[0].can_make);
        assert!(recipes.missing_ingredients(&id, &inventory).unwrap().is_empty());
        assert_eq!(
            recipes
                .add_recipe_to_shopping_list(&id, &inventory, &mut shopping)
                .unwrap(),
            0
        );
        assert!(shopping.is_empty());
    }

    #[test]
    fn test_ingredient_order_is_kept_on_shopping_list() {
        let inventory = InventoryManager::default();
        let mut shopping = ShoppingListManager::new();
        let mut recipes = RecipeManager::new();
        let id = recipes.add_recipe(
            NewRecipe::new("Egg Salad Sandwich")
                .with_ingredient(RecipeIngredient::new("Eggs", 4.0, "count"))
                .with_ingredient(RecipeIngredient::new("Bread", 4.0, "slices"))
                .with_ingredient(RecipeIngredient::new("Mayonnaise", 3.0, "tbsp")),
        );

        let count = recipes
            .add_recipe_to_shopping_list(&id, &inventory, &mut shopping)
            .unwrap();

        assert_eq!(count, 3);
        let names: Vec<_> = shopping.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Eggs", "Bread", "Mayonnaise"]);
    }
}
