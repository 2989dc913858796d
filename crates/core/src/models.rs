//! # Pantry Models
//!
//! Entity types shared by the inventory, shopping list and recipe managers.
//! Every manager owns its own collection of these; nothing is shared by
//! reference across managers. Recipe ingredients are matched to inventory
//! items by name at query time, never by identity.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Grocery category used to group inventory and shopping list items
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq, Hash,
)]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Grains,
    Canned,
    Frozen,
    Beverages,
    Snacks,
    Condiments,
    /// Fallback bucket for anything without a known category
    #[default]
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> Vec<Category> {
        vec![
            Category::Produce,
            Category::Dairy,
            Category::Meat,
            Category::Grains,
            Category::Canned,
            Category::Frozen,
            Category::Beverages,
            Category::Snacks,
            Category::Condiments,
            Category::Other,
        ]
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Grains => "Grains",
            Category::Canned => "Canned",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::Condiments => "Condiments",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// An item stocked in the pantry
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    /// Never negative
    pub quantity: f64,
    pub unit: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    /// At or below this quantity the item counts as low stock
    pub low_stock_threshold: f64,
    pub added_date: DateTime<Utc>,
}

/// Data for a new inventory item (identity and added date are assigned on insert)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: Category,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    pub low_stock_threshold: f64,
}

impl NewInventoryItem {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        category: Category,
        low_stock_threshold: f64,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category,
            expiration_date: None,
            low_stock_threshold,
        }
    }

    /// Set the expiration date
    pub fn with_expiration(mut self, date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(date);
        self
    }
}

/// Partial update for an inventory item.
///
/// Each `Some` field replaces the stored value; `None` keeps it.
/// `expiration_date: Some(None)` clears the expiration date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<Category>,
    pub expiration_date: Option<Option<DateTime<Utc>>>,
    pub low_stock_threshold: Option<f64>,
    pub added_date: Option<DateTime<Utc>>,
}

impl InventoryItemUpdate {
    /// Shallow-merge this update over an existing item
    pub(crate) fn apply_to(self, item: &mut InventoryItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            item.unit = unit;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(expiration_date) = self.expiration_date {
            item.expiration_date = expiration_date;
        }
        if let Some(threshold) = self.low_stock_threshold {
            item.low_stock_threshold = threshold;
        }
        if let Some(added_date) = self.added_date {
            item.added_date = added_date;
        }
    }
}

/// An entry on the shopping list
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: Category,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Data for a new shopping list entry
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewShoppingListItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: Category,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewShoppingListItem {
    /// Create an unchecked entry without notes
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category,
            checked: false,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Optional ingredients never block a recipe and are never shopped for
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            optional: false,
        }
    }

    /// Mark this ingredient as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A recipe
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_favorite: bool,
}

impl Recipe {
    /// Total time in minutes
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Ingredients that must be on hand to make the recipe
    pub fn required_ingredients(&self) -> impl Iterator<Item = &RecipeIngredient> {
        self.ingredients.iter().filter(|i| !i.optional)
    }
}

/// Data for a new recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl NewRecipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            servings: 1,
            ..Default::default()
        }
    }

    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Set prep and cook time in minutes
    pub fn with_times(mut self, prep_time: u32, cook_time: u32) -> Self {
        self.prep_time = prep_time;
        self.cook_time = cook_time;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }
}

/// Shortfall between a recipe requirement and current inventory
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MissingIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: Category,
}

/// A recipe annotated with whether current inventory covers it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableRecipe<'a> {
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    pub can_make: bool,
}

/// Case-insensitive name comparison used for all cross-collection matching
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Clamp a quantity to zero, logging when the input was negative
pub(crate) fn non_negative(quantity: f64, name: &str) -> f64 {
    if quantity < 0.0 {
        tracing::warn!(name = %name, quantity, "Negative quantity clamped to zero");
        0.0
    } else {
        quantity
    }
}

/// Generate a unique entity ID (`{prefix}-{uuid}`)
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}
