//! # Pantry Core
//!
//! In-memory state for a household food manager: what is in the pantry,
//! what is on the shopping list and which recipes can be made.
//!
//! ## Architecture
//!
//! - `models` - Entity types shared by all managers
//! - `state/` - The inventory, shopping list and recipe managers, and the
//!   [`Pantry`] context that owns them
//! - `config` - Tunables (expiry window, seeding)
//! - `error` - [`PantryError`]
//!
//! The recipe manager reads the inventory and writes into the shopping list.
//! Neither of those depends back on recipes.
//!
//! ## Usage
//!
//! ```rust
//! use pantry_core::{Pantry, PantryConfig};
//!
//! let mut pantry = Pantry::seeded(PantryConfig::default());
//! let salad = pantry.recipes().find_by_name("Tomato Salad").unwrap().id.clone();
//! let missing = pantry.add_recipe_to_shopping_list(&salad)?;
//! assert_eq!(missing, 2);
//! # Ok::<(), pantry_core::PantryError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod state;

pub use config::PantryConfig;
pub use error::{PantryError, Result};
pub use models::{
    AvailableRecipe, Category, InventoryItem, InventoryItemUpdate, MissingIngredient,
    NewInventoryItem, NewRecipe, NewShoppingListItem, ParseCategoryError, Recipe,
    RecipeIngredient, ShoppingListItem,
};
pub use state::{InventoryManager, Pantry, RecipeManager, ShoppingListManager};
