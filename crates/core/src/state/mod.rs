pub mod inventory;
pub mod pantry;
pub mod recipes;
pub mod seed;
pub mod shopping;

pub use inventory::InventoryManager;
pub use pantry::{Pantry, PantrySnapshot, PantrySummary};
pub use recipes::{can_make, RecipeManager};
pub use shopping::{MergeOutcome, ShoppingListManager};
