//! # Pantry Errors
//!
//! Identity-based mutations on a missing id are silent no-ops. The only
//! operation that reports a missing identity is adding a recipe's missing
//! ingredients to the shopping list.

use thiserror::Error;

/// Errors surfaced by pantry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PantryError {
    /// The referenced recipe does not exist
    #[error("Recipe not found: {id}")]
    NotFound { id: String },
}

pub type Result<T> = std::result::Result<T, PantryError>;
