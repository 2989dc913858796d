//! # Terminal Rendering
//!
//! Plain-text and JSON output for the `pantry` commands.

use anyhow::{Context, Result};
use pantry_core::state::PantrySummary;
use pantry_core::{AvailableRecipe, InventoryItem, MissingIngredient, ShoppingListItem};
use serde::Serialize;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub fn summary(format: Format, summary: &PantrySummary) -> Result<()> {
    if format == Format::Json {
        return print_json(summary);
    }

    println!("Pantry");
    println!("  Items in stock:    {}", summary.inventory_items);
    println!("  Low stock:         {}", summary.low_stock);
    println!("  Expiring soon:     {}", summary.expiring_soon);
    println!("  To buy:            {}", summary.to_buy);
    println!(
        "  Recipes:           {} ({} makeable, {} favorite)",
        summary.recipes, summary.makeable_recipes, summary.favorite_recipes
    );
    Ok(())
}

pub fn inventory(format: Format, title: &str, items: &[&InventoryItem]) -> Result<()> {
    if format == Format::Json {
        return print_json(items);
    }

    println!("{} ({})", title, items.len());
    for item in items {
        let expires = item
            .expiration_date
            .map(|d| format!(", expires {}", d.format("%Y-%m-%d")))
            .unwrap_or_default();
        println!(
            "  {:<16} {:>8} {:<6} [{}]{}",
            item.name, item.quantity, item.unit, item.category, expires
        );
    }
    Ok(())
}

pub fn shopping(format: Format, items: &[ShoppingListItem]) -> Result<()> {
    if format == Format::Json {
        return print_json(items);
    }

    println!("Shopping list ({})", items.len());
    for item in items {
        let mark = if item.checked { "x" } else { " " };
        let notes = item
            .notes
            .as_deref()
            .map(|n| format!("  ({})", n))
            .unwrap_or_default();
        println!(
            "  [{}] {:<16} {:>8} {:<6} [{}]{}",
            mark, item.name, item.quantity, item.unit, item.category, notes
        );
    }
    Ok(())
}

pub fn recipes(format: Format, recipes: &[AvailableRecipe<'_>]) -> Result<()> {
    if format == Format::Json {
        return print_json(recipes);
    }

    println!("Recipes ({})", recipes.len());
    for entry in recipes {
        let recipe = entry.recipe;
        let status = if entry.can_make { "ready" } else { "missing" };
        let star = if recipe.is_favorite { " *" } else { "" };
        println!(
            "  {:<22} {:<8} {} min, serves {}{}",
            recipe.name,
            status,
            recipe.total_time(),
            recipe.servings,
            star
        );
    }
    Ok(())
}

pub fn missing(format: Format, recipe: &str, missing: &[MissingIngredient]) -> Result<()> {
    if format == Format::Json {
        return print_json(missing);
    }

    if missing.is_empty() {
        println!("Everything for {} is in stock", recipe);
        return Ok(());
    }

    println!("Missing for {} ({})", recipe, missing.len());
    for ingredient in missing {
        println!(
            "  {:<16} {:>8} {:<6} [{}]",
            ingredient.name, ingredient.quantity, ingredient.unit, ingredient.category
        );
    }
    Ok(())
}
