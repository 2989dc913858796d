//! Pantry CLI
//!
//! Seeds an in-memory pantry, runs one command against it and prints the
//! result. Nothing is persisted between runs.

mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry_core::{
    Category, InventoryItem, MissingIngredient, NewInventoryItem, NewRecipe, NewShoppingListItem,
    Pantry, PantryConfig, Recipe, ShoppingListItem,
};
use render::Format;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Clone)]
#[command(author, version, about = "Pantry - Household inventory, shopping list and recipes")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Days ahead that count as expiring soon
    #[arg(long, global = true)]
    expiring_days: Option<i64>,
    /// Start from an empty pantry instead of the example data
    #[arg(long, global = true)]
    empty: bool,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Show dashboard counts (default)
    Summary,
    /// List inventory items
    Inventory {
        /// Only show this category
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// List items at or below their low-stock threshold
    LowStock,
    /// List items expiring soon
    Expiring,
    /// Show the shopping list
    Shopping,
    /// List recipes and whether they can be made
    Recipes {
        /// Only show favorites
        #[arg(long)]
        favorites: bool,
    },
    /// Show what a recipe is missing
    Missing {
        /// Recipe ID or name
        recipe: String,
    },
    /// Add a recipe's missing ingredients to the shopping list
    ShopFor {
        /// Recipe ID or name
        recipe: String,
    },
    /// Print every collection as JSON
    Dump,
    /// Print the JSON schema of the data model
    Schema,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Overlay command-line flags on a base configuration
fn apply_flags(args: &Args, mut config: PantryConfig) -> PantryConfig {
    if let Some(days) = args.expiring_days {
        config = config.with_expiring_soon_days(days);
    }
    if args.empty {
        config = config.without_seed();
    }
    config
}

/// Resolve a recipe argument given as an ID or a name
fn resolve_recipe(pantry: &Pantry, recipe: &str) -> String {
    let recipes = pantry.recipes();
    recipes
        .get(recipe)
        .or_else(|| recipes.find_by_name(recipe))
        .map(|r| r.id.clone())
        .unwrap_or_else(|| recipe.to_string())
}

fn recipe_name(pantry: &Pantry, id: &str) -> String {
    pantry
        .recipes()
        .get(id)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn print_schema() -> Result<()> {
    let schema = serde_json::json!({
        "InventoryItem": schemars::schema_for!(InventoryItem),
        "NewInventoryItem": schemars::schema_for!(NewInventoryItem),
        "ShoppingListItem": schemars::schema_for!(ShoppingListItem),
        "NewShoppingListItem": schemars::schema_for!(NewShoppingListItem),
        "Recipe": schemars::schema_for!(Recipe),
        "NewRecipe": schemars::schema_for!(NewRecipe),
        "MissingIngredient": schemars::schema_for!(MissingIngredient),
    });
    render::print_json(&schema)
}

fn run(args: Args, config: PantryConfig) -> Result<()> {
    let format = Format::from_flag(args.json);
    tracing::debug!(?config, "Loaded configuration");

    let mut pantry = Pantry::from_config(config);

    match args.command.unwrap_or(CliCommand::Summary) {
        CliCommand::Summary => render::summary(format, &pantry.summary()),
        CliCommand::Inventory { category } => match category {
            Some(category) => {
                let items: Vec<_> = pantry.inventory().get_items_by_category(category).collect();
                render::inventory(format, &format!("{} items", category), &items)
            }
            None => {
                let items: Vec<_> = pantry.inventory().items().iter().collect();
                render::inventory(format, "Inventory", &items)
            }
        },
        CliCommand::LowStock => {
            render::inventory(format, "Low stock", &pantry.inventory().low_stock_items())
        }
        CliCommand::Expiring => {
            render::inventory(format, "Expiring soon", &pantry.inventory().expiring_soon())
        }
        CliCommand::Shopping => render::shopping(format, pantry.shopping().items()),
        CliCommand::Recipes { favorites } => {
            let mut recipes = pantry.available_recipes();
            if favorites {
                recipes.retain(|r| r.recipe.is_favorite);
            }
            render::recipes(format, &recipes)
        }
        CliCommand::Missing { recipe } => {
            let id = resolve_recipe(&pantry, &recipe);
            let missing = pantry.missing_ingredients(&id)?;
            render::missing(format, &recipe_name(&pantry, &id), &missing)
        }
        CliCommand::ShopFor { recipe } => {
            let id = resolve_recipe(&pantry, &recipe);
            let count = pantry.add_recipe_to_shopping_list(&id)?;
            if format == Format::Text {
                println!(
                    "Added {} missing ingredient(s) for {}",
                    count,
                    recipe_name(&pantry, &id)
                );
            }
            render::shopping(format, pantry.shopping().items())
        }
        CliCommand::Dump => render::print_json(&pantry.snapshot()),
        CliCommand::Schema => print_schema(),
    }
}

fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_logging(args.verbose);

    let config = apply_flags(&args, PantryConfig::from_env()?);
    run(args, config)
}
