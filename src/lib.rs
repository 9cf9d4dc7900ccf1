pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod providers;
pub mod view;

pub use config::AppConfig;
pub use controller::{SearchController, SearchState, NO_RESULTS_MESSAGE, SEARCH_FAILED_MESSAGE};
pub use error::SearchError;
pub use model::{IngredientLine, RecipeDetail, RecipeSummary, QUICK_INGREDIENTS};
pub use providers::{MealDbProvider, RecipeSource};

/// Search recipes by ingredient with the loaded configuration
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = recipe_ideas::search_recipes("chicken").await?;
/// for recipe in recipes {
///     println!("{} ({})", recipe.name, recipe.id);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(ingredient: &str) -> Result<Vec<RecipeSummary>, SearchError> {
    let provider = MealDbProvider::new(&AppConfig::load()?)?;
    provider.search_by_ingredient(ingredient).await
}

/// Look up a single recipe by id with the loaded configuration
pub async fn lookup_recipe(id: &str) -> Result<Option<RecipeDetail>, SearchError> {
    let provider = MealDbProvider::new(&AppConfig::load()?)?;
    provider.lookup(id).await
}
