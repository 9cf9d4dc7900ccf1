mod mealdb;

pub use mealdb::MealDbProvider;

use crate::error::SearchError;
use crate::model::{RecipeDetail, RecipeSummary};
use async_trait::async_trait;

/// Backend that can answer ingredient searches and recipe lookups
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "themealdb")
    fn source_name(&self) -> &str;

    /// Find recipes that use `ingredient`, in the order the backend returns them.
    ///
    /// An empty list means the backend answered but had nothing to offer.
    async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, SearchError>;

    /// Fetch the full record for `id`, or `None` when the backend knows no such recipe
    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, SearchError>;
}
