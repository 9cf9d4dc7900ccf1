use crate::config::AppConfig;
use crate::error::SearchError;
use crate::model::{
    MealDetailRecord, MealSummaryRecord, MealsEnvelope, RecipeDetail, RecipeSummary,
};
use crate::providers::RecipeSource;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// TheMealDB-backed recipe source
pub struct MealDbProvider {
    client: Client,
    base_url: String,
}

impl MealDbProvider {
    /// Create a new provider from configuration
    pub fn new(config: &AppConfig) -> Result<Self, SearchError> {
        Url::parse(&config.base_url)
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(MealDbProvider {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let config = AppConfig {
            base_url: base_url.into(),
            ..Default::default()
        };
        Self::new(&config)
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        param: &str,
    ) -> Result<Vec<T>, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} i={:?}", url, param);

        let response = self
            .client
            .get(&url)
            .query(&[("i", param)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: MealsEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeSource for MealDbProvider {
    fn source_name(&self) -> &str {
        "themealdb"
    }

    async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, SearchError> {
        let meals: Vec<MealSummaryRecord> = self.get_meals("filter.php", ingredient).await?;
        debug!("{} recipes for {:?}", meals.len(), ingredient);
        Ok(meals.into_iter().map(RecipeSummary::from).collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>, SearchError> {
        let meals: Vec<MealDetailRecord> = self.get_meals("lookup.php", id).await?;
        Ok(meals.into_iter().next().map(RecipeDetail::from))
    }
}
