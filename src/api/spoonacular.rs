use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::api::{RecipeApi, RANKING, RESULT_COUNT};
use crate::config::FinderConfig;
use crate::model::{RecipeDetail, RecipeSummary};
use crate::FinderError;

pub struct SpoonacularClient {
    client: Client,
    base_url: String,
}

impl SpoonacularClient {
    /// Create a client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }

        Ok(SpoonacularClient {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        SpoonacularClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self, api_key: &str, ingredients: &str) -> String {
        format!(
            "{}/recipes/findByIngredients?apiKey={}&ingredients={}&number={}&ranking={}&ignorePantry=false",
            self.base_url,
            urlencoding::encode(api_key),
            urlencoding::encode(ingredients),
            RESULT_COUNT,
            RANKING
        )
    }

    fn detail_url(&self, api_key: &str, recipe_id: u64) -> String {
        format!(
            "{}/recipes/{}/information?apiKey={}&includeNutrition=false",
            self.base_url,
            recipe_id,
            urlencoding::encode(api_key)
        )
    }
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        api_key: &str,
        ingredients: &str,
    ) -> Result<Vec<RecipeSummary>, FinderError> {
        debug!("Searching recipes for ingredients: {}", ingredients);
        let response = self
            .client
            .get(self.search_url(api_key, ingredients))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recipe search failed with status {}", status);
            return Err(FinderError::from_status(status));
        }

        let body = response.text().await?;
        let recipes: Vec<RecipeSummary> =
            serde_json::from_str(&body).map_err(|e| FinderError::InvalidResponse(e.to_string()))?;
        debug!("Recipe search returned {} results", recipes.len());
        Ok(recipes)
    }

    async fn recipe_information(
        &self,
        api_key: &str,
        recipe_id: u64,
    ) -> Result<RecipeDetail, FinderError> {
        debug!("Fetching details for recipe {}", recipe_id);
        let response = self
            .client
            .get(self.detail_url(api_key, recipe_id))
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(
                "Recipe {} detail fetch failed with status {}",
                recipe_id,
                response.status()
            );
            return Err(FinderError::DetailFetchFailed(
                "Failed to load recipe details".to_string(),
            ));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FinderError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_search_url_encodes_ingredients() {
        let client = SpoonacularClient::with_base_url("https://api.example.com/");
        let url = client.search_url("key", "chicken,olive oil");
        assert_eq!(
            url,
            "https://api.example.com/recipes/findByIngredients?apiKey=key&ingredients=chicken%2Colive%20oil&number=12&ranking=1&ignorePantry=false"
        );
    }

    #[test]
    fn test_detail_url_excludes_nutrition() {
        let client = SpoonacularClient::with_base_url("https://api.example.com");
        assert_eq!(
            client.detail_url("key", 42),
            "https://api.example.com/recipes/42/information?apiKey=key&includeNutrition=false"
        );
    }

    #[tokio::test]
    async fn test_find_by_ingredients() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()),
                Matcher::UrlEncoded("ingredients".into(), "chicken,rice".into()),
                Matcher::UrlEncoded("number".into(), "12".into()),
                Matcher::UrlEncoded("ranking".into(), "1".into()),
                Matcher::UrlEncoded("ignorePantry".into(), "false".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id": 1, "title": "Chicken Rice", "image": "x.jpg",
                    "usedIngredientCount": 2, "missedIngredientCount": 1}]"#,
            )
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url(server.url());
        let recipes = client
            .find_by_ingredients("fake_api_key", "chicken,rice")
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Chicken Rice");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_by_ingredients_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"not": "an array"}"#)
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url(server.url());
        let result = client.find_by_ingredients("key", "egg").await;
        assert!(matches!(result, Err(FinderError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_recipe_information_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/7/information")
            .match_query(Matcher::UrlEncoded(
                "includeNutrition".into(),
                "false".into(),
            ))
            .with_status(404)
            .create_async()
            .await;

        let client = SpoonacularClient::with_base_url(server.url());
        let result = client.recipe_information("key", 7).await;
        match result {
            Err(FinderError::DetailFetchFailed(message)) => {
                assert_eq!(message, "Failed to load recipe details")
            }
            other => panic!("Expected DetailFetchFailed, got {:?}", other),
        }
        mock.assert_async().await;
    }
}
