mod spoonacular;

pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;

use crate::model::{RecipeDetail, RecipeSummary};
use crate::FinderError;

/// Results requested per search
pub const RESULT_COUNT: u32 = 12;

/// Spoonacular ranking mode: 1 maximizes used ingredients
pub const RANKING: u8 = 1;

/// The two lookups the session needs from a recipe service
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Find recipes using a comma-joined ingredient list
    async fn find_by_ingredients(
        &self,
        api_key: &str,
        ingredients: &str,
    ) -> Result<Vec<RecipeSummary>, FinderError>;

    /// Fetch the full record for one recipe, without nutrition
    async fn recipe_information(
        &self,
        api_key: &str,
        recipe_id: u64,
    ) -> Result<RecipeDetail, FinderError>;
}
