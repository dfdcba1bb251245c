pub mod api;
pub mod config;
pub mod credential;
pub mod display;
pub mod error;
pub mod inventory;
pub mod markup;
pub mod model;
pub mod session;

pub use api::{RecipeApi, SpoonacularClient};
pub use crate::config::FinderConfig;
pub use error::FinderError;
pub use inventory::{AddOutcome, Inventory};
pub use model::{ExtendedIngredient, RecipeDetail, RecipeSummary};
pub use session::{Message, SearchOutcome, SearchPhase, SearchRequest, Session};

use log::debug;

/// Find recipes for a list of ingredients with a fresh session
///
/// Duplicate and blank ingredients are skipped. Configuration (base URL,
/// timeout) is loaded the same way the binary loads it.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = use_it_up::find_recipes("your-api-key", &["chicken", "rice"]).await?;
/// for recipe in recipes {
///     println!("{}", recipe.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_recipes(
    api_key: &str,
    ingredients: &[&str],
) -> Result<Vec<RecipeSummary>, FinderError> {
    let config = FinderConfig::load()?;
    let client = SpoonacularClient::new(&config)?;
    find_recipes_with(&client, api_key, ingredients).await
}

/// Same as [`find_recipes`] against a caller-supplied API
pub async fn find_recipes_with(
    api: &dyn RecipeApi,
    api_key: &str,
    ingredients: &[&str],
) -> Result<Vec<RecipeSummary>, FinderError> {
    let mut session = Session::new();
    for ingredient in ingredients {
        if let Err(FinderError::DuplicateItem(item)) = session.add_item(ingredient) {
            debug!("Skipping duplicate ingredient '{}'", item);
        }
    }
    session.set_api_key(api_key);
    session.save_api_key();

    session.search(api).await?;
    Ok(session.results().to_vec())
}

/// Fetch the full record for one recipe
pub async fn recipe_details(api_key: &str, recipe_id: u64) -> Result<RecipeDetail, FinderError> {
    let config = FinderConfig::load()?;
    let client = SpoonacularClient::new(&config)?;

    let mut session = Session::new();
    session.set_api_key(api_key);
    session.open_recipe(&client, recipe_id).await.cloned()
}
