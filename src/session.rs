use log::{debug, info, warn};

use crate::api::RecipeApi;
use crate::credential::Credential;
use crate::inventory::{AddOutcome, Inventory};
use crate::model::{RecipeDetail, RecipeSummary};
use crate::FinderError;

pub const NO_MATCHES_NOTICE: &str =
    "No recipes found with these ingredients. Try adding more items!";

/// Where the session is in the search lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Succeeded,
    Failed,
}

/// The single visible message slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Error(String),
    /// Informational, e.g. a search that matched nothing
    Notice(String),
}

impl Message {
    pub fn text(&self) -> &str {
        match self {
            Message::Error(text) | Message::Notice(text) => text,
        }
    }
}

/// What a completed search produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NoMatches,
}

/// Everything needed to run one search request, captured at `begin_search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub api_key: String,
    pub ingredients: String,
}

/// State container for one user's session
///
/// All mutation goes through `&mut self`. Searching is split into
/// [`Session::begin_search`] and [`Session::finish_search`] so a front end can
/// run the request outside the borrow; [`Session::search`] does both.
#[derive(Debug, Default)]
pub struct Session {
    inventory: Inventory,
    credential: Credential,
    results: Vec<RecipeSummary>,
    phase: SearchPhase,
    message: Option<Message>,
    selected: Option<RecipeDetail>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, raw: &str) -> Result<AddOutcome, FinderError> {
        self.inventory.add_item(raw)
    }

    pub fn remove_item(&mut self, item: &str) -> bool {
        self.inventory.remove_item(item)
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.credential.set_key(key);
    }

    /// Save the typed key; hides the key form and clears the message
    pub fn save_api_key(&mut self) -> bool {
        let saved = self.credential.save();
        if saved {
            self.message = None;
        }
        saved
    }

    pub fn show_credential_form(&mut self) {
        self.credential.show_form();
    }

    /// Check preconditions and move into `Searching`
    pub fn begin_search(&mut self) -> Result<SearchRequest, FinderError> {
        if self.phase == SearchPhase::Searching {
            debug!("Search requested while another is in flight");
            return Err(FinderError::SearchInProgress);
        }

        if self.inventory.is_empty() {
            return Err(self.reject(FinderError::EmptyInventory));
        }

        if self.credential.is_blank() {
            self.credential.show_form();
            return Err(self.reject(FinderError::MissingCredential));
        }

        self.phase = SearchPhase::Searching;
        self.message = None;
        self.results.clear();

        Ok(SearchRequest {
            api_key: self.credential.key().to_string(),
            ingredients: self.inventory.joined(),
        })
    }

    /// Apply the result of the request started by `begin_search`
    pub fn finish_search(
        &mut self,
        result: Result<Vec<RecipeSummary>, FinderError>,
    ) -> Result<SearchOutcome, FinderError> {
        if self.phase != SearchPhase::Searching {
            warn!("Discarding search result received in {:?} phase", self.phase);
            return Err(FinderError::NotSearching);
        }

        match result {
            Ok(recipes) => {
                self.phase = SearchPhase::Succeeded;
                self.results = recipes;
                if self.results.is_empty() {
                    info!("Search matched no recipes");
                    self.message = Some(Message::Notice(NO_MATCHES_NOTICE.to_string()));
                    Ok(SearchOutcome::NoMatches)
                } else {
                    info!("Search found {} recipes", self.results.len());
                    Ok(SearchOutcome::Found(self.results.len()))
                }
            }
            Err(e) => {
                self.phase = SearchPhase::Failed;
                warn!("Search failed: {}", e);
                Err(self.reject(e))
            }
        }
    }

    /// Abandon the search started by `begin_search`, back to `Idle`
    ///
    /// Returns false if no search was in flight. A result that arrives later
    /// is rejected by `finish_search`.
    pub fn cancel_search(&mut self) -> bool {
        if self.phase != SearchPhase::Searching {
            return false;
        }
        info!("Search cancelled");
        self.phase = SearchPhase::Idle;
        true
    }

    /// Run one search against `api` for the current inventory
    ///
    /// Dropping the returned future before it completes cancels the search.
    pub async fn search(&mut self, api: &dyn RecipeApi) -> Result<SearchOutcome, FinderError> {
        let request = self.begin_search()?;
        let guard = SearchGuard { session: self };
        let result = api
            .find_by_ingredients(&request.api_key, &request.ingredients)
            .await;
        guard.finish(result)
    }

    /// Fetch and select one recipe. On failure the current selection stays.
    pub async fn open_recipe(
        &mut self,
        api: &dyn RecipeApi,
        recipe_id: u64,
    ) -> Result<&RecipeDetail, FinderError> {
        let detail = api
            .recipe_information(self.credential.key(), recipe_id)
            .await
            .map_err(|e| match e {
                FinderError::DetailFetchFailed(_) => e,
                other => FinderError::DetailFetchFailed(other.to_string()),
            })?;

        debug!("Selected recipe {} ({})", recipe_id, detail.title);
        let selected: &RecipeDetail = self.selected.insert(detail);
        Ok(selected)
    }

    pub fn close_recipe(&mut self) {
        self.selected = None;
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn selected(&self) -> Option<&RecipeDetail> {
        self.selected.as_ref()
    }

    fn reject(&mut self, error: FinderError) -> FinderError {
        self.message = Some(Message::Error(error.to_string()));
        error
    }
}

/// Cancels the search if `Session::search` is dropped mid-request
struct SearchGuard<'a> {
    session: &'a mut Session,
}

impl SearchGuard<'_> {
    fn finish(
        mut self,
        result: Result<Vec<RecipeSummary>, FinderError>,
    ) -> Result<SearchOutcome, FinderError> {
        self.session.finish_search(result)
    }
}

impl Drop for SearchGuard<'_> {
    fn drop(&mut self) {
        self.session.cancel_search();
    }
}
