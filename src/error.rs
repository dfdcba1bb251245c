use thiserror::Error;

/// Errors that can occur while managing the inventory or talking to the recipe API
#[derive(Error, Debug)]
pub enum FinderError {
    /// The normalized ingredient is already in the inventory
    #[error("This item is already in your inventory!")]
    DuplicateItem(String),

    /// Search was requested with nothing in the inventory
    #[error("Please add at least one ingredient to your inventory!")]
    EmptyInventory,

    /// Search was requested without an API key
    #[error("Please enter your Spoonacular API key!")]
    MissingCredential,

    /// The API rejected the key (HTTP 401)
    #[error("Invalid API key. Please check your Spoonacular API key.")]
    InvalidCredential,

    /// The account ran out of quota (HTTP 402)
    #[error("API quota exceeded. Please check your Spoonacular account.")]
    QuotaExceeded,

    /// Any other non-success HTTP status
    #[error("Error: {status} - {reason}")]
    UpstreamError { status: u16, reason: String },

    /// A search is already in flight for this session
    #[error("A search is already in progress")]
    SearchInProgress,

    /// A search result arrived with no search in flight
    #[error("No search is in progress")]
    NotSearching,

    /// Loading a single recipe's detail failed
    #[error("Error loading recipe details: {0}")]
    DetailFetchFailed(String),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FinderError {
    /// Map a non-success search status onto the error taxonomy
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            401 => FinderError::InvalidCredential,
            402 => FinderError::QuotaExceeded,
            code => FinderError::UpstreamError {
                status: code,
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            },
        }
    }
}
