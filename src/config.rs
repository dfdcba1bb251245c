use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Settings for talking to the recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// API key (can also be set via SPOONACULAR_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the recipe API (overridden in tests and for proxies)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: None,
        }
    }
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with USEITUP__ prefix
    /// 2. use-it-up.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: USEITUP__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config("use-it-up")
    }

    /// Key from config, falling back to SPOONACULAR_API_KEY
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from the named file (extension optional) layered under
/// USEITUP__ environment variables
pub fn load_config(file_name: &str) -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_name).required(false))
        .add_source(
            Environment::with_prefix("USEITUP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
