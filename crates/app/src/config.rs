//! Application configuration read from environment variables.

use rickdex_client::api::DEFAULT_ENDPOINT;
use rickdex_core::error::CoreError;
use rickdex_core::locale::Locale;
use rickdex_view::render::text::MAX_GRID_COLUMNS;
use rickdex_view::render::{OutputFormat, DEFAULT_GRID_COLUMNS};

pub const ENV_API_URL: &str = "CHARACTER_API_URL";
pub const ENV_LOCALE: &str = "RICKDEX_LOCALE";
pub const ENV_OUTPUT: &str = "RICKDEX_OUTPUT";
pub const ENV_GRID_COLUMNS: &str = "RICKDEX_GRID_COLUMNS";

/// Application configuration loaded from environment variables.
///
/// Every field has a default, so an empty environment is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Character-list endpoint.
    pub api_url: String,
    pub locale: Locale,
    pub output: OutputFormat,
    /// Cards per row in the text grid.
    pub grid_columns: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_ENDPOINT.to_string(),
            locale: Locale::default(),
            output: OutputFormat::default(),
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A value did not match any accepted variant.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// A variable was set to an empty string.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    /// A numeric variable was not a number in the accepted range.
    #[error("{var} must be an integer between {min} and {max}, got '{value}'")]
    OutOfRange {
        var: &'static str,
        value: String,
        min: usize,
        max: usize,
    },
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                      |
    /// |------------------------|----------------------------------------------|
    /// | `CHARACTER_API_URL`    | `https://rickandmortyapi.com/api/character`  |
    /// | `RICKDEX_LOCALE`       | `en` (`en` or `es`)                          |
    /// | `RICKDEX_OUTPUT`       | `text` (`text` or `html`)                    |
    /// | `RICKDEX_GRID_COLUMNS` | `3` (1 to 8)                                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = match lookup(ENV_API_URL) {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::Empty { var: ENV_API_URL })
            }
            Some(url) => url.trim().to_string(),
            None => defaults.api_url,
        };

        let locale = match lookup(ENV_LOCALE) {
            Some(v) => Locale::from_str_value(&v)?,
            None => defaults.locale,
        };

        let output = match lookup(ENV_OUTPUT) {
            Some(v) => OutputFormat::from_str_value(&v)?,
            None => defaults.output,
        };

        let grid_columns = match lookup(ENV_GRID_COLUMNS) {
            Some(v) => parse_columns(&v)?,
            None => defaults.grid_columns,
        };

        Ok(Self {
            api_url,
            locale,
            output,
            grid_columns,
        })
    }
}

fn parse_columns(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_GRID_COLUMNS).contains(n))
        .ok_or_else(|| ConfigError::OutOfRange {
            var: ENV_GRID_COLUMNS,
            value: value.to_string(),
            min: 1,
            max: MAX_GRID_COLUMNS,
        })
}
