//! Layered configuration

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::consts;

/// The complete application configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// HTTP client settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    /// The website to search, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// The `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum duration of a single request
    #[serde(default = "default_http_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

/// Log output settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Filter directives used when `RUST_LOG` is not set
    #[serde(default = "default_tracing_filter")]
    pub filter: String,
    /// Emit logs as JSON
    #[serde(default)]
    pub json: bool,
}

/// Extraction settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Definitions whose first category is one of these are dropped
    #[serde(default = "default_excluded_categories")]
    pub excluded_categories: Vec<String>,
}

impl Config {
    /// Loads the configuration from the defaults, then the TOML file at `path` if it exists, then
    /// environment variables prefixed with `CHESTER_`.
    ///
    /// Nested keys are separated with a double underscore, e.g. `CHESTER_HTTP__TIMEOUT=10s`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, figment::Error> {
        Config::figment(path).extract()
    }

    /// Returns the layered configuration sources.
    #[must_use]
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout: default_http_timeout(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        TracingConfig {
            filter: default_tracing_filter(),
            json: false,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            excluded_categories: default_excluded_categories(),
        }
    }
}

/// Returns the default website.
#[must_use]
pub fn default_base_url() -> String {
    consts::JISHO_BASE_URL.to_string()
}

/// Returns the default `User-Agent` header.
#[must_use]
pub fn default_user_agent() -> String {
    consts::HTTP_USER_AGENT.to_string()
}

/// Returns the default request timeout.
#[must_use]
pub const fn default_http_timeout() -> Duration {
    consts::HTTP_TIMEOUT
}

/// Returns the default tracing filter.
#[must_use]
pub fn default_tracing_filter() -> String {
    consts::DEFAULT_TRACING_FILTER.to_string()
}

/// Returns the categories excluded by default.
#[must_use]
pub fn default_excluded_categories() -> Vec<String> {
    jisho::category::DEFAULT_EXCLUDED_CATEGORIES
        .iter()
        .map(ToString::to_string)
        .collect()
}
