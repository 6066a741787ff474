//! Application constants

use std::time::Duration;

/// The `User-Agent` header to send when issuing HTTP requests.
pub const HTTP_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/mkroman/chester)"
);

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The website words are looked up on.
pub const JISHO_BASE_URL: &str = "https://jisho.org";

/// The default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "chester=info,jisho=info";

/// The default path of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "chester.toml";

/// The prefix of environment variables that override the configuration.
pub const ENV_PREFIX: &str = "CHESTER_";
