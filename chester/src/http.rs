//! HTTP features

use reqwest::ClientBuilder;

use crate::config::HttpConfig;

/// Returns an HTTP client builder configured from `config`.
pub fn builder(config: &HttpConfig) -> ClientBuilder {
    ClientBuilder::new()
        .gzip(true)
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
}

/// Builds an HTTP client configured from `config`.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(config: &HttpConfig) -> Result<reqwest::Client, reqwest::Error> {
    builder(config).build()
}
