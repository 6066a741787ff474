//! A client for the Jisho dictionary website (jisho.org).
//!
//! This module provides a high-level async interface for fetching search results and word detail
//! pages and parsing them into structured data.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::ClientBuilder;
#[cfg(feature = "log")]
use tracing::debug;
use url::Url;

use crate::fetch::{self, Fetch};
use crate::{Error, Extractor, Link, WordEntry};

/// The base URL of the dictionary.
const BASE_URL: &str = "https://jisho.org";
/// The path segment of the search endpoint.
const SEARCH_SEGMENT: &str = "search";
/// The duration before a request times out.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An asynchronous client for jisho.org.
///
/// This client handles the construction of HTTP requests, sending them to the website, and
/// parsing the HTML responses with its [`Extractor`].
#[derive(Debug)]
pub struct Client {
    /// The base URL of the website.
    base_url: String,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
    /// The extractor used to parse responses.
    extractor: Extractor,
}

impl Client {
    /// Constructs a new `Client` with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built. This can happen in environments with
    /// misconfigured network or TLS dependencies. For a non-panicking version, see
    /// [`Client::try_new`].
    #[must_use]
    pub fn new() -> Client {
        Client::try_new().expect("could not construct http client")
    }

    /// Attempts to construct a new `Client` with default settings.
    ///
    /// This is the fallible version of [`Client::new`]. It configures the client with gzip
    /// support and a 30-second timeout.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::BuildClient`] if the underlying `reqwest` client fails to build, or
    /// [`Error::InvalidSelector`] if the extractor cannot be constructed.
    pub fn try_new() -> Result<Client, Error> {
        let client = ClientBuilder::new()
            .gzip(true)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(Error::BuildClient)?;
        let extractor = Extractor::try_new()?;

        Ok(Self::with_client(client, extractor))
    }

    /// Constructs a `Client` using a pre-configured `reqwest::Client` and [`Extractor`].
    ///
    /// This is useful if you want to share an HTTP client between multiple services or require
    /// custom configuration (e.g., proxies, custom headers, excluded categories).
    #[must_use]
    pub fn with_client(client: reqwest::Client, extractor: Extractor) -> Client {
        let base_url = String::from(BASE_URL);

        Client {
            base_url,
            client,
            extractor,
        }
    }

    /// Replaces the base URL used to build search URLs.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Client {
        self.base_url = base_url.into();
        self
    }

    /// Returns the extractor used to parse responses.
    #[must_use]
    pub const fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Returns the URL of the search results page for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL cannot be parsed or cannot have a path.
    pub fn search_url(&self, query: &str) -> Result<String, Error> {
        let mut url = Url::parse(&self.base_url)?;

        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([SEARCH_SEGMENT, query]);

        Ok(url.into())
    }

    /// Fetches the search results page at `page_url` and returns its links.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LinkExtraction`] if the page cannot be fetched or parsed.
    pub async fn links(&self, page_url: &str) -> Result<Vec<Link>, Error> {
        fetch::extract_links(self, &self.extractor, page_url).await
    }

    /// Fetches and extracts the detail page of every link, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WordListExtraction`] if any single word fails.
    pub async fn words(&self, links: &[Link]) -> Result<Vec<WordEntry>, Error> {
        fetch::extract_words(self, &self.extractor, links).await
    }

    /// Searches for `query` and extracts every word on the first results page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LinkExtraction`] if the results page fails, or
    /// [`Error::WordListExtraction`] if any word fails.
    pub async fn search(&self, query: &str) -> Result<Vec<WordEntry>, Error> {
        let page_url = self
            .search_url(query)
            .map_err(|err| Error::LinkExtraction(Some(Box::new(err))))?;
        let links = self.links(&page_url).await?;

        self.words(&links).await
    }
}

#[async_trait]
impl Fetch for Client {
    async fn fetch(&self, url: &str) -> Result<String, Error> {
        #[cfg(feature = "log")]
        debug!(%url, "requesting page");

        let response = self.client.get(url).send().await.map_err(Error::Request)?;

        match response.error_for_status() {
            Ok(response) => response.text().await.map_err(Error::Request),
            Err(err) => Err(Error::Request(err)),
        }
    }
}

impl Default for Client {
    /// Creates a default `Client` instance.
    ///
    /// This is equivalent to calling [`Client::new`].
    fn default() -> Self {
        Self::new()
    }
}
