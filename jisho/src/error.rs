use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "client")]
    #[error("could not construct http client: {0}")]
    BuildClient(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("fetch error: {0}")]
    Fetch(String),
    #[error("could not find element using selector: {0}")]
    MissingElement(&'static str),
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
    /// The results page could not be fetched or parsed, so no links are salvageable.
    #[error("unable to retrieve links")]
    LinkExtraction(#[source] Option<Box<Error>>),
    /// A single word in a batch failed, which invalidates the whole batch.
    #[error("unable to retrieve word list")]
    WordListExtraction {
        /// The detail page url of the word that failed.
        url: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns `true` if this is a [`Error::LinkExtraction`].
    #[must_use]
    pub const fn is_link_extraction(&self) -> bool {
        matches!(self, Error::LinkExtraction(_))
    }

    /// Returns `true` if this is a [`Error::WordListExtraction`].
    #[must_use]
    pub const fn is_word_list_extraction(&self) -> bool {
        matches!(self, Error::WordListExtraction { .. })
    }
}
