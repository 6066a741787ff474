//! Batch extraction through an injected page fetcher.
//!
//! The extractors never perform I/O themselves. [`extract_links`] and [`extract_words`] ask a
//! [`Fetch`] implementation for each page and feed the result to an [`Extractor`].

use async_trait::async_trait;
#[cfg(feature = "log")]
use tracing::{debug, warn};

use crate::{Error, Extractor, Link, WordEntry};

/// Retrieves the HTML of a page.
#[async_trait]
pub trait Fetch {
    /// Returns the body of the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page could not be retrieved.
    async fn fetch(&self, url: &str) -> Result<String, Error>;
}

/// Fetches the search results page at `page_url` and extracts its links.
///
/// # Errors
///
/// Returns [`Error::LinkExtraction`] if the page cannot be fetched or parsed.
pub async fn extract_links<F>(
    fetcher: &F,
    extractor: &Extractor,
    page_url: &str,
) -> Result<Vec<Link>, Error>
where
    F: Fetch + Sync + ?Sized,
{
    #[cfg(feature = "log")]
    debug!(%page_url, "fetching results page");

    let html = fetcher
        .fetch(page_url)
        .await
        .map_err(|err| Error::LinkExtraction(Some(Box::new(err))))?;
    let links = extractor.links(&html)?;

    #[cfg(feature = "log")]
    debug!(%page_url, count = links.len(), "extracted links");

    Ok(links)
}

/// Fetches and extracts the detail page of every link, in order.
///
/// Pages are fetched one at a time, and the first failure aborts the batch: no further pages are
/// requested and none of the entries extracted so far are returned. Callers that need partial
/// results should call [`Extractor::entry`] per word instead.
///
/// # Errors
///
/// Returns [`Error::WordListExtraction`] with the url of the failing page as soon as any page
/// cannot be fetched or extracted.
pub async fn extract_words<F>(
    fetcher: &F,
    extractor: &Extractor,
    links: &[Link],
) -> Result<Vec<WordEntry>, Error>
where
    F: Fetch + Sync + ?Sized,
{
    let mut entries = Vec::with_capacity(links.len());

    for link in links {
        let url = link.absolute_url();

        #[cfg(feature = "log")]
        debug!(%url, headword = link.headword(), "fetching word");

        let entry = fetcher
            .fetch(&url)
            .await
            .and_then(|html| extractor.entry(&html, link));

        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                #[cfg(feature = "log")]
                warn!(%url, error = %err, "word extraction failed, aborting batch");

                return Err(Error::WordListExtraction {
                    url,
                    source: Box::new(err),
                });
            }
        }
    }

    Ok(entries)
}
