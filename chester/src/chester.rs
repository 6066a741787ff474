//! Runs the command-line commands against jisho.org.
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use jisho::{Extractor, Link, WordEntry};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::Error;
use crate::cli::Command;
use crate::config::Config;
use crate::http;

/// The name reported for input read from stdin.
const STDIN_NAME: &str = "<stdin>";

/// The links of a search results page, as printed by the `extract` command.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkList {
    /// The number of links.
    pub count: usize,
    /// The links in document order.
    pub links: Vec<Link>,
}

impl LinkList {
    /// Wraps `links` and counts them.
    #[must_use]
    pub fn new(links: Vec<Link>) -> LinkList {
        LinkList {
            count: links.len(),
            links,
        }
    }
}

/// Accepted input of the `word-list` command: either the output of `extract` or a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum LinkPayload {
    List(LinkList),
    Links(Vec<Link>),
}

impl From<LinkPayload> for Vec<Link> {
    fn from(payload: LinkPayload) -> Self {
        match payload {
            LinkPayload::List(list) => list.links,
            LinkPayload::Links(links) => links,
        }
    }
}

/// Decodes a JSON link payload.
///
/// # Errors
///
/// Returns [`Error::DecodeLinks`] if `json` is neither a link list nor an array of links.
pub fn decode_links(json: &str) -> Result<Vec<Link>, Error> {
    serde_json::from_str::<LinkPayload>(json)
        .map(Vec::from)
        .map_err(Error::DecodeLinks)
}

/// Reads the whole file at `path`.
///
/// # Errors
///
/// Returns [`Error::ReadInput`] if the file cannot be read.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.display().to_string(),
        source,
    })
}

/// Reads the whole of `stdin`.
///
/// # Errors
///
/// Returns [`Error::ReadInput`] if `stdin` cannot be read.
pub fn read_stdin<R: Read>(mut stdin: R) -> Result<String, Error> {
    let mut buf = String::new();

    stdin
        .read_to_string(&mut buf)
        .map_err(|source| Error::ReadInput {
            path: STDIN_NAME.to_string(),
            source,
        })?;

    Ok(buf)
}

/// Writes `value` as JSON to `out`, followed by a newline.
///
/// # Errors
///
/// Returns [`Error::Output`] if `value` cannot be serialized or `out` cannot be written to.
pub fn write_json<W, T>(mut out: W, value: &T, pretty: bool) -> Result<(), Error>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let result = if pretty {
        serde_json::to_writer_pretty(&mut out, value)
    } else {
        serde_json::to_writer(&mut out, value)
    };

    result.map_err(Error::Output)?;

    writeln!(out)
        .and_then(|()| out.flush())
        .map_err(|err| Error::Output(serde_json::Error::io(err)))
}

/// The word list extractor.
#[derive(Debug)]
pub struct Chester {
    /// The jisho.org client, which carries the configured extractor.
    client: jisho::Client,
}

impl Chester {
    /// Creates a new `Chester` from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BuildClient`] if the HTTP client cannot be built, or [`Error::Extractor`]
    /// if the extractor cannot be constructed.
    pub fn new(config: &Config) -> Result<Chester, Error> {
        let http_client = http::build_client(&config.http).map_err(Error::BuildClient)?;
        let extractor = Extractor::try_new()
            .map_err(Error::Extractor)?
            .with_excluded_categories(config.extraction.excluded_categories.iter().cloned());
        let client =
            jisho::Client::with_client(http_client, extractor).with_base_url(&config.http.base_url);

        Ok(Chester { client })
    }

    /// Returns the extractor used to parse pages.
    #[must_use]
    pub const fn extractor(&self) -> &Extractor {
        self.client.extractor()
    }

    /// Fetches the search results page at `page_link` and returns its links.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Links`] if the page cannot be fetched or parsed.
    pub async fn links(&self, page_link: &str) -> Result<LinkList, Error> {
        let links = self.client.links(page_link).await.map_err(Error::Links)?;

        info!(%page_link, count = links.len(), "extracted links");

        Ok(LinkList::new(links))
    }

    /// Returns the links of a saved search results page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Links`] if `html` is empty.
    pub fn links_from_html(&self, html: &str) -> Result<LinkList, Error> {
        let links = self.extractor().links(html).map_err(Error::Links)?;

        Ok(LinkList::new(links))
    }

    /// Fetches and extracts the detail page of every link, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WordList`] as soon as any word fails.
    pub async fn word_list(&self, links: &[Link]) -> Result<Vec<WordEntry>, Error> {
        let words = self.client.words(links).await.map_err(Error::WordList)?;

        info!(count = words.len(), "extracted words");

        Ok(words)
    }

    /// Searches for `query` and extracts every word on the first results page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Links`] if the results page fails, or [`Error::WordList`] if any word
    /// fails.
    pub async fn search(&self, query: &str) -> Result<Vec<WordEntry>, Error> {
        debug!(%query, "searching");

        let words = self.client.search(query).await.map_err(|err| {
            if err.is_link_extraction() {
                Error::Links(err)
            } else {
                Error::WordList(err)
            }
        })?;

        info!(count = words.len(), "extracted words");

        Ok(words)
    }

    /// Runs `command` and writes its JSON result to `out`.
    ///
    /// `word-list` reads its links from `stdin` when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the extraction fails or the output cannot be
    /// written.
    pub async fn run<R, W>(
        &self,
        command: &Command,
        pretty: bool,
        stdin: R,
        out: W,
    ) -> Result<(), Error>
    where
        R: Read,
        W: Write,
    {
        match command {
            Command::Extract(args) => {
                let list = match (&args.html, &args.page_link) {
                    (Some(path), _) => self.links_from_html(&read_input(path)?)?,
                    (None, Some(page_link)) => self.links(page_link).await?,
                    (None, None) => return Err(Error::MissingPage),
                };

                write_json(out, &list, pretty)
            }
            Command::WordList(args) => {
                let payload = match &args.links {
                    Some(path) => read_input(path)?,
                    None => read_stdin(stdin)?,
                };
                let links = decode_links(&payload)?;

                debug!(count = links.len(), "decoded links");

                let words = self.word_list(&links).await?;

                write_json(out, &words, pretty)
            }
            Command::Search(args) => {
                let words = self.search(&args.query()).await?;

                write_json(out, &words, pretty)
            }
        }
    }
}
