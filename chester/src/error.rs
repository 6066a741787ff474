//! Error types

use miette::Diagnostic;
use thiserror::Error;

/// Application errors for configuration, input and extraction.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(
        code(chester::config),
        help("check the config file and any CHESTER_ environment variables")
    )]
    LoadConfig(#[source] Box<figment::Error>),
    /// Failed to create the HTTP client.
    #[error("Could not create HTTP client")]
    #[diagnostic(code(chester::http_client))]
    BuildClient(#[source] reqwest::Error),
    /// An input file could not be read.
    #[error("Could not read input from {path}")]
    #[diagnostic(code(chester::read_input))]
    ReadInput {
        /// The path of the input, `<stdin>` for standard input.
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Neither a page link nor a saved page was given.
    #[error("No results page given")]
    #[diagnostic(
        code(chester::missing_page),
        help("pass a search results url, or a saved page with --html <file>")
    )]
    MissingPage,
    /// The link payload is not a JSON list of links.
    #[error("Could not decode links")]
    #[diagnostic(
        code(chester::decode_links),
        help(r#"expected a JSON array like [{{"url": "//jisho.org/word/...", "text": "..."}}]"#)
    )]
    DecodeLinks(#[source] serde_json::Error),
    /// The output could not be serialized or written.
    #[error("Could not write output")]
    #[diagnostic(code(chester::output))]
    Output(#[source] serde_json::Error),
    /// The extractor could not be constructed.
    #[error("Could not create extractor")]
    #[diagnostic(code(chester::extractor))]
    Extractor(#[source] jisho::Error),
    /// The links of a results page could not be extracted.
    #[error("Unable to retrieve links")]
    #[diagnostic(code(chester::links))]
    Links(#[source] jisho::Error),
    /// A word list could not be extracted.
    #[error("Unable to retrieve word list")]
    #[diagnostic(code(chester::word_list))]
    WordList(#[source] jisho::Error),
}
