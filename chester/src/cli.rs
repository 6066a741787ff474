//! Command-line arguments

use std::path::PathBuf;

use argh::FromArgs;

use crate::consts;

/// Extract structured word lists from jisho.org
#[derive(Debug, FromArgs)]
pub struct Opts {
    /// path to config file
    #[argh(option, default = "String::from(consts::DEFAULT_CONFIG_PATH)")]
    pub config_path: String,
    /// pretty-print JSON output
    #[argh(switch)]
    pub pretty: bool,
    /// the command to run
    #[argh(subcommand)]
    pub command: Command,
}

/// The command to run.
#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(subcommand)]
pub enum Command {
    /// Print the links of a search results page.
    Extract(ExtractArgs),
    /// Print the words of a list of links.
    WordList(WordListArgs),
    /// Print the words of a search.
    Search(SearchArgs),
}

/// Extract the word links from a search results page
#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(subcommand, name = "extract")]
pub struct ExtractArgs {
    /// url of the search results page
    #[argh(positional)]
    pub page_link: Option<String>,
    /// read the search results page from a file instead
    #[argh(option)]
    pub html: Option<PathBuf>,
}

/// Extract every word in a JSON list of links
#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(subcommand, name = "word-list")]
pub struct WordListArgs {
    /// path to a JSON file of links as printed by `extract`, read from stdin when omitted
    #[argh(positional)]
    pub links: Option<PathBuf>,
}

/// Search jisho.org and extract every word on the first results page
#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(subcommand, name = "search")]
pub struct SearchArgs {
    /// the search query, e.g. "#words #n5"
    #[argh(positional, greedy)]
    pub query: Vec<String>,
}

impl SearchArgs {
    /// Returns the query words joined by spaces.
    #[must_use]
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}
