//! Extraction of structured dictionary entries from [jisho.org](https://jisho.org) markup.
//!
//! The crate works in two stages. [`Extractor::links`] turns a search results page into a list of
//! [`Link`]s, and [`Extractor::entry`] turns a single word's detail page into a [`WordEntry`].
//! The [`fetch`] module drives both stages through an injected [`Fetch`] collaborator, and with
//! the `client` feature [`Client`] provides one backed by `reqwest`.

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

pub mod category;
#[cfg(feature = "client")]
pub mod client;
pub mod dom;
mod entry;
mod error;
mod extractor;
pub mod fetch;
mod links;
pub mod reading;
pub mod sense;
pub mod sentence;
pub mod types;

#[cfg(feature = "client")]
pub use client::Client;
pub use entry::preceding_tag;
pub use error::Error;
pub use extractor::Extractor;
pub use fetch::Fetch;
pub use types::{
    Category, Definition, ExampleSentence, Link, OtherForm, Sense, WordEntry,
};
