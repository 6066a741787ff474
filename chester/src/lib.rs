//! Extracts structured Japanese word lists from jisho.org search results.
pub mod cli;
pub mod config;
pub mod consts;
mod chester;
mod error;
pub mod http;
pub mod tracing;

pub use chester::{Chester, LinkList, decode_links, read_input, read_stdin, write_json};
pub use config::Config;
pub use error::Error;
