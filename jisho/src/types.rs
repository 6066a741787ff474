//! Structured types
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The scheme used to resolve scheme-relative links.
const DEFAULT_SCHEME: &str = "https:";

/// A candidate word reference taken from a search results page
///
/// # HTML Source
/// Parsed from a `<div class="concept_light clearfix">` row
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Link {
    /// Scheme-relative path of the word's detail page
    ///
    /// Examples: `//jisho.org/word/%E5%AD%A6%E6%A0%A1`
    ///
    /// Found in the `href` attribute of `<a class="light-details_link">`
    pub url: String,

    /// Raw display text of the headword, including any surrounding whitespace
    ///
    /// Found in `<span class="text">` inside the row's representation
    pub text: String,
}

/// A part-of-speech or usage label attached to a definition
///
/// Examples: "Noun", "Ichidan verb", "Noun, used as a suffix"
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Category {
    /// The trimmed label, first letter capitalized
    pub name: String,
}

/// A qualifier narrowing the context a definition applies to
///
/// Examples: "Usually written using kana alone", "Colloquialism"
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sense {
    /// The trimmed qualifier text
    pub text: String,
}

/// One meaning of a word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Definition {
    /// The meaning itself
    ///
    /// Parsed from `<span class="meaning-meaning">`
    pub text: String,
    /// Qualifiers restricting the meaning, excluding cross references
    pub senses: Vec<Sense>,
    /// Categories from the preceding `<div class="meaning-tags">`, may be empty
    pub categories: Vec<Category>,
}

/// An alternate written form of the headword
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OtherForm {
    /// Examples: `學校 【がっこう】`
    pub text: String,
}

/// An example sentence using the word, with its translation
///
/// # HTML Source
/// Parsed from the first `<div class="sentence">` on a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExampleSentence {
    /// The Japanese sentence, terminated with `。`
    pub sentence: String,
    /// The translation
    pub translation: String,
}

/// The complete structured record for a single word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordEntry {
    /// The trimmed link text of the word
    pub headword: String,
    /// The kana reading, or `None` when the page has no furigana at all
    pub reading: Option<String>,
    /// Every retained definition, in document order
    pub definitions: Vec<Definition>,
    /// Alternate written forms, empty if the page lists none
    pub other_forms: Vec<OtherForm>,
    /// An example sentence, if the page has one
    pub example_sentence: Option<ExampleSentence>,
}

impl Link {
    /// Constructs a new `Link`.
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Link {
        Link {
            url: url.into(),
            text: text.into(),
        }
    }

    /// Returns the url of the detail page with a scheme.
    ///
    /// Scheme-relative urls (`//jisho.org/...`) are resolved against `https:`, anything else is
    /// returned as-is.
    #[must_use]
    pub fn absolute_url(&self) -> String {
        if self.url.starts_with("//") {
            format!("{DEFAULT_SCHEME}{}", self.url)
        } else {
            self.url.clone()
        }
    }

    /// Returns the display text without surrounding whitespace.
    #[must_use]
    pub fn headword(&self) -> &str {
        self.text.trim()
    }
}

impl Category {
    /// Constructs a new `Category`.
    pub fn new(name: impl Into<String>) -> Category {
        Category { name: name.into() }
    }
}

impl Sense {
    /// Constructs a new `Sense`.
    pub fn new(text: impl Into<String>) -> Sense {
        Sense { text: text.into() }
    }
}

impl OtherForm {
    /// Constructs a new `OtherForm`.
    pub fn new(text: impl Into<String>) -> OtherForm {
        OtherForm { text: text.into() }
    }
}
