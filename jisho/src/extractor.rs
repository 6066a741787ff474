use scraper::Selector;

use crate::category::DEFAULT_EXCLUDED_CATEGORIES;
use crate::dom::selector;
use crate::{Category, Error};

/// Pre-compiled selectors for the search results and word detail pages.
#[derive(Debug)]
pub(crate) struct Selectors {
    /// A single row on the search results page.
    pub result_row: Selector,
    /// The headword text of a result row.
    pub row_text: Selector,
    /// The detail page anchor of a result row.
    pub row_link: Selector,
    /// The headword furigana container on a detail page.
    pub furigana: Selector,
    /// Native ruby reading annotation inside the furigana container.
    pub ruby_reading: Selector,
    /// A meaning block, preceded by its tag container if it has one.
    pub meaning_block: Selector,
    /// The meaning text inside a meaning block.
    pub meaning_text: Selector,
    /// The example sentence container.
    pub sentence: Selector,
    /// Plain text fragments of the example sentence.
    pub unlinked: Selector,
}

impl Selectors {
    fn try_new() -> Result<Selectors, Error> {
        Ok(Selectors {
            result_row: selector(".concept_light.clearfix")?,
            row_text: selector(".concept_light-representation > .text")?,
            row_link: selector("a.light-details_link[href]")?,
            furigana: selector(".concept_light-representation > .furigana")?,
            ruby_reading: selector("ruby rt")?,
            meaning_block: selector(".meanings-wrapper > .meaning-wrapper")?,
            meaning_text: selector(".meaning-meaning")?,
            sentence: selector(".sentence")?,
            unlinked: selector("ul .unlinked")?,
        })
    }
}

/// Extracts links and word entries from jisho.org markup.
///
/// An `Extractor` holds nothing but its compiled selectors and the set of categories whose
/// definitions are dropped, so a single instance can be shared across any number of documents.
#[derive(Debug)]
pub struct Extractor {
    pub(crate) selectors: Selectors,
    excluded_categories: Vec<String>,
}

impl Extractor {
    /// Constructs a new `Extractor` that excludes the default categories.
    ///
    /// # Panics
    ///
    /// Panics if one of the built-in selectors fails to parse. For a non-panicking version, see
    /// [`Extractor::try_new`].
    #[must_use]
    pub fn new() -> Extractor {
        Extractor::try_new().expect("could not compile selectors")
    }

    /// Attempts to construct a new `Extractor` that excludes the default categories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] if one of the built-in selectors fails to parse.
    pub fn try_new() -> Result<Extractor, Error> {
        let selectors = Selectors::try_new()?;
        let excluded_categories = DEFAULT_EXCLUDED_CATEGORIES
            .iter()
            .map(ToString::to_string)
            .collect();

        Ok(Extractor {
            selectors,
            excluded_categories,
        })
    }

    /// Replaces the set of excluded categories.
    ///
    /// A definition is dropped when the *first* of its categories is in this set.
    #[must_use]
    pub fn with_excluded_categories<I, S>(mut self, categories: I) -> Extractor
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the set of excluded categories.
    #[must_use]
    pub fn excluded_categories(&self) -> &[String] {
        &self.excluded_categories
    }

    /// Returns `true` if a definition with these categories should be dropped.
    ///
    /// Only the first category is inspected; `["Noun", "Place"]` is kept.
    #[must_use]
    pub fn is_excluded(&self, categories: &[Category]) -> bool {
        categories
            .first()
            .is_some_and(|first| self.excluded_categories.contains(&first.name))
    }
}

impl Default for Extractor {
    /// Creates a default `Extractor`.
    ///
    /// This is equivalent to calling [`Extractor::new`].
    fn default() -> Self {
        Self::new()
    }
}
