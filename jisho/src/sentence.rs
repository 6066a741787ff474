//! Example sentences.

use crate::ExampleSentence;
use crate::dom::{self, Queryable};
use crate::extractor::Extractor;

/// Full-width period appended to a non-empty sentence.
pub const FULL_STOP: char = '。';

impl Extractor {
    /// Returns the first example sentence in `root`, if there is one.
    ///
    /// The sentence is built from the plain text fragments (`.unlinked`) of the sentence's word
    /// list, leaving out furigana. The translation is the text of the container's last element.
    pub fn example_sentence(&self, root: &impl Queryable) -> Option<ExampleSentence> {
        let container = root.select_first(&self.selectors.sentence)?;
        let translation = dom::child_elements(container)
            .last()
            .map(dom::trimmed_text)
            .unwrap_or_default();
        let fragments: String = container
            .select_all(&self.selectors.unlinked)
            .into_iter()
            .map(dom::element_text)
            .collect();
        let mut sentence = fragments.trim().to_string();

        if !sentence.is_empty() {
            sentence.push(FULL_STOP);
        }

        Some(ExampleSentence {
            sentence,
            translation,
        })
    }
}
