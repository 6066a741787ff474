//! Assembly of a [`WordEntry`] from a word's detail page.
//!
//! The meanings of a word are rendered as a flat list of siblings inside
//! `<div class="meanings-wrapper">`, where a tag row only appears before the first meaning it
//! applies to:
//!
//! ```html
//! <div class="meanings-wrapper">
//!   <div class="meaning-tags">Ichidan verb, Transitive verb</div>
//!   <div class="meaning-wrapper">...to eat...</div>
//!   <div class="meaning-wrapper">...to live on...</div>
//!   <div class="meaning-tags">Other forms</div>
//!   <div class="meaning-wrapper">...喰べる 【たべる】...</div>
//! </div>
//! ```

use scraper::{ElementRef, Html};
#[cfg(feature = "log")]
use tracing::{debug, trace};

use crate::dom::{self, Queryable};
use crate::extractor::Extractor;
use crate::{Definition, Error, Link, OtherForm, WordEntry, category, sense};

/// Class of the tag container that precedes a meaning block.
pub const MEANING_TAGS_CLASS: &str = "meaning-tags";
/// Tag of the block listing alternate written forms.
pub const OTHER_FORMS_TAG: &str = "Other forms";
/// Tag of editorial notes, which are not definitions.
pub const NOTES_TAG: &str = "Notes";
/// Separator between alternate written forms.
pub const OTHER_FORMS_SEPARATOR: char = '、';

/// Returns the tag string of the meaning block `block`.
///
/// A block's tag is the trimmed text of the element immediately before it, when that element is
/// a `<div class="meaning-tags">`. Any other preceding element, or none at all, means the block
/// has no tag and an empty string is returned.
#[must_use]
pub fn preceding_tag(block: ElementRef<'_>) -> String {
    dom::prev_element_sibling(block)
        .filter(|prev| dom::has_class(*prev, MEANING_TAGS_CLASS))
        .map(dom::trimmed_text)
        .unwrap_or_default()
}

/// Splits the text of an "Other forms" block into its forms.
fn split_other_forms(text: &str) -> Vec<OtherForm> {
    text.split(OTHER_FORMS_SEPARATOR)
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(OtherForm::new)
        .collect()
}

impl Extractor {
    /// Parses the detail page `html` of `link` into a [`WordEntry`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if a meaning block has no meaning text.
    pub fn entry(&self, html: &str, link: &Link) -> Result<WordEntry, Error> {
        let document = Html::parse_document(html);

        self.entry_from(&document, link)
    }

    /// Builds a [`WordEntry`] for `link` from an already parsed page or fragment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if a meaning block has no meaning text.
    pub fn entry_from(&self, root: &impl Queryable, link: &Link) -> Result<WordEntry, Error> {
        let headword = link.headword().to_string();
        let reading = self.reading(root);
        let mut definitions = Vec::new();
        let mut other_forms = Vec::new();

        #[cfg(feature = "log")]
        trace!(%headword, ?reading, "assembling entry");

        for block in root.select_all(&self.selectors.meaning_block) {
            let tag = preceding_tag(block);

            if tag == NOTES_TAG {
                continue;
            }

            let meaning = block
                .select_first(&self.selectors.meaning_text)
                .ok_or(Error::MissingElement("span.meaning-meaning"))?;
            let senses = sense::extract(sense::supplemental_info(meaning));
            let text = dom::trimmed_text(meaning);

            if tag == OTHER_FORMS_TAG {
                other_forms = split_other_forms(&text);
                continue;
            }

            let categories = category::normalize(&tag);

            if self.is_excluded(&categories) {
                #[cfg(feature = "log")]
                debug!(%headword, %tag, "skipping excluded definition");

                continue;
            }

            definitions.push(Definition {
                text,
                senses,
                categories,
            });
        }

        let example_sentence = self.example_sentence(root);

        Ok(WordEntry {
            headword,
            reading,
            definitions,
            other_forms,
            example_sentence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector;
    use crate::{Category, Sense};

    fn link(text: &str) -> Link {
        Link::new("//jisho.org/word/test", text)
    }

    fn meanings(blocks: &str) -> String {
        format!(
            r#"<div class="concept_light-meanings"><div class="meanings-wrapper">{blocks}</div></div>"#
        )
    }

    fn block(meaning: &str) -> String {
        format!(
            r#"<div class="meaning-wrapper"><div class="meaning-definition zero-padding"><span class="meaning-definition-section_divider">1. </span><span class="meaning-meaning">{meaning}</span><span>&#8203;</span></div></div>"#
        )
    }

    fn tags(tags: &str) -> String {
        format!(r#"<div class="meaning-tags">{tags}</div>"#)
    }

    fn entry(html: &str) -> WordEntry {
        Extractor::new()
            .entry(html, &link("  語  "))
            .expect("entry")
    }

    #[test]
    fn test_preceding_tag() {
        let html = Html::parse_fragment(&meanings(&format!(
            "{}{}{}",
            tags(" Noun "),
            block("first"),
            block("second")
        )));
        let blocks = html.select_all(&selector(".meaning-wrapper").unwrap());

        assert_eq!(preceding_tag(blocks[0]), "Noun");
        assert_eq!(preceding_tag(blocks[1]), "");
    }

    #[test]
    fn test_preceding_tag_without_any_sibling() {
        let html = Html::parse_fragment(&meanings(&block("only")));
        let blocks = html.select_all(&selector(".meaning-wrapper").unwrap());

        assert_eq!(preceding_tag(blocks[0]), "");
    }

    #[test]
    fn test_headword_is_trimmed_link_text() {
        let entry = entry("<html><body></body></html>");

        assert_eq!(entry.headword, "語");
        assert_eq!(entry.reading, None);
        assert!(entry.definitions.is_empty());
        assert!(entry.other_forms.is_empty());
        assert_eq!(entry.example_sentence, None);
    }

    #[test]
    fn test_untagged_block_is_kept_without_categories() {
        let entry = entry(&meanings(&format!(
            "{}{}{}",
            tags("Ichidan verb, Transitive verb"),
            block("to eat"),
            block("to live on")
        )));

        assert_eq!(
            entry.definitions,
            vec![
                Definition {
                    text: "to eat".to_string(),
                    senses: vec![],
                    categories: vec![
                        Category::new("Ichidan verb"),
                        Category::new("Transitive verb")
                    ],
                },
                Definition {
                    text: "to live on".to_string(),
                    senses: vec![],
                    categories: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_excluded_first_category_drops_definition() {
        let entry = entry(&meanings(&format!(
            "{}{}{}{}{}{}",
            tags("Noun, used as a suffix, Place"),
            block("Gakkou (place)"),
            tags("Wikipedia definition"),
            block("School"),
            tags("Noun, Place"),
            block("school")
        )));

        assert_eq!(entry.definitions.len(), 1);
        assert_eq!(entry.definitions[0].text, "school");
        assert_eq!(
            entry.definitions[0].categories,
            vec![Category::new("Noun"), Category::new("Place")]
        );
    }

    #[test]
    fn test_other_forms_and_notes() {
        let entry = entry(&meanings(&format!(
            "{}{}{}{}{}{}",
            tags("Noun"),
            block("school"),
            tags("Other forms"),
            block("學校 【がっこう】、 学校 【がつこう】"),
            tags("Notes"),
            block("學校: Out-dated kanji.")
        )));

        assert_eq!(entry.definitions.len(), 1);
        assert_eq!(
            entry.other_forms,
            vec![
                OtherForm::new("學校 【がっこう】"),
                OtherForm::new("学校 【がつこう】")
            ]
        );
    }

    #[test]
    fn test_last_other_forms_block_wins() {
        let entry = entry(&meanings(&format!(
            "{}{}{}{}",
            tags("Other forms"),
            block("一"),
            tags("Other forms"),
            block("学校、がっこう")
        )));

        assert!(entry.definitions.is_empty());
        assert_eq!(
            entry.other_forms,
            vec![OtherForm::new("学校"), OtherForm::new("がっこう")]
        );
    }

    #[test]
    fn test_senses_are_attached() {
        let entry = entry(&meanings(&format!(
            r#"{}<div class="meaning-wrapper"><div class="meaning-definition zero-padding"><span class="meaning-meaning">to eat</span><span>&#8203;</span><span class="supplemental_info"><span class="sense-tag tag-tag">Usually written using kana alone</span></span></div></div>"#,
            tags("Ichidan verb")
        )));

        assert_eq!(
            entry.definitions[0].senses,
            vec![Sense::new("Usually written using kana alone")]
        );
    }

    #[test]
    fn test_missing_meaning_text() {
        let html = meanings(&format!(
            r#"{}<div class="meaning-wrapper"><div class="meaning-definition"></div></div>"#,
            tags("Noun")
        ));
        let result = Extractor::new().entry(&html, &link("x"));

        assert!(matches!(result, Err(Error::MissingElement(_))));
    }

    #[test]
    fn test_entries_do_not_share_state() {
        let extractor = Extractor::new();
        let first = meanings(&format!(
            "{}{}{}{}",
            tags("Noun"),
            block("school"),
            tags("Other forms"),
            block("學校")
        ));
        let second = meanings(&format!("{}{}", tags("Noun"), block("river")));

        let first = extractor.entry(&first, &link("学校")).expect("first");
        let second = extractor.entry(&second, &link("川")).expect("second");

        assert_eq!(first.definitions.len(), 1);
        assert_eq!(first.other_forms.len(), 1);
        assert_eq!(second.definitions.len(), 1);
        assert_eq!(second.definitions[0].text, "river");
        assert!(second.other_forms.is_empty());
    }

    #[test]
    fn test_split_other_forms() {
        assert_eq!(
            split_other_forms(" 学校、がっこう 、"),
            vec![OtherForm::new("学校"), OtherForm::new("がっこう")]
        );
    }
}
