//! Sense qualifiers attached to a single definition.
//!
//! A definition's qualifiers live in the `<span class="supplemental_info">` that follows its
//! meaning text. Each qualifier is a `<span class="sense-tag">`; cross references to related
//! words are rendered the same way but carry `tag-see_also` or `tag-antonym`.

use scraper::ElementRef;

use crate::Sense;
use crate::dom;

/// Class of the qualifier container.
pub const SUPPLEMENTAL_INFO_CLASS: &str = "supplemental_info";
/// Class of a single qualifier.
pub const SENSE_TAG_CLASS: &str = "sense-tag";
/// Classes of qualifiers that only reference other words.
pub const CROSS_REFERENCE_CLASSES: &[&str] = &["tag-see_also", "tag-antonym"];

/// Returns the qualifier container following the meaning text `meaning`, if any.
#[must_use]
pub fn supplemental_info(meaning: ElementRef<'_>) -> Option<ElementRef<'_>> {
    dom::next_element_siblings(meaning)
        .find(|sibling| dom::has_class(*sibling, SUPPLEMENTAL_INFO_CLASS))
}

/// Returns the senses in the qualifier container `info`.
///
/// Cross references are left out. If the container is absent, has no qualifiers, or leads with a
/// cross reference, the whole container is treated as a reference annotation and nothing is
/// returned.
#[must_use]
pub fn extract(info: Option<ElementRef<'_>>) -> Vec<Sense> {
    let Some(info) = info else {
        return Vec::new();
    };
    let tags: Vec<ElementRef<'_>> = dom::child_elements(info)
        .filter(|child| dom::has_class(*child, SENSE_TAG_CLASS))
        .collect();

    if tags.first().is_none_or(|first| is_cross_reference(*first)) {
        return Vec::new();
    }

    tags.into_iter()
        .filter(|tag| !is_cross_reference(*tag))
        .map(dom::trimmed_text)
        .filter(|text| !text.is_empty())
        .map(Sense::new)
        .collect()
}

fn is_cross_reference(tag: ElementRef<'_>) -> bool {
    CROSS_REFERENCE_CLASSES
        .iter()
        .any(|class| dom::has_class(tag, class))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::dom::{Queryable, selector};

    fn senses(definition: &str) -> Vec<String> {
        let html = Html::parse_fragment(definition);
        let meaning = html
            .select_first(&selector(".meaning-meaning").unwrap())
            .expect("meaning");

        extract(supplemental_info(meaning))
            .into_iter()
            .map(|sense| sense.text)
            .collect()
    }

    #[test]
    fn test_qualifiers() {
        let senses = senses(
            r#"<div class="meaning-definition">
                 <span class="meaning-meaning">to eat</span><span>&#8203;</span>
                 <span class="supplemental_info"><span class="sense-tag tag-tag">Usually written using kana alone</span>, <span class="sense-tag tag-info">  colloquial  </span></span>
               </div>"#,
        );

        assert_eq!(senses, vec!["Usually written using kana alone", "colloquial"]);
    }

    #[test]
    fn test_cross_references_are_skipped() {
        let senses = senses(
            r#"<div class="meaning-definition">
                 <span class="meaning-meaning">to eat</span>
                 <span class="supplemental_info"><span class="sense-tag tag-restriction">Only applies to 食べる</span>, <span class="sense-tag tag-antonym">Antonym: <a href="/search/x">飲む</a></span></span>
               </div>"#,
        );

        assert_eq!(senses, vec!["Only applies to 食べる"]);
    }

    #[test]
    fn test_leading_cross_reference_discards_all() {
        let senses = senses(
            r#"<div class="meaning-definition">
                 <span class="meaning-meaning">to live on</span>
                 <span class="supplemental_info"><span class="sense-tag tag-see_also">See also <a href="/search/x">食う</a></span>, <span class="sense-tag tag-tag">Colloquialism</span></span>
               </div>"#,
        );

        assert!(senses.is_empty());
    }

    #[test]
    fn test_empty_container() {
        let senses = senses(
            r#"<div class="meaning-definition">
                 <span class="meaning-meaning">school</span><span class="supplemental_info"></span>
               </div>"#,
        );

        assert!(senses.is_empty());
    }

    #[test]
    fn test_missing_container() {
        let senses = senses(
            r#"<div class="meaning-definition"><span class="meaning-meaning">school</span><span>&#8203;</span></div>"#,
        );

        assert!(senses.is_empty());
    }
}
