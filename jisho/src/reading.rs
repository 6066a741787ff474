//! Reconstruction of a headword's kana reading from furigana markup.
//!
//! Jisho typesets furigana in one of two ways. Newer pages wrap the reading in native ruby
//! annotation:
//!
//! ```html
//! <span class="furigana"><ruby><rb>日本</rb><rt>にほん</rt></ruby></span>
//! <span class="text">日本</span>
//! ```
//!
//! Most pages instead render one furigana span per character of the headword, leaving the spans
//! over kana empty and putting the kana themselves in the text span:
//!
//! ```html
//! <span class="furigana"><span>た</span><span></span><span></span></span>
//! <span class="text">食<span>べ</span><span>る</span></span>
//! ```
//!
//! The reading is rebuilt by inserting every non-empty furigana span into the kana sequence at
//! its own position.

use scraper::ElementRef;

use crate::dom::{self, Queryable};
use crate::extractor::Extractor;

impl Extractor {
    /// Returns the reading of the headword in `root`.
    ///
    /// Returns `None` if `root` has no furigana container at all. A container that yields no
    /// text gives `Some("")`.
    pub fn reading(&self, root: &impl Queryable) -> Option<String> {
        let furigana = root.select_first(&self.selectors.furigana)?;
        let ruby: Vec<ElementRef<'_>> = furigana.select_all(&self.selectors.ruby_reading);

        let reading = if ruby.is_empty() {
            interleave(furigana)
        } else {
            ruby.into_iter().map(dom::element_text).collect()
        };

        Some(reading.trim().to_string())
    }
}

/// Rebuilds the reading by splicing furigana into the plain kana spans by position.
fn interleave(furigana: ElementRef<'_>) -> String {
    let mut reading: Vec<String> = dom::sibling_elements(furigana)
        .next()
        .map(|text| spans(text).map(dom::trimmed_text).collect())
        .unwrap_or_default();

    for (index, span) in spans(furigana).enumerate() {
        let kana = dom::trimmed_text(span);

        if !kana.is_empty() {
            reading.insert(index.min(reading.len()), kana);
        }
    }

    reading.concat()
}

/// Returns the `<span>` children of `elem`.
fn spans(elem: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    dom::child_elements(elem).filter(|child| dom::is_tag(*child, "span"))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn reading(representation: &str) -> Option<String> {
        let html = Html::parse_fragment(&format!(
            r#"<div class="concept_light-representation">{representation}</div>"#
        ));

        Extractor::new().reading(&html)
    }

    #[test]
    fn test_furigana_over_every_kanji() {
        let reading = reading(
            r#"<span class="furigana">
                 <span class="kanji-2-up kanji">がっ</span><span class="kanji-1-up kanji">こう</span>
               </span>
               <span class="text">学校</span>"#,
        );

        assert_eq!(reading.as_deref(), Some("がっこう"));
    }

    #[test]
    fn test_furigana_interleaved_with_okurigana() {
        let reading = reading(
            r#"<span class="furigana"><span class="kanji-1-up kanji">た</span><span></span><span></span></span>
               <span class="text">食<span>べ</span><span>る</span></span>"#,
        );

        assert_eq!(reading.as_deref(), Some("たべる"));
    }

    #[test]
    fn test_furigana_between_kana() {
        let reading = reading(
            r#"<span class="furigana"><span></span><span class="kanji-1-up kanji">さけ</span></span>
               <span class="text"><span>お</span>酒</span>"#,
        );

        assert_eq!(reading.as_deref(), Some("おさけ"));
    }

    #[test]
    fn test_ruby_annotation_is_used_verbatim() {
        let reading = reading(
            r#"<span class="furigana"><ruby class="furigana-justify"><rb>日本</rb><rt>にほん</rt></ruby></span>
               <span class="text">日本</span>"#,
        );

        assert_eq!(reading.as_deref(), Some("にほん"));
    }

    #[test]
    fn test_ruby_annotations_are_concatenated() {
        let reading = reading(
            r#"<span class="furigana"><ruby><rb>日</rb><rt>に</rt></ruby><ruby><rb>本</rb><rt>ほん</rt></ruby><ruby><rb>語</rb><rp>(</rp><rt>ご</rt><rp>)</rp></ruby></span>
               <span class="text">日本語</span>"#,
        );

        assert_eq!(reading.as_deref(), Some("にほんご"));
    }

    #[test]
    fn test_kana_only_word() {
        let reading = reading(
            r#"<span class="furigana"><span></span><span></span><span></span></span>
               <span class="text"><span>する</span></span>"#,
        );

        assert_eq!(reading.as_deref(), Some("する"));
    }

    #[test]
    fn test_empty_furigana_is_not_absent() {
        let reading = reading(r#"<span class="furigana"></span><span class="text"></span>"#);

        assert_eq!(reading.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_furigana() {
        assert_eq!(reading(r#"<span class="text">川</span>"#), None);
    }
}
