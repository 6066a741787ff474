use scraper::{ElementRef, Html};
#[cfg(feature = "log")]
use tracing::trace;

use crate::dom::Queryable;
use crate::extractor::Extractor;
use crate::{Error, Link};

impl Extractor {
    /// Parses a search results page into the links of its result rows, in document order.
    ///
    /// Rows without a detail page link are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LinkExtraction`] if `html` is empty.
    pub fn links(&self, html: &str) -> Result<Vec<Link>, Error> {
        if html.trim().is_empty() {
            return Err(Error::LinkExtraction(None));
        }

        let document = Html::parse_document(html);

        Ok(self.links_from(&document))
    }

    /// Returns the links of the result rows in an already parsed page or fragment.
    pub fn links_from(&self, root: &impl Queryable) -> Vec<Link> {
        root.select_all(&self.selectors.result_row)
            .into_iter()
            .filter_map(|row| self.row_link(row))
            .collect()
    }

    fn row_link(&self, row: ElementRef<'_>) -> Option<Link> {
        let url = row
            .select_first(&self.selectors.row_link)
            .and_then(|anchor| anchor.attr("href"))
            .filter(|href| !href.trim().is_empty())?;
        let text = row.text_of(&self.selectors.row_text).unwrap_or_default();

        #[cfg(feature = "log")]
        trace!(%url, text = text.trim(), "found link");

        Some(Link::new(url, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str, anchor: &str) -> String {
        format!(
            r#"<div class="concept_light clearfix">
                 <div class="concept_light-wrapper columns zero-padding">
                   <div class="concept_light-readings japanese japanese_gothic" lang="ja">
                     <div class="concept_light-representation">
                       <span class="furigana"><span class="kanji-1-up kanji">かわ</span></span>
                       <span class="text">{text}</span>
                     </div>
                   </div>
                 </div>
                 <div class="concept_light-meanings medium-9 columns"></div>
                 {anchor}
               </div>"#
        )
    }

    fn anchor(href: &str) -> String {
        format!(r#"<a href="{href}" class="light-details_link">Details ▸</a>"#)
    }

    #[test]
    fn test_links_in_document_order() {
        let html = format!(
            "<html><body>{}{}</body></html>",
            row("\n  川\n", &anchor("//jisho.org/word/%E5%B7%9D")),
            row("山", &anchor("//jisho.org/word/%E5%B1%B1"))
        );
        let links = Extractor::new().links(&html).expect("links");

        assert_eq!(
            links,
            vec![
                Link::new("//jisho.org/word/%E5%B7%9D", "\n  川\n"),
                Link::new("//jisho.org/word/%E5%B1%B1", "山"),
            ]
        );
    }

    #[test]
    fn test_rows_without_link_are_skipped() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            row("川", ""),
            row("山", &anchor("//jisho.org/word/%E5%B1%B1")),
            row("木", r#"<a class="light-details_link" href="">Details ▸</a>"#)
        );
        let links = Extractor::new().links(&html).expect("links");

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].headword(), "山");
    }

    #[test]
    fn test_row_without_text() {
        let html = r#"<div class="concept_light clearfix"><a class="light-details_link" href="//jisho.org/word/x">Details</a></div>"#;
        let links = Extractor::new().links(html).expect("links");

        assert_eq!(links, vec![Link::new("//jisho.org/word/x", "")]);
    }

    #[test]
    fn test_page_without_rows() {
        let links = Extractor::new()
            .links("<html><body><p>No matches</p></body></html>")
            .expect("links");

        assert!(links.is_empty());
    }

    #[test]
    fn test_empty_page() {
        let err = Extractor::new().links("  \n").unwrap_err();

        assert!(err.is_link_extraction());
    }
}
