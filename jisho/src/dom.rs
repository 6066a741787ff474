//! Traversal helpers over parsed HTML.
//!
//! Every extractor is written against [`Queryable`], so the same code runs against a whole
//! document ([`Html`]) or a fragment of one ([`ElementRef`]).

use scraper::{ElementRef, Html, Selector};

/// A selector-queryable sub-tree.
pub trait Queryable {
    /// Returns every element matching `selector`, in document order.
    fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>>;

    /// Returns the first element matching `selector`.
    fn select_first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select_all(selector).into_iter().next()
    }

    /// Returns the text of the first element matching `selector`.
    fn text_of(&self, selector: &Selector) -> Option<String> {
        self.select_first(selector).map(element_text)
    }
}

impl Queryable for Html {
    fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn select_first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }
}

impl Queryable for ElementRef<'_> {
    fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn select_first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }
}

/// Returns the concatenated text of all descendant text nodes.
#[must_use]
pub fn element_text(elem: ElementRef<'_>) -> String {
    elem.text().collect()
}

/// Returns the trimmed text of all descendant text nodes.
#[must_use]
pub fn trimmed_text(elem: ElementRef<'_>) -> String {
    element_text(elem).trim().to_string()
}

/// Returns `true` if `elem` carries the class `class`.
#[must_use]
pub fn has_class(elem: ElementRef<'_>, class: &str) -> bool {
    elem.value().classes().any(|name| name == class)
}

/// Returns `true` if `elem` is a `<tag>` element.
#[must_use]
pub fn is_tag(elem: ElementRef<'_>, tag: &str) -> bool {
    elem.value().name() == tag
}

/// Returns the child elements of `elem`, skipping text and comment nodes.
pub fn child_elements<'a>(elem: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    elem.children().filter_map(ElementRef::wrap)
}

/// Returns the element immediately before `elem`, skipping text and comment nodes.
#[must_use]
pub fn prev_element_sibling(elem: ElementRef<'_>) -> Option<ElementRef<'_>> {
    elem.prev_siblings().find_map(ElementRef::wrap)
}

/// Returns the elements after `elem` that share its parent, nearest first.
pub fn next_element_siblings<'a>(elem: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    elem.next_siblings().filter_map(ElementRef::wrap)
}

/// Returns every other element that shares a parent with `elem`, in document order.
pub fn sibling_elements<'a>(elem: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    let id = elem.id();

    elem.parent()
        .into_iter()
        .flat_map(|parent| parent.children())
        .filter(move |node| node.id() != id)
        .filter_map(ElementRef::wrap)
}

/// Parses `selector`, mapping failures into an [`Error`](crate::Error).
pub(crate) fn selector(selector: &str) -> Result<Selector, crate::Error> {
    Selector::parse(selector)
        .map_err(|err| crate::Error::InvalidSelector(format!("{selector}: {err}")))
}
