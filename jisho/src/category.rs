//! Normalization of comma-joined category tags.
//!
//! Jisho renders the categories of a definition as a single comma-separated string, e.g.
//! `Noun, used as a suffix, Expressions (phrases, clauses, etc.)`. Several category names contain
//! commas of their own, so they are lifted out of the string before it is split.

use crate::Category;

/// Category names that contain a comma.
pub const KNOWN_COMPOUND_CATEGORIES: &[&str] = &[
    "Noun, used as a suffix",
    "Noun, used as a prefix",
    "Expressions (phrases, clauses, etc.)",
    "Irregular ru verb, plain form ends with -ri",
    "Jocular, humorous term",
];

/// Categories whose definitions are dropped when they come first.
pub const DEFAULT_EXCLUDED_CATEGORIES: &[&str] = &["Place", "Wikipedia definition"];

/// Separator between categories.
const SEPARATOR: char = ',';

/// Splits a raw tag string into an ordered, deduplicated list of categories.
///
/// Plain categories come first, in the order they appear, followed by any names from
/// [`KNOWN_COMPOUND_CATEGORIES`] found in the input.
///
/// # Examples
///
/// ```
/// use jisho::category::normalize;
///
/// let names: Vec<String> = normalize("Noun, used as a suffix, Place")
///     .into_iter()
///     .map(|category| category.name)
///     .collect();
///
/// assert_eq!(names, ["Place", "Noun, used as a suffix"]);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Vec<Category> {
    let mut remainder = raw.to_string();
    let mut compound = Vec::new();

    for name in KNOWN_COMPOUND_CATEGORIES {
        if remainder.contains(name) {
            remainder = remainder.replace(name, "");
            compound.push(Category::new(*name));
        }
    }

    let mut categories: Vec<Category> = Vec::new();

    for piece in remainder.split(SEPARATOR).map(str::trim) {
        if piece.is_empty() {
            continue;
        }

        let category = Category::new(capitalize_first(piece));

        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    categories.extend(compound);
    categories
}

/// Returns `s` with its first character in upper case.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
