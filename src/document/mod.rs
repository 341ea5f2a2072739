//! Parsed document abstraction
//!
//! Extraction rules only need four kinds of query against a DOM: the text of the
//! first match, an attribute of the first match, an attribute of every match,
//! and the text of every match. The [`Document`] trait captures exactly that, so
//! the extraction catalog runs against any DOM that can answer CSS selectors.

mod html;

pub use html::HtmlDocument;

/// A queryable DOM handle supporting CSS-selector lookups
///
/// Selectors that fail to parse behave as if nothing matched.
pub trait Document {
    /// Text content of the first element matching `selector`
    fn first_text(&self, selector: &str) -> Option<String>;

    /// Value of `attr` on the first element matching `selector`
    fn first_attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// Values of `attr` on every matching element, in document order
    ///
    /// Elements lacking the attribute are skipped.
    fn all_attrs(&self, selector: &str, attr: &str) -> Vec<String>;

    /// Text content of every matching element, in document order
    fn all_texts(&self, selector: &str) -> Vec<String>;
}
