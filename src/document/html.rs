//! scraper-backed document

use crate::document::Document;
use scraper::{Html, Selector};

/// An HTML document parsed with html5ever
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document
    ///
    /// Parsing never fails; malformed markup is recovered the way browsers do.
    ///
    /// # Example
    ///
    /// ```
    /// use meta_inspector::document::{Document, HtmlDocument};
    ///
    /// let doc = HtmlDocument::parse("<html><head><title>Hi</title></head></html>");
    /// assert_eq!(doc.first_text("head > title"), Some("Hi".to_string()));
    /// ```
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument").finish_non_exhaustive()
    }
}

/// Parses a selector, logging and discarding invalid ones
fn selector(source: &str) -> Option<Selector> {
    match Selector::parse(source) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::debug!("Ignoring invalid selector '{}': {:?}", source, e);
            None
        }
    }
}

impl Document for HtmlDocument {
    fn first_text(&self, source: &str) -> Option<String> {
        let selector = selector(source)?;

        self.html
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>())
    }

    fn first_attr(&self, source: &str, attr: &str) -> Option<String> {
        let selector = selector(source)?;

        self.html
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(str::to_string)
    }

    fn all_attrs(&self, source: &str, attr: &str) -> Vec<String> {
        let Some(selector) = selector(source) else {
            return Vec::new();
        };

        self.html
            .select(&selector)
            .filter_map(|element| element.value().attr(attr))
            .map(str::to_string)
            .collect()
    }

    fn all_texts(&self, source: &str) -> Vec<String> {
        let Some(selector) = selector(source) else {
            return Vec::new();
        };

        self.html
            .select(&selector)
            .map(|element| element.text().collect::<String>())
            .collect()
    }
}
