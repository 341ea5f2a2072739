//! Selector rules for each field
//!
//! Every function here is a pure query over a [`Document`]; memoization and
//! fallback sequencing live on the record and the inspector.

use crate::document::Document;

pub const TITLE: &str = "head > title";
pub const OG_TITLE: &str = "meta[property='og:title']";
pub const OG_DESCRIPTION: &str = "meta[property='og:description']";
pub const OG_TYPE: &str = "meta[property='og:type']";
pub const OG_UPDATED_TIME: &str = "meta[property='og:updated_time']";
pub const OG_LOCALE: &str = "meta[property='og:locale']";
pub const OG_IMAGE: &str = "meta[property='og:image']";
pub const META_DESCRIPTION: &str = "meta[name='description']";
pub const KEYWORDS: &str = "meta[name='keywords']";
pub const AUTHOR: &str = "meta[name='author']";
pub const CHARSET: &str = "meta[charset]";
pub const PARAGRAPH: &str = "p";
pub const IMAGE: &str = "img";
pub const ANCHOR: &str = "a";
pub const RSS_FEED: &str = "link[type='application/rss+xml']";
pub const ATOM_FEED: &str = "link[type='application/atom+xml']";

/// Minimum trimmed length (in characters) for a paragraph to serve as description
pub const MIN_PARAGRAPH_LENGTH: usize = 120;

pub fn title(doc: &dyn Document) -> Option<String> {
    doc.first_text(TITLE)
}

/// `content` of the first element matching `selector`
pub fn meta_content(doc: &dyn Document, selector: &str) -> Option<String> {
    doc.first_attr(selector, "content")
}

pub fn charset(doc: &dyn Document) -> Option<String> {
    doc.first_attr(CHARSET, "charset")
}

/// Keywords split on `,`; absent or empty content yields no keywords
pub fn keywords(doc: &dyn Document) -> Vec<String> {
    match meta_content(doc, KEYWORDS) {
        Some(content) if !content.is_empty() => content.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Trimmed text of the first paragraph at least [`MIN_PARAGRAPH_LENGTH`] characters long
pub fn secondary_description(doc: &dyn Document) -> Option<String> {
    doc.all_texts(PARAGRAPH)
        .into_iter()
        .map(|text| text.trim().to_string())
        .find(|text| text.chars().count() >= MIN_PARAGRAPH_LENGTH)
}

/// Raw `href` of every anchor, in document order
pub fn links(doc: &dyn Document) -> Vec<String> {
    doc.all_attrs(ANCHOR, "href")
}

/// Raw `src` of every image, in document order
pub fn image_sources(doc: &dyn Document) -> Vec<String> {
    doc.all_attrs(IMAGE, "src")
}

/// RSS feed hrefs, or Atom feed hrefs when the page declares no RSS feed
pub fn feeds(doc: &dyn Document) -> Vec<String> {
    let rss = doc.all_attrs(RSS_FEED, "href");
    if !rss.is_empty() {
        return rss;
    }
    doc.all_attrs(ATOM_FEED, "href")
}
