//! Inspection orchestration
//!
//! A [`MetaInspector`] owns one target URL and everything derived from it: the
//! normalized URL, the fetched markup, the parsed document, and the metadata
//! record. [`MetaInspector::inspect`] runs the whole cycle:
//!
//! 1. Obtain markup from the supplied [`MarkupSource`] (or the default [`HttpFetcher`])
//! 2. Parse it into an [`HtmlDocument`]
//! 3. Run every field extractor once, in [`Field::INSPECTION_ORDER`]
//!
//! Individual getters (`get_title`, `get_images`, ...) are memoized per field
//! and return the inspector for chaining.

mod state;

pub use state::InspectionState;

use crate::config::{self, InspectorOptions};
use crate::document::{Document, HtmlDocument};
use crate::extract::{rules, Field, MetadataRecord};
use crate::fetch::{FetchRequest, HttpFetcher, MarkupSource};
use crate::url::{absolute_path, normalize_url, ResolvedUrl};
use crate::InspectorError;
use std::fmt;

/// Extracts page metadata for a single target URL
pub struct MetaInspector {
    resolved: ResolvedUrl,
    options: InspectorOptions,
    markup: Option<String>,
    document: Option<Box<dyn Document>>,
    record: MetadataRecord,
    state: InspectionState,
}

impl MetaInspector {
    /// Creates an inspector for `url`
    ///
    /// The URL gets an `http://` scheme if it has none and is normalized. The
    /// options are validated.
    ///
    /// # Errors
    ///
    /// * `InspectorError::MalformedUrl` - the URL cannot be parsed or has no host
    /// * `InspectorError::Config` - the options are invalid
    ///
    /// # Example
    ///
    /// ```
    /// use meta_inspector::{InspectorOptions, MetaInspector};
    ///
    /// let inspector = MetaInspector::new("example.com/page", InspectorOptions::default()).unwrap();
    /// assert_eq!(inspector.resolved().root_url, "http://example.com");
    /// ```
    pub fn new(url: &str, options: InspectorOptions) -> Result<Self, InspectorError> {
        config::validate(&options)?;
        let resolved = normalize_url(url)?;

        tracing::debug!(
            "Created inspector for {} (root: {})",
            resolved.as_str(),
            resolved.root_url
        );

        Ok(Self {
            resolved,
            options,
            markup: None,
            document: None,
            record: MetadataRecord::new(),
            state: InspectionState::Unfetched,
        })
    }

    /// The normalized target URL
    pub fn url(&self) -> &str {
        self.resolved.as_str()
    }

    pub fn resolved(&self) -> &ResolvedUrl {
        &self.resolved
    }

    pub fn options(&self) -> &InspectorOptions {
        &self.options
    }

    pub fn state(&self) -> InspectionState {
        self.state
    }

    pub fn record(&self) -> &MetadataRecord {
        &self.record
    }

    /// Raw markup of the last successful fetch
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// The parsed document, once one is attached
    pub fn document(&self) -> Option<&dyn Document> {
        self.document.as_deref()
    }

    /// Builds the fetch request for this target from the options
    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest::new(self.resolved.normalized_url.clone(), &self.options)
    }

    /// Resolves an href against this target's root URL
    pub fn absolute_path(&self, href: &str) -> String {
        absolute_path(href, &self.resolved.root_url)
    }

    /// Fetches, parses and extracts every field
    ///
    /// Uses `source` when given, otherwise an [`HttpFetcher`] configured from
    /// the options. On fetch failure the error is returned and the record is
    /// left exactly as it was. A later successful inspection replaces the
    /// document and starts a fresh record.
    pub async fn inspect(
        &mut self,
        source: Option<&dyn MarkupSource>,
    ) -> Result<&MetadataRecord, InspectorError> {
        let default_source = HttpFetcher::new();
        let source: &dyn MarkupSource = source.unwrap_or(&default_source);
        let request = self.fetch_request();

        tracing::info!("Inspecting {}", request.url);

        let markup = match source.fetch_markup(&request).await {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", request.url, e);
                return Err(e.into());
            }
        };

        let document = HtmlDocument::parse(&markup);
        self.markup = Some(markup);
        self.document = Some(Box::new(document));
        self.record = MetadataRecord::new();

        Ok(self.populate())
    }

    /// Attaches an already-parsed document, discarding any extracted fields
    ///
    /// If the inspector was already populated, the new document is populated
    /// immediately so the record always reflects the current document.
    pub fn attach_document(&mut self, document: Box<dyn Document>) -> &mut Self {
        self.document = Some(document);
        self.markup = None;
        self.record = MetadataRecord::new();

        if self.state.is_terminal() {
            self.populate();
        }
        self
    }

    /// Runs every extractor in [`Field::INSPECTION_ORDER`] and marks the
    /// inspection populated
    ///
    /// Does nothing without an attached document.
    pub fn populate(&mut self) -> &MetadataRecord {
        if self.document.is_none() {
            tracing::warn!("Cannot populate {} without a document", self.url());
            return &self.record;
        }

        for field in Field::INSPECTION_ORDER {
            self.extract(field);
        }

        self.state = InspectionState::Populated;
        tracing::info!(
            "Populated {} ({} of {} fields found)",
            self.url(),
            self.found_fields().len(),
            self.record.extracted_fields().count()
        );

        &self.record
    }

    /// Extracted fields that hold a value
    pub fn found_fields(&self) -> Vec<Field> {
        self.record
            .extracted_fields()
            .filter(|field| self.record.has_value(*field))
            .collect()
    }

    /// Runs the extractor for a single field
    pub fn extract(&mut self, field: Field) -> &mut Self {
        match field {
            Field::Title => self.get_title(),
            Field::OgTitle => self.get_og_title(),
            Field::OgDescription => self.get_og_description(),
            Field::OgType => self.get_og_type(),
            Field::OgUpdatedTime => self.get_og_updated_time(),
            Field::OgLocale => self.get_og_locale(),
            Field::Description => self.get_description(),
            Field::MetaDescription => self.get_meta_description(),
            Field::SecondaryDescription => self.get_secondary_description(),
            Field::Keywords => self.get_keywords(),
            Field::Author => self.get_author(),
            Field::Charset => self.get_charset(),
            Field::Image => self.get_image(),
            Field::Images => self.get_images(),
            Field::Links => self.get_links(),
            Field::Feeds => self.get_feeds(),
        }
    }

    pub fn get_title(&mut self) -> &mut Self {
        tracing::debug!("Parsing page title");
        self.extract_scalar(Field::Title, rules::title)
    }

    pub fn get_og_title(&mut self) -> &mut Self {
        tracing::debug!("Parsing page Open Graph title");
        self.extract_scalar(Field::OgTitle, |doc| {
            rules::meta_content(doc, rules::OG_TITLE)
        })
    }

    pub fn get_og_description(&mut self) -> &mut Self {
        tracing::debug!("Parsing page Open Graph description");
        self.extract_scalar(Field::OgDescription, |doc| {
            rules::meta_content(doc, rules::OG_DESCRIPTION)
        })
    }

    pub fn get_og_type(&mut self) -> &mut Self {
        tracing::debug!("Parsing page Open Graph type");
        self.extract_scalar(Field::OgType, |doc| rules::meta_content(doc, rules::OG_TYPE))
    }

    pub fn get_og_updated_time(&mut self) -> &mut Self {
        tracing::debug!("Parsing page Open Graph updated time");
        self.extract_scalar(Field::OgUpdatedTime, |doc| {
            rules::meta_content(doc, rules::OG_UPDATED_TIME)
        })
    }

    pub fn get_og_locale(&mut self) -> &mut Self {
        tracing::debug!("Parsing page Open Graph locale");
        self.extract_scalar(Field::OgLocale, |doc| {
            rules::meta_content(doc, rules::OG_LOCALE)
        })
    }

    pub fn get_meta_description(&mut self) -> &mut Self {
        tracing::debug!("Parsing page description based on meta elements");
        self.extract_scalar(Field::MetaDescription, |doc| {
            rules::meta_content(doc, rules::META_DESCRIPTION)
        })
    }

    /// First long paragraph; skipped entirely when a meta description exists
    pub fn get_secondary_description(&mut self) -> &mut Self {
        tracing::debug!("Parsing page secondary description");
        self.get_meta_description();

        if self.record.meta_description().is_some() {
            return self;
        }

        self.extract_scalar(Field::SecondaryDescription, rules::secondary_description)
    }

    /// Meta description, falling back to the secondary description
    pub fn get_description(&mut self) -> &mut Self {
        tracing::debug!("Parsing page description from meta description or secondary description");

        if self.pending_document(Field::Description).is_none() {
            return self;
        }

        self.get_meta_description();
        let description = match self.record.meta_description() {
            Some(meta) => Some(meta.to_string()),
            None => {
                self.get_secondary_description();
                self.record.secondary_description().map(str::to_string)
            }
        };

        self.record.set_scalar(Field::Description, description);
        self
    }

    pub fn get_keywords(&mut self) -> &mut Self {
        tracing::debug!("Parsing page keywords from meta tag");
        self.extract_collection(Field::Keywords, rules::keywords)
    }

    pub fn get_author(&mut self) -> &mut Self {
        tracing::debug!("Parsing page author from meta tag");
        self.extract_scalar(Field::Author, |doc| rules::meta_content(doc, rules::AUTHOR))
    }

    pub fn get_charset(&mut self) -> &mut Self {
        tracing::debug!("Parsing page charset from meta tag");
        self.extract_scalar(Field::Charset, rules::charset)
    }

    /// Open Graph image, made absolute
    pub fn get_image(&mut self) -> &mut Self {
        tracing::debug!("Parsing page image from Open Graph image");
        let root_url = self.resolved.root_url.clone();

        self.extract_scalar(Field::Image, move |doc| {
            rules::meta_content(doc, rules::OG_IMAGE)
                .filter(|src| !src.is_empty())
                .map(|src| absolute_path(&src, &root_url))
        })
    }

    /// Every `img` source, made absolute
    pub fn get_images(&mut self) -> &mut Self {
        tracing::debug!("Parsing page body images");
        let root_url = self.resolved.root_url.clone();

        self.extract_collection(Field::Images, move |doc| {
            rules::image_sources(doc)
                .iter()
                .map(|src| absolute_path(src, &root_url))
                .collect()
        })
    }

    pub fn get_links(&mut self) -> &mut Self {
        tracing::debug!("Parsing page links");
        self.extract_collection(Field::Links, rules::links)
    }

    pub fn get_feeds(&mut self) -> &mut Self {
        tracing::debug!("Parsing page feeds from RSS or Atom links");
        self.extract_collection(Field::Feeds, rules::feeds)
    }

    /// Returns the document if `field` still needs extracting
    fn pending_document(&self, field: Field) -> Option<&dyn Document> {
        if self.record.is_extracted(field) {
            tracing::trace!("Field {} already extracted", field);
            return None;
        }

        let document = self.document.as_deref();
        if document.is_none() {
            tracing::warn!("Cannot extract {} before a document is attached", field);
        }
        document
    }

    fn extract_scalar<F>(&mut self, field: Field, rule: F) -> &mut Self
    where
        F: FnOnce(&dyn Document) -> Option<String>,
    {
        if let Some(document) = self.pending_document(field) {
            let value = rule(document);
            self.record.set_scalar(field, value);
        }
        self
    }

    fn extract_collection<F>(&mut self, field: Field, rule: F) -> &mut Self
    where
        F: FnOnce(&dyn Document) -> Vec<String>,
    {
        if let Some(document) = self.pending_document(field) {
            let values = rule(document);
            self.record.set_collection(field, values);
        }
        self
    }
}

impl fmt::Debug for MetaInspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaInspector")
            .field("resolved", &self.resolved)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("has_document", &self.document.is_some())
            .field("record", &self.record)
            .finish()
    }
}
