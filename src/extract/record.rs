use crate::extract::Field;
use std::collections::BTreeSet;

/// The metadata extracted from one document
///
/// Scalar fields are `None` until extracted and stay `None` when the document
/// lacks them; an empty string is a real value. Collection fields are empty
/// until extracted. Extraction state is tracked per field, so a field is
/// computed at most once whether or not a value was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    title: Option<String>,
    og_title: Option<String>,
    og_description: Option<String>,
    og_type: Option<String>,
    og_updated_time: Option<String>,
    og_locale: Option<String>,
    description: Option<String>,
    meta_description: Option<String>,
    secondary_description: Option<String>,
    keywords: Vec<String>,
    author: Option<String>,
    charset: Option<String>,
    image: Option<String>,
    images: Vec<String>,
    links: Vec<String>,
    feeds: Vec<String>,

    extracted: BTreeSet<Field>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once `field` has been extracted, even if nothing was found
    pub fn is_extracted(&self, field: Field) -> bool {
        self.extracted.contains(&field)
    }

    /// Fields extracted so far
    pub fn extracted_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.extracted.iter().copied()
    }

    /// Returns true if `field` holds a value: a scalar that is set or a
    /// non-empty collection
    pub fn has_value(&self, field: Field) -> bool {
        if field.is_collection() {
            self.collection(field).is_some_and(|values| !values.is_empty())
        } else {
            self.scalar(field).is_some()
        }
    }

    /// Value of a scalar field; `None` for unset values and collection fields
    pub fn scalar(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::OgTitle => self.og_title.as_deref(),
            Field::OgDescription => self.og_description.as_deref(),
            Field::OgType => self.og_type.as_deref(),
            Field::OgUpdatedTime => self.og_updated_time.as_deref(),
            Field::OgLocale => self.og_locale.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::MetaDescription => self.meta_description.as_deref(),
            Field::SecondaryDescription => self.secondary_description.as_deref(),
            Field::Author => self.author.as_deref(),
            Field::Charset => self.charset.as_deref(),
            Field::Image => self.image.as_deref(),
            Field::Keywords | Field::Images | Field::Links | Field::Feeds => None,
        }
    }

    /// Values of a collection field; `None` for scalar fields
    pub fn collection(&self, field: Field) -> Option<&[String]> {
        match field {
            Field::Keywords => Some(&self.keywords),
            Field::Images => Some(&self.images),
            Field::Links => Some(&self.links),
            Field::Feeds => Some(&self.feeds),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn og_title(&self) -> Option<&str> {
        self.og_title.as_deref()
    }

    pub fn og_description(&self) -> Option<&str> {
        self.og_description.as_deref()
    }

    pub fn og_type(&self) -> Option<&str> {
        self.og_type.as_deref()
    }

    pub fn og_updated_time(&self) -> Option<&str> {
        self.og_updated_time.as_deref()
    }

    pub fn og_locale(&self) -> Option<&str> {
        self.og_locale.as_deref()
    }

    /// Meta description if present, else the secondary description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }

    pub fn secondary_description(&self) -> Option<&str> {
        self.secondary_description.as_deref()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Open Graph image, made absolute
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Every image source, made absolute
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Every anchor href, as written in the document
    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn feeds(&self) -> &[String] {
        &self.feeds
    }

    /// Stores a scalar field's value and marks it extracted
    ///
    /// Returns false, leaving the record untouched, if the field was already
    /// extracted or is a collection.
    pub(crate) fn set_scalar(&mut self, field: Field, value: Option<String>) -> bool {
        if self.is_extracted(field) {
            return false;
        }

        let slot = match field {
            Field::Title => &mut self.title,
            Field::OgTitle => &mut self.og_title,
            Field::OgDescription => &mut self.og_description,
            Field::OgType => &mut self.og_type,
            Field::OgUpdatedTime => &mut self.og_updated_time,
            Field::OgLocale => &mut self.og_locale,
            Field::Description => &mut self.description,
            Field::MetaDescription => &mut self.meta_description,
            Field::SecondaryDescription => &mut self.secondary_description,
            Field::Author => &mut self.author,
            Field::Charset => &mut self.charset,
            Field::Image => &mut self.image,
            Field::Keywords | Field::Images | Field::Links | Field::Feeds => return false,
        };

        *slot = value;
        self.extracted.insert(field);
        true
    }

    /// Stores a collection field's values and marks it extracted
    ///
    /// Returns false, leaving the record untouched, if the field was already
    /// extracted or is a scalar.
    pub(crate) fn set_collection(&mut self, field: Field, values: Vec<String>) -> bool {
        if self.is_extracted(field) {
            return false;
        }

        let slot = match field {
            Field::Keywords => &mut self.keywords,
            Field::Images => &mut self.images,
            Field::Links => &mut self.links,
            Field::Feeds => &mut self.feeds,
            _ => return false,
        };

        *slot = values;
        self.extracted.insert(field);
        true
    }
}
