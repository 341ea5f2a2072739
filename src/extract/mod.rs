//! Metadata extraction catalog
//!
//! This module defines the fixed set of metadata fields, the record that
//! accumulates them, and the selector rules that compute each one from a
//! parsed document.

mod record;
pub mod rules;

pub use record::MetadataRecord;

use std::fmt;

/// One entry of the extraction catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    OgTitle,
    OgDescription,
    OgType,
    OgUpdatedTime,
    OgLocale,
    /// Alias resolving to the meta description, else the secondary description
    Description,
    MetaDescription,
    /// First long paragraph, used only when no meta description exists
    SecondaryDescription,
    Keywords,
    Author,
    Charset,
    Image,
    Images,
    Links,
    Feeds,
}

impl Field {
    /// Order in which a full inspection runs the extractors
    ///
    /// `Description` runs `MetaDescription` then, if needed, `SecondaryDescription`.
    pub const INSPECTION_ORDER: [Field; 14] = [
        Field::Title,
        Field::Author,
        Field::Charset,
        Field::Keywords,
        Field::Links,
        Field::Description,
        Field::Image,
        Field::Images,
        Field::Feeds,
        Field::OgTitle,
        Field::OgDescription,
        Field::OgType,
        Field::OgUpdatedTime,
        Field::OgLocale,
    ];

    /// Returns true for fields holding a sequence rather than a single value
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::Keywords | Self::Images | Self::Links | Self::Feeds
        )
    }

    /// Returns the field name as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::OgTitle => "og_title",
            Self::OgDescription => "og_description",
            Self::OgType => "og_type",
            Self::OgUpdatedTime => "og_updated_time",
            Self::OgLocale => "og_locale",
            Self::Description => "description",
            Self::MetaDescription => "meta_description",
            Self::SecondaryDescription => "secondary_description",
            Self::Keywords => "keywords",
            Self::Author => "author",
            Self::Charset => "charset",
            Self::Image => "image",
            Self::Images => "images",
            Self::Links => "links",
            Self::Feeds => "feeds",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
