//! Meta-Inspector: page metadata extraction
//!
//! This crate fetches an HTML document and extracts a fixed set of metadata
//! fields (title, descriptions, Open Graph properties, links, images, feeds,
//! keywords, author, charset) through CSS-selector queries against the parsed DOM.

pub mod config;
pub mod document;
pub mod extract;
pub mod fetch;
pub mod inspector;
pub mod url;

use thiserror::Error;

/// Main error type for Meta-Inspector operations
#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("Malformed URL: {0}")]
    MalformedUrl(#[from] UrlError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Missing host in URL: {input}")]
    MissingHost { input: String },
}

/// Errors raised by a markup source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Too many redirects from {url}")]
    RedirectLimit { url: String },

    #[error("Invalid request header: {name}")]
    InvalidHeader { name: String },

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Failed to read body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("Markup source failed: {0}")]
    Source(String),
}

/// Result type alias for Meta-Inspector operations
pub type Result<T> = std::result::Result<T, InspectorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::InspectorOptions;
pub use document::{Document, HtmlDocument};
pub use extract::{Field, MetadataRecord};
pub use fetch::{FetchRequest, HttpFetcher, MarkupSource, StaticMarkup};
pub use inspector::{InspectionState, MetaInspector};
pub use crate::url::{absolute_path, normalize_url, ResolvedUrl};
