//! Markup sources
//!
//! An inspection obtains its markup from a [`MarkupSource`]. The default source
//! is [`HttpFetcher`], configured from the inspector options; callers may pass
//! any other implementation, such as [`StaticMarkup`] for markup they already hold.

mod http;

pub use http::{build_http_client, HttpFetcher};

use crate::config::InspectorOptions;
use crate::FetchError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Everything a markup source needs to retrieve one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// The normalized target URL
    pub url: Url,

    /// Request headers
    pub headers: BTreeMap<String, String>,

    /// Overall request timeout
    pub timeout: Duration,

    /// Maximum number of redirects to follow
    pub max_redirects: usize,

    /// Reject invalid TLS certificates when true
    pub strict_tls: bool,
}

impl FetchRequest {
    /// Builds a request for `url` from the inspector options
    pub fn new(url: Url, options: &InspectorOptions) -> Self {
        Self {
            url,
            headers: options.headers.clone(),
            timeout: options.timeout(),
            max_redirects: options.max_redirects,
            strict_tls: options.strict_ssl,
        }
    }
}

/// Produces the raw markup for a fetch request
///
/// Implementations are expected to honor the timeout, redirect limit and TLS
/// strictness carried by the request; the inspector does not enforce them.
#[async_trait]
pub trait MarkupSource: Send + Sync {
    /// Retrieves the markup for `request`, or fails with a [`FetchError`]
    async fn fetch_markup(&self, request: &FetchRequest) -> Result<String, FetchError>;
}

/// A markup source that always yields the same markup
///
/// Useful for inspecting documents obtained elsewhere (files, caches, other clients).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMarkup(pub String);

impl StaticMarkup {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }
}

#[async_trait]
impl MarkupSource for StaticMarkup {
    async fn fetch_markup(&self, request: &FetchRequest) -> Result<String, FetchError> {
        tracing::debug!("Serving static markup for {}", request.url);
        Ok(self.0.clone())
    }
}
