//! Default HTTP markup source
//!
//! This module handles fetching target pages over HTTP(S):
//! - Building a client honoring timeout, redirect limit and TLS strictness
//! - Sending the configured headers (plus `Accept: text/html` by default)
//! - Classifying failures (status, timeout, redirects, transport)

use crate::fetch::{FetchRequest, MarkupSource};
use crate::{FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{redirect::Policy, Client, StatusCode};

/// Fetches markup with reqwest, building a client per request configuration
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }
}

/// Builds an HTTP client for the given request
///
/// # Arguments
///
/// * `request` - The fetch request carrying headers and limits
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(FetchError)` - A header was invalid or the client failed to build
pub fn build_http_client(request: &FetchRequest) -> FetchResult<Client> {
    let headers = build_headers(request)?;

    Client::builder()
        .default_headers(headers)
        .timeout(request.timeout)
        .redirect(Policy::limited(request.max_redirects))
        .danger_accept_invalid_certs(!request.strict_tls)
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(FetchError::Client)
}

/// Converts configured headers into a header map, adding `Accept: text/html`
/// unless the caller already set one
fn build_headers(request: &FetchRequest) -> FetchResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    for (name, value) in &request.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| FetchError::InvalidHeader {
                name: name.clone(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader {
            name: name.clone(),
        })?;
        headers.insert(header_name, header_value);
    }

    if !headers.contains_key(ACCEPT) {
        headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
    }

    Ok(headers)
}

/// Maps a transport-level reqwest error onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_redirect() {
        FetchError::RedirectLimit {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}

#[async_trait]
impl MarkupSource for HttpFetcher {
    async fn fetch_markup(&self, request: &FetchRequest) -> Result<String, FetchError> {
        let client = build_http_client(request)?;
        let url = request.url.as_str();

        tracing::debug!("Fetching {}", url);

        let response = client
            .get(request.url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
