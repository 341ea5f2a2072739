use crate::{UrlError, UrlResult};
use url::Url;

/// Scheme assumed when the input carries none
const DEFAULT_SCHEME: &str = "http";

/// A target URL after normalization, with the parts extraction relies on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    /// Lowercased scheme (e.g. `http`)
    pub scheme: String,

    /// Lowercased host, without port
    pub host: String,

    /// `scheme://host`, the base for resolving relative hrefs
    pub root_url: String,

    /// The full normalized URL
    pub normalized_url: Url,
}

impl ResolvedUrl {
    /// Returns the normalized URL as a string
    pub fn as_str(&self) -> &str {
        self.normalized_url.as_str()
    }
}

/// Normalizes a raw target URL and derives its scheme, host, and root URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prefix `http://` when the input has no `scheme://`
/// 3. Parse and normalize: lowercase scheme and host, drop default port,
///    canonicalize percent-encoding, empty path becomes `/`
/// 4. Reject URLs without a host
///
/// # Examples
///
/// ```
/// use meta_inspector::url::normalize_url;
///
/// let resolved = normalize_url("Example.COM/page").unwrap();
/// assert_eq!(resolved.root_url, "http://example.com");
/// assert_eq!(resolved.as_str(), "http://example.com/page");
/// ```
pub fn normalize_url(input: &str) -> UrlResult<ResolvedUrl> {
    let trimmed = input.trim();
    let with_scheme = with_default_scheme(trimmed);

    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| UrlError::MissingHost {
            input: input.to_string(),
        })?
        .to_string();

    let scheme = url.scheme().to_string();
    let root_url = format!("{}://{}", scheme, host);

    Ok(ResolvedUrl {
        scheme,
        host,
        root_url,
        normalized_url: url,
    })
}

/// Prefixes the default scheme unless the input already starts with a scheme
fn with_default_scheme(input: &str) -> String {
    if has_scheme(input) {
        input.to_string()
    } else {
        format!("{}://{}", DEFAULT_SCHEME, input)
    }
}

/// Checks for `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"` at the start
///
/// A digit right after the colon reads as a port (`localhost:8080`), not a scheme.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, rest)) = input.split_once(':') else {
        return false;
    };

    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
