use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Redirects followed before a fetch gives up
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// User-Agent sent when the caller supplies no headers
pub const DEFAULT_USER_AGENT: &str = "MetaInspector/1.0";

/// Options controlling how a target page is fetched
///
/// Every key is optional in TOML; missing keys take the defaults below.
///
/// ```toml
/// max-redirects = 3
/// timeout-ms = 5000
/// strict-ssl = true
///
/// [headers]
/// User-Agent = "MyBot/2.0"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectorOptions {
    /// Maximum number of redirects the fetcher may follow
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Request timeout (milliseconds)
    #[serde(rename = "timeout-ms", default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Reject invalid TLS certificates when true
    #[serde(rename = "strict-ssl", default)]
    pub strict_ssl: bool,

    /// Headers sent with every request
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

impl InspectorOptions {
    /// Returns the request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for InspectorOptions {
    fn default() -> Self {
        Self {
            max_redirects: default_max_redirects(),
            timeout_ms: default_timeout_ms(),
            strict_ssl: false,
            headers: default_headers(),
        }
    }
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string())])
}
