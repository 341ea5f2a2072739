use crate::config::types::InspectorOptions;
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use std::collections::BTreeMap;

/// Upper bound accepted for `max-redirects`
const MAX_REDIRECT_LIMIT: usize = 100;

/// Validates the inspector options
pub fn validate(options: &InspectorOptions) -> Result<(), ConfigError> {
    validate_timeout(options.timeout_ms)?;
    validate_max_redirects(options.max_redirects)?;
    validate_headers(&options.headers)?;
    Ok(())
}

fn validate_timeout(timeout_ms: u64) -> Result<(), ConfigError> {
    if timeout_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-ms must be >= 1ms, got {}ms",
            timeout_ms
        )));
    }
    Ok(())
}

fn validate_max_redirects(max_redirects: usize) -> Result<(), ConfigError> {
    if max_redirects > MAX_REDIRECT_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be at most {}, got {}",
            MAX_REDIRECT_LIMIT, max_redirects
        )));
    }
    Ok(())
}

/// Validates header names and values against HTTP grammar
fn validate_headers(headers: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for (name, value) in headers {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(format!("invalid header name '{}'", name)))?;

        HeaderValue::from_str(value).map_err(|_| {
            ConfigError::InvalidHeader(format!("invalid value for header '{}'", name))
        })?;
    }
    Ok(())
}
