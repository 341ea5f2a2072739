use crate::config::types::InspectorOptions;
use crate::config::validation::validate;
use crate::{ConfigError, ConfigResult};
use std::path::Path;

/// Loads and parses inspector options from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML options file
///
/// # Returns
///
/// * `Ok(InspectorOptions)` - Successfully loaded and validated options
/// * `Err(ConfigError)` - Failed to load, parse, or validate the options
pub fn load_options(path: &Path) -> Result<InspectorOptions, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!("Loaded inspector options from {}", path.display());
    parse_options(&content)
}

/// Parses and validates inspector options from a TOML string
pub fn parse_options(content: &str) -> ConfigResult<InspectorOptions> {
    let options: InspectorOptions = toml::from_str(content)?;
    validate(&options)?;
    Ok(options)
}
