//! Configuration module for Meta-Inspector
//!
//! This module handles the inspection options (redirect limit, timeout, TLS
//! strictness, request headers), including loading and validating them from TOML.
//!
//! # Example
//!
//! ```no_run
//! use meta_inspector::config::load_options;
//! use std::path::Path;
//!
//! let options = load_options(Path::new("inspector.toml")).unwrap();
//! println!("Requests time out after {}ms", options.timeout_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    InspectorOptions, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_options, parse_options};
pub use validation::validate;
