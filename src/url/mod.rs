//! URL handling module for Meta-Inspector
//!
//! This module provides target URL normalization (scheme inference, canonical
//! form, root URL derivation) and the textual resolver that turns hrefs found
//! in a document into absolute URLs.

mod normalize;
mod resolve;

// Re-export main functions
pub use normalize::{normalize_url, ResolvedUrl};
pub use resolve::absolute_path;
