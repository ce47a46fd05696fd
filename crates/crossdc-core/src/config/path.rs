//! Resolution path selection
//!
//! # Precedence
//!
//! 1. [`ResolverOptions::props_path`] (if set and non-empty)
//! 2. `CROSSDC_PROPS_PATH` environment variable (if set and non-empty)
//! 3. [`DEFAULT_PROPS_PATH`]

use super::keys::{DEFAULT_PROPS_PATH, PROPS_PATH_ENV};

/// Caller-supplied options for a resolver
#[derive(Debug, Default, Clone)]
pub struct ResolverOptions {
    /// Override the coordination-service path holding remote properties
    pub props_path: Option<String>,
}

/// Determine the coordination-service path to read remote properties from.
///
/// Surrounding whitespace is trimmed from both the override and the
/// environment value; a blank value counts as unset.
pub fn props_path(options: &ResolverOptions) -> String {
    if let Some(path) = options.props_path.as_deref().map(str::trim)
        && !path.is_empty()
    {
        return path.to_string();
    }

    if let Ok(path) = std::env::var(PROPS_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    DEFAULT_PROPS_PATH.to_string()
}
