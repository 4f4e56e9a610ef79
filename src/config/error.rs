//! Error types for resolver configuration.

use thiserror::Error;

/// Errors that can occur while validating a [`ResolverConfig`](super::ResolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An exclusion pattern is not a valid regular expression.
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A registry package was configured but is blank.
    #[error("Registry package name must not be empty")]
    EmptyRegistryPackage,
}

impl ConfigError {
    /// Create an invalid exclude pattern error.
    pub fn invalid_exclude(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidExcludePattern {
            pattern: pattern.into(),
            source,
        }
    }
}
