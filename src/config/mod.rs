//! Resolver configuration.
//!
//! Option parsing belongs to the host tool; this module holds the parsed
//! values and validates them.

mod error;
mod exclusion;

pub use error::ConfigError;
pub use exclusion::{ExcludeFilters, ExclusionPolicy};

/// Settings for one resolution session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Regular expressions over qualified type names. Matching types never
    /// get an optimistically built plan.
    pub excludes: Vec<String>,
    /// Package of the downstream registry artifact. No registry is requested
    /// when unset.
    pub registry_package: Option<String>,
    /// Child registry packages passed through to the registry request.
    pub registry_children: Vec<String>,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(excludes.into_iter().map(Into::into));
        self
    }

    pub fn with_registry_package(mut self, package: impl Into<String>) -> Self {
        self.registry_package = Some(package.into());
        self
    }

    pub fn with_registry_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry_children
            .extend(children.into_iter().map(Into::into));
        self
    }

    /// Split a comma-separated option value, trimming entries and dropping
    /// empty ones.
    pub fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(package) = &self.registry_package {
            if package.trim().is_empty() {
                return Err(ConfigError::EmptyRegistryPackage);
            }
        }
        ExcludeFilters::from_config(self).map(|_| ())
    }
}
