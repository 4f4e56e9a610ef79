//! Exclusion of dependency types from optimistic construction.

use regex::Regex;

use super::{ConfigError, ResolverConfig};

/// Decides whether a type must never get an optimistically built plan.
///
/// Pure for the duration of a resolution session.
pub trait ExclusionPolicy {
    fn is_excluded(&self, qualified_name: &str) -> bool;
}

/// Excludes types whose full qualified name matches one of the configured
/// regular expressions.
#[derive(Clone, Debug, Default)]
pub struct ExcludeFilters {
    patterns: Vec<Regex>,
}

impl ExcludeFilters {
    /// Filters that exclude nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Compile the configured patterns. Each pattern must match the whole
    /// qualified name.
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(&format!("^(?:{pattern})$"))
                    .map_err(|source| ConfigError::invalid_exclude(pattern, source))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        Self::new(&config.excludes)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl ExclusionPolicy for ExcludeFilters {
    fn is_excluded(&self, qualified_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.is_match(qualified_name))
    }
}
