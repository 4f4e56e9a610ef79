//! Diagnostics: reporting rule violations found during resolution.
//!
//! Every validity rule reports through a [`DiagnosticSink`] and keeps going.
//! Reporting never fails and never stops a pass.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{Span, TypeName};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// Where a diagnostic points: a type, optionally one of its members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub ty: TypeName,
    /// Member name (field or method) when the diagnostic is about a member.
    pub member: Option<SmolStr>,
    pub span: Option<Span>,
}

impl Location {
    pub fn of_type(ty: TypeName) -> Self {
        Self {
            ty,
            member: None,
            span: None,
        }
    }

    pub fn with_member(mut self, member: impl Into<SmolStr>) -> Self {
        self.member = Some(member.into());
        self
    }

    pub fn with_span(mut self, span: Option<Span>) -> Self {
        self.span = span;
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ty)?;
        if let Some(member) = &self.member {
            write!(f, "#{member}")?;
        }
        if let Some(span) = &self.span {
            write!(f, " ({span})")?;
        }
        Ok(())
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Error/warning code (e.g., "E0101").
    pub code: &'static str,
    pub location: Location,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: &'static str, location: Location, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            location,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: &'static str, location: Location, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            location,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes for resolution.
///
/// ## Code Ranges
///
/// - **E0101-E0199**: Ineligible injection points
/// - **W0101-W0199**: Types that cannot be constructed optimistically
pub mod codes {
    /// Marked constructor is private.
    pub const PRIVATE_CONSTRUCTOR: &str = "E0101";
    /// Marked member declared in a non-public type.
    pub const NON_PUBLIC_OWNER: &str = "E0102";
    /// Marked field is private.
    pub const PRIVATE_FIELD: &str = "E0103";
    /// Marked method is private.
    pub const PRIVATE_METHOD: &str = "E0104";
    /// More than one marked constructor in a type.
    pub const MULTIPLE_MARKED_CONSTRUCTORS: &str = "E0105";

    /// Single constructor takes parameters.
    pub const NO_DEFAULT_CONSTRUCTOR: &str = "W0101";
    /// Single no-arg constructor is private.
    pub const PRIVATE_DEFAULT_CONSTRUCTOR: &str = "W0102";
    /// Zero or several declared constructors.
    pub const AMBIGUOUS_CONSTRUCTORS: &str = "W0103";
}

// ============================================================================
// SINKS
// ============================================================================

/// Receives diagnostics as they are found. Fire-and-forget.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics during resolution.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics located on a given type.
    pub fn diagnostics_for_type(&self, ty: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.location.ty.as_ref() == ty)
            .collect()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let Diagnostic {
            severity,
            code,
            location,
            message,
        } = diagnostic;
        match severity {
            Severity::Error => {
                tracing::error!(code, location = %location, "{message}")
            }
            Severity::Warning => {
                tracing::warn!(code, location = %location, "{message}")
            }
        }
    }
}
