//! Injection target resolution: from scattered injection markers to one
//! ordered construction plan per type.
//!
//! ## Pipeline (per discovery pass)
//!
//! ```text
//! DeclarationInspector     ← marked constructors, fields, methods of the pass roots
//!     │
//!     ▼
//! ValidityChecker          ← eligibility rules, diagnostics to the sink
//!     │
//!     ▼
//! PlanBuilder              ← explicit or optimistic construction plan
//!     │
//!     ▼
//! ResolutionMap            ← first plan per type wins, insertion ordered
//! ```
//!
//! [`ResolutionSession`] drives the pipeline for each pass and freezes the map
//! into [`ResolvedPlans`] once the host signals there is no more input.

mod builder;
mod checks;
mod diagnostics;
mod map;
mod plan;
mod session;

pub use builder::PlanBuilder;
pub use checks::ValidityChecker;
pub use diagnostics::{
    Diagnostic, DiagnosticCollector, DiagnosticSink, Location, Severity, TracingSink, codes,
};
pub use map::{ResolutionMap, ResolvedPlans};
pub use plan::{ConstructionPlan, Dependency, PlanOrigin};
pub use session::{DiscoveryPass, PassSummary, ResolutionSession};
