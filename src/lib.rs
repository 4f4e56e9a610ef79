//! # injector-base
//!
//! Build-time resolution of injection targets: for every type that requests
//! automatic construction, decide exactly one way to build it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! emit      → Hand-off to emission collaborators, registry request
//!   ↓
//! resolve   → Validity rules, plan building, Resolution Map, sessions
//!   ↓
//! config    → Resolver settings, exclusion filters
//!   ↓
//! model     → Declarations, semantic model seam, injection points
//!   ↓
//! base      → Primitives (TypeName, Span, annotation names)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → config → resolve → emit)
// ============================================================================

/// Foundation types: TypeName, Span, annotation names
pub mod base;

/// Declaration model: types, members, injection points, inspector
pub mod model;

/// Resolver configuration and exclusion filters
pub mod config;

/// Injection target resolution: rules, plans, Resolution Map, sessions
pub mod resolve;

/// Emission hand-off: emitted subset, registry request
pub mod emit;

// Re-export foundation types
pub use base::{Position, Span, TypeName};

// Re-export the session entry points
pub use resolve::{ConstructionPlan, DiscoveryPass, ResolutionSession, ResolvedPlans};
