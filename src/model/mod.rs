//! Declaration model: what the resolver knows about the program.
//!
//! ## Key Types
//!
//! - [`TypeDecl`] and its members - plain declaration values a host adapts
//!   its own semantic model into
//! - [`SemanticModel`] - lookup seam implemented by the host
//! - [`HierarchyQuery`] - nearest type in a superclass chain with injected members
//! - [`ProgramModel`] - in-memory implementation of both traits
//! - [`InjectionPoint`] - constructor, field or parameter requesting injection
//! - [`DeclarationInspector`] - per-pass query facade

mod decl;
mod inspector;
mod points;
mod program;

pub use decl::{
    ConstructorDecl, DependencyKind, FieldDecl, MethodDecl, ParamDecl, TypeDecl, TypeKind,
    Visibility,
};
pub use inspector::DeclarationInspector;
pub use points::{Callable, InjectionPoint, MarkedMethod};
pub use program::{HierarchyQuery, ProgramModel, SemanticModel};
