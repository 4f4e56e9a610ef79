//! Construction Plan Builder.
//!
//! Turns an eligible marked constructor, or an eligible dependency type with
//! a trivial default constructor, into a [`ConstructionPlan`]. Scope flags come
//! from the constructed type's own annotations on both paths.

use crate::model::{ConstructorDecl, DeclarationInspector, HierarchyQuery, TypeDecl};

use super::diagnostics::{Diagnostic, DiagnosticSink, Location, codes};
use super::plan::{ConstructionPlan, Dependency, PlanOrigin};

#[derive(Clone, Copy)]
pub struct PlanBuilder<'a> {
    inspector: DeclarationInspector<'a>,
    hierarchy: &'a dyn HierarchyQuery,
}

impl<'a> PlanBuilder<'a> {
    pub fn new(inspector: DeclarationInspector<'a>, hierarchy: &'a dyn HierarchyQuery) -> Self {
        Self {
            inspector,
            hierarchy,
        }
    }

    /// Plan for a marked constructor that passed its eligibility checks.
    ///
    /// Parameters map one-to-one onto the constructor's parameters; repeated
    /// dependency types are kept.
    pub fn from_marked_constructor(
        &self,
        owner: &TypeDecl,
        constructor: &ConstructorDecl,
    ) -> ConstructionPlan {
        let parameters = constructor.params.iter().map(Dependency::from).collect();
        self.plan_for(owner, parameters, PlanOrigin::Explicit)
    }

    /// Plan for a dependency type without a marked constructor of its own.
    ///
    /// Only a type with exactly one declared constructor, taking no
    /// parameters and not private, gets a plan. Every other shape is left for
    /// explicit marking and reported as a warning.
    pub fn optimistic(
        &self,
        ty: &TypeDecl,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<ConstructionPlan> {
        let location = || Location::of_type(ty.name.clone()).with_span(ty.span);

        let constructors = self.inspector.declared_constructors_of(ty);
        let [constructor] = constructors else {
            sink.report(Diagnostic::warning(
                codes::AMBIGUOUS_CONSTRUCTORS,
                location(),
                format!(
                    "The class {} declares {} constructors, a factory can't be optimistically created for it.",
                    ty.name,
                    constructors.len()
                ),
            ));
            return None;
        };

        if !constructor.params.is_empty() {
            sink.report(Diagnostic::warning(
                codes::NO_DEFAULT_CONSTRUCTOR,
                location(),
                format!(
                    "The class {} has no default constructor, a factory can't be optimistically created for it.",
                    ty.name
                ),
            ));
            return None;
        }

        if constructor.visibility.is_private() {
            sink.report(Diagnostic::warning(
                codes::PRIVATE_DEFAULT_CONSTRUCTOR,
                location(),
                format!(
                    "The class {} has a private default constructor, a factory can't be optimistically created for it.",
                    ty.name
                ),
            ));
            return None;
        }

        Some(self.plan_for(ty, Vec::new(), PlanOrigin::Optimistic))
    }

    fn plan_for(
        &self,
        ty: &TypeDecl,
        parameters: Vec<Dependency>,
        origin: PlanOrigin,
    ) -> ConstructionPlan {
        ConstructionPlan {
            source_type: ty.name.clone(),
            parameters,
            is_singleton_scoped: self.inspector.is_singleton_scoped(ty),
            is_eager_singleton: self.inspector.is_eager_singleton(ty),
            super_type_with_injected_members: self
                .hierarchy
                .nearest_ancestor_with_injected_members(ty),
            origin,
        }
    }
}

impl std::fmt::Debug for PlanBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanBuilder").finish_non_exhaustive()
    }
}
