//! Resolution session: discovery passes over a growing view of the program.
//!
//! A session accumulates plans over any number of discovery passes, then is
//! consumed by [`ResolutionSession::finish`], which freezes the Resolution
//! Map for emission.
//!
//! ## Usage
//!
//! ```
//! use injector::config::ResolverConfig;
//! use injector::model::{ConstructorDecl, ProgramModel, TypeDecl};
//! use injector::resolve::{DiagnosticCollector, DiscoveryPass, ResolutionSession};
//!
//! let model = ProgramModel::new()
//!     .with(
//!         TypeDecl::class("app.A")
//!             .with_constructor(ConstructorDecl::new().marked().param("b", "app.B")),
//!     )
//!     .with(TypeDecl::class("app.B").with_constructor(ConstructorDecl::new()));
//!
//! let mut session = ResolutionSession::new(&ResolverConfig::default())?;
//! let mut diagnostics = DiagnosticCollector::new();
//! session.run_pass(&DiscoveryPass::all(&model), &mut diagnostics);
//!
//! let plans = session.finish();
//! assert!(plans.types().map(|t| &**t).eq(["app.A", "app.B"]));
//! # Ok::<(), injector::config::ConfigError>(())
//! ```

use crate::base::TypeName;
use crate::config::{ConfigError, ExcludeFilters, ExclusionPolicy, ResolverConfig};
use crate::model::{
    DeclarationInspector, HierarchyQuery, InjectionPoint, ProgramModel, SemanticModel,
};

use super::builder::PlanBuilder;
use super::checks::ValidityChecker;
use super::diagnostics::DiagnosticSink;
use super::map::{ResolutionMap, ResolvedPlans};
use super::plan::ConstructionPlan;

// ============================================================================
// PASS INPUT / OUTPUT
// ============================================================================

/// The part of the program visible in one discovery pass.
pub struct DiscoveryPass<'a> {
    model: &'a dyn SemanticModel,
    hierarchy: &'a dyn HierarchyQuery,
    roots: Vec<TypeName>,
}

impl<'a> DiscoveryPass<'a> {
    /// A pass whose marked members are searched in `roots`. Dependency types
    /// are looked up in the whole `model`.
    pub fn new(
        model: &'a dyn SemanticModel,
        hierarchy: &'a dyn HierarchyQuery,
        roots: impl IntoIterator<Item = TypeName>,
    ) -> Self {
        Self {
            model,
            hierarchy,
            roots: roots.into_iter().collect(),
        }
    }

    /// A pass over the given roots of a model that also answers hierarchy
    /// queries.
    pub fn over<M>(model: &'a M, roots: impl IntoIterator<Item = TypeName>) -> Self
    where
        M: SemanticModel + HierarchyQuery,
    {
        Self::new(model, model, roots)
    }

    /// A single pass over every type of a program model.
    pub fn all(model: &'a ProgramModel) -> Self {
        Self::over(model, model.type_names())
    }

    pub fn roots(&self) -> &[TypeName] {
        &self.roots
    }
}

impl std::fmt::Debug for DiscoveryPass<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryPass")
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

/// What one discovery pass contributed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassSummary {
    /// 0-based index of the pass within its session.
    pub pass_index: usize,
    pub plans_added: usize,
}

// ============================================================================
// SESSION
// ============================================================================

/// Accumulates construction plans across discovery passes.
pub struct ResolutionSession {
    map: ResolutionMap,
    exclusions: Box<dyn ExclusionPolicy + Send + Sync>,
    passes: usize,
}

impl ResolutionSession {
    /// Start an empty session. Fails when the configuration is invalid.
    pub fn new(config: &ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_exclusions(ExcludeFilters::from_config(config)?))
    }

    /// Start an empty session with a custom exclusion policy.
    pub fn with_exclusions(exclusions: impl ExclusionPolicy + Send + Sync + 'static) -> Self {
        Self {
            map: ResolutionMap::new(),
            exclusions: Box::new(exclusions),
            passes: 0,
        }
    }

    /// Run one discovery pass: marked constructors first, then marked fields,
    /// then marked methods. Individual failures are reported to `sink` and
    /// never stop the pass.
    pub fn run_pass(
        &mut self,
        pass: &DiscoveryPass<'_>,
        sink: &mut dyn DiagnosticSink,
    ) -> PassSummary {
        let pass_index = self.passes;
        self.passes += 1;
        tracing::debug!(pass = pass_index, roots = pass.roots.len(), "discovery pass started");

        let inspector = DeclarationInspector::new(pass.model, &pass.roots);
        let mut driver = Driver {
            inspector,
            checker: ValidityChecker::new(inspector, self.exclusions.as_ref()),
            builder: PlanBuilder::new(inspector, pass.hierarchy),
            map: &mut self.map,
            plans_added: 0,
        };
        driver.run(sink);

        let summary = PassSummary {
            pass_index,
            plans_added: driver.plans_added,
        };
        tracing::debug!(
            pass = pass_index,
            plans_added = summary.plans_added,
            total = self.map.len(),
            "discovery pass finished"
        );
        summary
    }

    pub fn is_resolved(&self, ty: &str) -> bool {
        self.map.is_resolved(ty)
    }

    pub fn plan(&self, ty: &str) -> Option<&ConstructionPlan> {
        self.map.get(ty)
    }

    pub fn plan_count(&self) -> usize {
        self.map.len()
    }

    /// Number of passes run so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// No more passes will run: freeze the Resolution Map for emission.
    pub fn finish(self) -> ResolvedPlans {
        tracing::debug!(
            passes = self.passes,
            plans = self.map.len(),
            "resolution session finished"
        );
        self.map.freeze()
    }
}

impl std::fmt::Debug for ResolutionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionSession")
            .field("map", &self.map)
            .field("passes", &self.passes)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// DRIVER
// ============================================================================

/// One pass worth of resolution state.
struct Driver<'p, 'm> {
    inspector: DeclarationInspector<'p>,
    checker: ValidityChecker<'p>,
    builder: PlanBuilder<'p>,
    map: &'m mut ResolutionMap,
    plans_added: usize,
}

impl Driver<'_, '_> {
    fn run(&mut self, sink: &mut dyn DiagnosticSink) {
        for point in self.inspector.find_marked_constructors() {
            self.visit(point, sink);
        }

        for point in self.inspector.find_marked_fields() {
            self.visit(point, sink);
        }

        for marked in self.inspector.find_marked_methods() {
            if !self.checker.is_valid_marked_method(&marked, sink) {
                tracing::trace!(
                    owner = %marked.owner.name,
                    method = %marked.method.name,
                    "skipping ineligible method"
                );
                continue;
            }
            for point in marked.parameter_points() {
                self.visit(point, sink);
            }
        }
    }

    fn visit(&mut self, point: InjectionPoint<'_>, sink: &mut dyn DiagnosticSink) {
        match point {
            InjectionPoint::Constructor { owner, constructor } => {
                self.checker
                    .is_single_marked_constructor(owner, constructor, sink);

                if !self
                    .checker
                    .is_valid_marked_constructor(owner, constructor, sink)
                    || !self.checker.is_eligible_dependency_type(owner)
                {
                    tracing::trace!(owner = %owner.name, "skipping ineligible constructor");
                    return;
                }

                let plan = self.builder.from_marked_constructor(owner, constructor);
                self.insert(plan);

                for parameter in point.parameter_points() {
                    self.visit(parameter, sink);
                }
            }
            InjectionPoint::Field { owner, field } => {
                if !self.checker.is_valid_marked_field(owner, field, sink) {
                    tracing::trace!(
                        owner = %owner.name,
                        field = %field.name,
                        "skipping ineligible field"
                    );
                    return;
                }
                self.resolve_optimistically(field.ty(), sink);
            }
            InjectionPoint::Parameter { parameter, .. } => {
                self.resolve_optimistically(&parameter.ty, sink);
            }
        }
    }

    /// Best-effort plan for a dependency type that has no marked constructor.
    fn resolve_optimistically(&mut self, ty: &str, sink: &mut dyn DiagnosticSink) {
        if self.map.is_resolved(ty) {
            return;
        }

        let Some(decl) = self.inspector.lookup(ty) else {
            tracing::trace!(ty, "dependency type unknown to the model");
            return;
        };

        if !self.checker.is_eligible_dependency_type(decl) {
            tracing::trace!(ty, "dependency type not eligible");
            return;
        }

        // Left to its own marked constructor, in this pass or a later one.
        if decl.marked_constructors().next().is_some() {
            tracing::trace!(ty, "dependency type has a marked constructor");
            return;
        }

        if let Some(plan) = self.builder.optimistic(decl, sink) {
            self.insert(plan);
        }
    }

    fn insert(&mut self, plan: ConstructionPlan) {
        let ty = plan.source_type.clone();
        let origin = plan.origin;
        if self.map.insert(plan) {
            self.plans_added += 1;
            tracing::trace!(ty = %ty, ?origin, "plan added");
        } else {
            tracing::trace!(ty = %ty, ?origin, "type already resolved");
        }
    }
}
