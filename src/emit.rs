//! Hand-off to emission collaborators.
//!
//! Emitting source for a plan and writing it out belongs to the host. This
//! module walks the resolved plans in order, records which ones the emitter
//! materialized, and builds the registry request from that subset only.

use crate::base::TypeName;
use crate::config::ResolverConfig;
use crate::resolve::{ConstructionPlan, ResolvedPlans};

/// Materializes one construction plan (generated source, file, ...).
pub trait PlanEmitter {
    type Error: std::error::Error;

    fn emit(&mut self, plan: &ConstructionPlan) -> Result<(), Self::Error>;
}

/// Outcome of emitting every resolved plan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmissionReport {
    /// Successfully emitted types, in plan order.
    pub emitted: Vec<TypeName>,
    /// Types whose emission failed, with the emitter's error message.
    pub failed: Vec<(TypeName, String)>,
}

impl EmissionReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Emit every plan in insertion order. A failing plan is recorded and the
/// remaining plans are still emitted.
pub fn emit_all<E: PlanEmitter>(plans: &ResolvedPlans, emitter: &mut E) -> EmissionReport {
    let mut report = EmissionReport::default();

    plans.for_each_resolved_plan(|plan| match emitter.emit(plan) {
        Ok(()) => report.emitted.push(plan.source_type.clone()),
        Err(err) => {
            tracing::warn!(
                ty = %plan.source_type,
                error = %err,
                "failed to emit construction plan"
            );
            report
                .failed
                .push((plan.source_type.clone(), err.to_string()));
        }
    });

    tracing::debug!(
        emitted = report.emitted.len(),
        failed = report.failed.len(),
        "emission finished"
    );
    report
}

/// Input for the downstream registry aggregating the emitted plans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryRequest {
    pub package: String,
    pub children: Vec<String>,
    /// Emitted types only, in plan order.
    pub types: Vec<TypeName>,
}

impl RegistryRequest {
    /// `None` when no registry package is configured.
    pub fn from_report(config: &ResolverConfig, report: &EmissionReport) -> Option<Self> {
        let package = config.registry_package.clone()?;
        Some(Self {
            package,
            children: config.registry_children.clone(),
            types: report.emitted.clone(),
        })
    }
}
