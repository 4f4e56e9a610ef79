//! Resolution Map: one construction plan per type, in discovery order.

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::plan::ConstructionPlan;
use crate::base::TypeName;

/// Insertion-ordered table of construction plans keyed by type.
///
/// First successful insertion for a type wins; later ones are no-ops. The
/// insertion order becomes the emission order.
#[derive(Clone, Debug, Default)]
pub struct ResolutionMap {
    plans: IndexMap<TypeName, ConstructionPlan>,
}

impl ResolutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_resolved(&self, ty: &str) -> bool {
        self.plans.contains_key(ty)
    }

    /// Insert a plan unless its type is already resolved. Returns whether the
    /// plan was inserted.
    pub fn insert(&mut self, plan: ConstructionPlan) -> bool {
        match self.plans.entry(plan.source_type.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(plan);
                true
            }
        }
    }

    pub fn get(&self, ty: &str) -> Option<&ConstructionPlan> {
        self.plans.get(ty)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Freeze the map for hand-off.
    pub fn freeze(self) -> ResolvedPlans {
        ResolvedPlans { plans: self.plans }
    }
}

/// The finished, immutable Resolution Map handed to emission collaborators.
#[derive(Clone, Debug, Default)]
pub struct ResolvedPlans {
    plans: IndexMap<TypeName, ConstructionPlan>,
}

impl ResolvedPlans {
    /// Call `callback` once per plan, in insertion order.
    pub fn for_each_resolved_plan(&self, mut callback: impl FnMut(&ConstructionPlan)) {
        for plan in self.plans.values() {
            callback(plan);
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ConstructionPlan> {
        self.plans.values()
    }

    /// Resolved types, in insertion order.
    pub fn types(&self) -> impl ExactSizeIterator<Item = &TypeName> {
        self.plans.keys()
    }

    pub fn get(&self, ty: &str) -> Option<&ConstructionPlan> {
        self.plans.get(ty)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Serialize the plans, in order, as a JSON array.
    #[cfg(feature = "interchange")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        let plans: Vec<&ConstructionPlan> = self.plans.values().collect();
        serde_json::to_string_pretty(&plans)
    }
}

impl<'a> IntoIterator for &'a ResolvedPlans {
    type Item = &'a ConstructionPlan;
    type IntoIter = indexmap::map::Values<'a, TypeName, ConstructionPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.values()
    }
}
