//! Construction plans: the resolved recipe for building one type.

use smol_str::SmolStr;

use crate::base::TypeName;
use crate::model::{DependencyKind, ParamDecl};

/// One constructor argument of a plan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Dependency {
    /// Parameter name as declared.
    pub name: SmolStr,
    pub ty: TypeName,
    pub kind: DependencyKind,
    pub qualifier: Option<SmolStr>,
}

impl From<&ParamDecl> for Dependency {
    fn from(param: &ParamDecl) -> Self {
        Self {
            name: param.name.clone(),
            ty: param.ty.clone(),
            kind: param.kind,
            qualifier: param.qualifier.clone(),
        }
    }
}

/// How a plan was discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum PlanOrigin {
    /// From a constructor carrying the injection marker.
    Explicit,
    /// From a dependency type with a single non-private no-arg constructor.
    Optimistic,
}

/// How to construct one type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ConstructionPlan {
    pub source_type: TypeName,
    /// Constructor arguments in declaration order. Empty for default
    /// construction.
    pub parameters: Vec<Dependency>,
    pub is_singleton_scoped: bool,
    pub is_eager_singleton: bool,
    /// Nearest type in the superclass chain (possibly the type itself) whose
    /// members need injecting after construction.
    pub super_type_with_injected_members: Option<TypeName>,
    pub origin: PlanOrigin,
}

impl ConstructionPlan {
    pub fn is_default_constructed(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Dependency types in parameter order, duplicates kept.
    pub fn parameter_types(&self) -> impl Iterator<Item = &TypeName> {
        self.parameters.iter().map(|dependency| &dependency.ty)
    }
}
