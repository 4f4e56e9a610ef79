//! Declaration Inspector: read-only facade over a [`SemanticModel`].
//!
//! Surfaces the marked constructors, fields and methods of the types visible
//! in one discovery pass, plus the handful of per-type queries the validity
//! rules need. Nothing here has side effects; an empty answer is never an
//! error.

use super::decl::{ConstructorDecl, TypeDecl, Visibility};
use super::points::{InjectionPoint, MarkedMethod};
use super::program::SemanticModel;
use crate::base::{TypeName, constants};

/// Query facade over the types visible in one discovery pass.
#[derive(Clone, Copy)]
pub struct DeclarationInspector<'a> {
    model: &'a dyn SemanticModel,
    roots: &'a [TypeName],
}

impl<'a> DeclarationInspector<'a> {
    /// `roots` are the types revealed in this pass, in the order the host
    /// presents them. That order drives the order of discovered points.
    pub fn new(model: &'a dyn SemanticModel, roots: &'a [TypeName]) -> Self {
        Self { model, roots }
    }

    /// Root types known to the model. Unknown roots are skipped.
    fn root_decls(self) -> impl Iterator<Item = &'a TypeDecl> + use<'a> {
        let model = self.model;
        self.roots.iter().filter_map(move |name| model.type_decl(name))
    }

    pub fn find_marked_constructors(self) -> impl Iterator<Item = InjectionPoint<'a>> + use<'a> {
        self.root_decls().flat_map(|owner| {
            owner
                .marked_constructors()
                .map(move |constructor| InjectionPoint::Constructor { owner, constructor })
        })
    }

    pub fn find_marked_fields(self) -> impl Iterator<Item = InjectionPoint<'a>> + use<'a> {
        self.root_decls().flat_map(|owner| {
            owner
                .fields
                .iter()
                .filter(|field| field.marked)
                .map(move |field| InjectionPoint::Field { owner, field })
        })
    }

    pub fn find_marked_methods(self) -> impl Iterator<Item = MarkedMethod<'a>> + use<'a> {
        self.root_decls().flat_map(|owner| {
            owner
                .methods
                .iter()
                .filter(|method| method.marked)
                .map(move |method| MarkedMethod { owner, method })
        })
    }

    /// Look up any type the model knows, visible in this pass or not.
    pub fn lookup(self, name: &str) -> Option<&'a TypeDecl> {
        self.model.type_decl(name)
    }

    pub fn declared_constructors_of(self, ty: &TypeDecl) -> &[ConstructorDecl] {
        &ty.constructors
    }

    pub fn is_abstract(self, ty: &TypeDecl) -> bool {
        ty.is_abstract()
    }

    pub fn visibility_of(self, ty: &TypeDecl) -> Visibility {
        ty.visibility
    }

    pub fn has_annotation(self, ty: &TypeDecl, name: &str) -> bool {
        ty.has_annotation(name)
    }

    pub fn is_singleton_scoped(self, ty: &TypeDecl) -> bool {
        self.has_annotation(ty, constants::SINGLETON)
    }

    pub fn is_eager_singleton(self, ty: &TypeDecl) -> bool {
        self.has_annotation(ty, constants::PROVIDES_SINGLETON)
    }
}

impl std::fmt::Debug for DeclarationInspector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarationInspector")
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}
