//! In-memory program model.
//!
//! `ProgramModel` owns a set of [`TypeDecl`]s keyed by qualified name and
//! answers both [`SemanticModel`] and [`HierarchyQuery`]. Hosts that already
//! have a symbol table implement the traits directly instead.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use super::decl::TypeDecl;
use crate::base::TypeName;

/// Read-only access to the declarations of the program under analysis.
///
/// Lookups may reach any type the host knows about, not only the types
/// visible in the current discovery pass. An absent answer is valid.
pub trait SemanticModel {
    fn type_decl(&self, name: &str) -> Option<&TypeDecl>;
}

/// Locates the nearest type in a superclass chain that carries its own
/// injectable members.
pub trait HierarchyQuery {
    fn nearest_ancestor_with_injected_members(&self, ty: &TypeDecl) -> Option<TypeName>;
}

/// All declarations of a program, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ProgramModel {
    types: IndexMap<TypeName, TypeDecl>,
}

impl ProgramModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a type declaration.
    pub fn add(&mut self, decl: TypeDecl) -> &mut Self {
        self.types.insert(decl.name.clone(), decl);
        self
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, decl: TypeDecl) -> Self {
        self.add(decl);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Names of every declared type, in insertion order.
    pub fn type_names(&self) -> Vec<TypeName> {
        self.types.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl SemanticModel for ProgramModel {
    fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.get(name)
    }
}

impl HierarchyQuery for ProgramModel {
    /// Walks `ty` and then its superclasses. The type itself counts, so a type
    /// with its own marked fields answers with its own name.
    fn nearest_ancestor_with_injected_members(&self, ty: &TypeDecl) -> Option<TypeName> {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut current = Some(ty);

        while let Some(decl) = current {
            if !visited.insert(decl.name.as_ref()) {
                tracing::trace!(ty = %ty.name, at = %decl.name, "cyclic superclass chain");
                return None;
            }
            if decl.has_injected_members() {
                return Some(decl.name.clone());
            }
            current = decl
                .superclass
                .as_deref()
                .and_then(|superclass| self.get(superclass));
        }

        None
    }
}
