//! Validity Checker: eligibility rules for injection points and dependency
//! types.
//!
//! Each rule reports what it finds to the sink and answers with a plain
//! `bool`. A `false` means "no plan from here"; it never stops the pass.

use crate::base::constants::INJECT;
use crate::config::ExclusionPolicy;
use crate::model::{ConstructorDecl, DeclarationInspector, FieldDecl, MarkedMethod, TypeDecl};

use super::diagnostics::{Diagnostic, DiagnosticSink, Location, codes};

/// Stateless eligibility rules over one pass's declarations, parameterized by
/// the session's exclusions.
#[derive(Clone, Copy)]
pub struct ValidityChecker<'a> {
    inspector: DeclarationInspector<'a>,
    exclusions: &'a dyn ExclusionPolicy,
}

impl<'a> ValidityChecker<'a> {
    pub fn new(
        inspector: DeclarationInspector<'a>,
        exclusions: &'a dyn ExclusionPolicy,
    ) -> Self {
        Self {
            inspector,
            exclusions,
        }
    }

    fn is_public_owner(&self, owner: &TypeDecl) -> bool {
        self.inspector.visibility_of(owner).is_public()
    }

    /// Reports an owner with several marked constructors, once per owner: the
    /// report is attached to the first marked constructor in declaration
    /// order. Never blocks resolution, so always returns `true`.
    pub fn is_single_marked_constructor(
        &self,
        owner: &TypeDecl,
        constructor: &ConstructorDecl,
        sink: &mut dyn DiagnosticSink,
    ) -> bool {
        let mut marked = owner.marked_constructors();
        let first = marked.next();
        let has_siblings = marked.next().is_some();

        if has_siblings && first.is_some_and(|first| std::ptr::eq(first, constructor)) {
            sink.report(Diagnostic::error(
                codes::MULTIPLE_MARKED_CONSTRUCTORS,
                Location::of_type(owner.name.clone()).with_span(constructor.span),
                format!(
                    "Class {} cannot have more than one @{INJECT} annotated constructor.",
                    owner.name
                ),
            ));
        }
        true
    }

    /// A marked constructor must not be private and its owner must be public.
    pub fn is_valid_marked_constructor(
        &self,
        owner: &TypeDecl,
        constructor: &ConstructorDecl,
        sink: &mut dyn DiagnosticSink,
    ) -> bool {
        let location = Location::of_type(owner.name.clone()).with_span(constructor.span);
        let mut valid = true;

        if constructor.visibility.is_private() {
            sink.report(Diagnostic::error(
                codes::PRIVATE_CONSTRUCTOR,
                location.clone(),
                format!(
                    "@{INJECT} constructors must not be private in class {}.",
                    owner.name
                ),
            ));
            valid = false;
        }

        if !self.is_public_owner(owner) {
            sink.report(Diagnostic::error(
                codes::NON_PUBLIC_OWNER,
                location,
                format!(
                    "Class {} is not public. @{INJECT} constructors are not allowed in non public classes.",
                    owner.name
                ),
            ));
            valid = false;
        }

        valid
    }

    /// A marked field must not be private and its owner must be public.
    pub fn is_valid_marked_field(
        &self,
        owner: &TypeDecl,
        field: &FieldDecl,
        sink: &mut dyn DiagnosticSink,
    ) -> bool {
        let location = Location::of_type(owner.name.clone())
            .with_member(field.name.clone())
            .with_span(field.span);
        let mut valid = true;

        if field.visibility.is_private() {
            sink.report(Diagnostic::error(
                codes::PRIVATE_FIELD,
                location.clone(),
                format!(
                    "@{INJECT} annotated fields must be non private: {}#{}",
                    owner.name, field.name
                ),
            ));
            valid = false;
        }

        if !self.is_public_owner(owner) {
            sink.report(Diagnostic::error(
                codes::NON_PUBLIC_OWNER,
                location,
                format!(
                    "Class {} is not public. @{INJECT} fields are not allowed in non public classes.",
                    owner.name
                ),
            ));
            valid = false;
        }

        valid
    }

    /// A marked method must not be private and its owner must be public.
    pub fn is_valid_marked_method(
        &self,
        marked: &MarkedMethod<'_>,
        sink: &mut dyn DiagnosticSink,
    ) -> bool {
        let MarkedMethod { owner, method } = *marked;
        let location = Location::of_type(owner.name.clone())
            .with_member(method.name.clone())
            .with_span(method.span);
        let mut valid = true;

        if method.visibility.is_private() {
            sink.report(Diagnostic::error(
                codes::PRIVATE_METHOD,
                location.clone(),
                format!(
                    "@{INJECT} annotated methods must be non private: {}#{}",
                    owner.name, method.name
                ),
            ));
            valid = false;
        }

        if !self.is_public_owner(owner) {
            sink.report(Diagnostic::error(
                codes::NON_PUBLIC_OWNER,
                location,
                format!(
                    "Class {} is not public. @{INJECT} methods are not allowed in non public classes.",
                    owner.name
                ),
            ));
            valid = false;
        }

        valid
    }

    /// Whether a type may be constructed by a plan at all. Excluded, abstract
    /// and private types are skipped without a diagnostic.
    pub fn is_eligible_dependency_type(&self, ty: &TypeDecl) -> bool {
        !self.exclusions.is_excluded(&ty.name)
            && !self.inspector.is_abstract(ty)
            && !self.inspector.visibility_of(ty).is_private()
    }
}

impl std::fmt::Debug for ValidityChecker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidityChecker").finish_non_exhaustive()
    }
}
