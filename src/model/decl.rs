//! Declaration value types.
//!
//! A host adapts its native semantic model (symbol table, parsed syntax tree,
//! reflection API) into these plain values. They carry only what resolution
//! consults: visibility, abstractness, annotations, the injection marker and
//! the declared members of a type.

use smol_str::SmolStr;

use crate::base::{Span, TypeName, simple_name, type_name};

// ============================================================================
// MODIFIERS
// ============================================================================

/// Access level of a declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    /// No explicit modifier: visible within the declaring package.
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

/// Whether a type is a class or an interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
}

/// How a dependency is requested.
///
/// `Lazy` and `Provider` wrap the target type; the target is still what gets
/// constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum DependencyKind {
    #[default]
    Instance,
    Lazy,
    Provider,
}

// ============================================================================
// MEMBERS
// ============================================================================

/// A parameter of a constructor or method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: SmolStr,
    /// The type to construct. For `Lazy<T>`/`Provider<T>` this is `T`.
    pub ty: TypeName,
    pub kind: DependencyKind,
    /// Binding name from a `Named` or custom qualifier annotation.
    pub qualifier: Option<SmolStr>,
}

impl ParamDecl {
    pub fn new(name: impl Into<SmolStr>, ty: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            ty: type_name(ty),
            kind: DependencyKind::Instance,
            qualifier: None,
        }
    }

    pub fn with_kind(mut self, kind: DependencyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<SmolStr>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }
}

/// A declared constructor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorDecl {
    pub visibility: Visibility,
    /// Carries the injection marker.
    pub marked: bool,
    pub params: Vec<ParamDecl>,
    pub span: Option<Span>,
}

impl ConstructorDecl {
    /// A public, unmarked constructor with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marked(mut self) -> Self {
        self.marked = true;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    /// Shorthand for a plain instance parameter.
    pub fn param(self, name: impl Into<SmolStr>, ty: impl AsRef<str>) -> Self {
        self.with_param(ParamDecl::new(name, ty))
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// A declared field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: SmolStr,
    pub visibility: Visibility,
    pub marked: bool,
    /// The field's dependency, described like a parameter.
    pub dependency: ParamDecl,
    pub span: Option<Span>,
}

impl FieldDecl {
    /// A package-visible, unmarked field.
    pub fn new(name: impl Into<SmolStr>, ty: impl AsRef<str>) -> Self {
        let name = name.into();
        Self {
            dependency: ParamDecl::new(name.clone(), ty),
            name,
            visibility: Visibility::Package,
            marked: false,
            span: None,
        }
    }

    pub fn marked(mut self) -> Self {
        self.marked = true;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_kind(mut self, kind: DependencyKind) -> Self {
        self.dependency.kind = kind;
        self
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<SmolStr>) -> Self {
        self.dependency.qualifier = Some(qualifier.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn ty(&self) -> &TypeName {
        &self.dependency.ty
    }
}

/// A declared method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: SmolStr,
    pub visibility: Visibility,
    pub marked: bool,
    pub params: Vec<ParamDecl>,
    pub span: Option<Span>,
}

impl MethodDecl {
    /// A package-visible, unmarked method without parameters.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Package,
            marked: false,
            params: Vec::new(),
            span: None,
        }
    }

    pub fn marked(mut self) -> Self {
        self.marked = true;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    pub fn param(self, name: impl Into<SmolStr>, ty: impl AsRef<str>) -> Self {
        self.with_param(ParamDecl::new(name, ty))
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

// ============================================================================
// TYPES
// ============================================================================

/// A declared type and its members, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: TypeName,
    pub kind: TypeKind,
    pub visibility: Visibility,
    pub is_abstract: bool,
    /// Annotation names as written, simple or qualified.
    pub annotations: Vec<SmolStr>,
    pub superclass: Option<TypeName>,
    /// Every constructor the type declares, including an implicit default
    /// constructor. Hosts must list that one explicitly: a type with no
    /// entries here is treated as having no usable constructor.
    pub constructors: Vec<ConstructorDecl>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    pub span: Option<Span>,
}

impl TypeDecl {
    /// A public concrete class with no members.
    pub fn class(name: impl AsRef<str>) -> Self {
        Self {
            name: type_name(name),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            is_abstract: false,
            annotations: Vec::new(),
            superclass: None,
            constructors: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            span: None,
        }
    }

    /// A public interface.
    pub fn interface(name: impl AsRef<str>) -> Self {
        Self {
            kind: TypeKind::Interface,
            is_abstract: true,
            ..Self::class(name)
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn annotated(mut self, annotation: impl Into<SmolStr>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn extends(mut self, superclass: impl AsRef<str>) -> Self {
        self.superclass = Some(type_name(superclass));
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Interfaces count as abstract.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract || self.kind == TypeKind::Interface
    }

    /// Match an annotation by simple name.
    pub fn has_annotation(&self, name: &str) -> bool {
        let wanted = simple_name(name);
        self.annotations
            .iter()
            .any(|annotation| simple_name(annotation) == wanted)
    }

    /// Whether this type itself declares marked fields or methods.
    ///
    /// Marked constructors do not count: they are handled by the type's own
    /// construction plan, not by member injection.
    pub fn has_injected_members(&self) -> bool {
        self.fields.iter().any(|field| field.marked)
            || self.methods.iter().any(|method| method.marked)
    }

    pub fn marked_constructors(&self) -> impl Iterator<Item = &ConstructorDecl> {
        self.constructors.iter().filter(|ctor| ctor.marked)
    }
}
