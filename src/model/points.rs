//! Injection points: the places where a program asks for injection.

use super::decl::{ConstructorDecl, FieldDecl, MethodDecl, ParamDecl, TypeDecl};
use crate::base::{Span, TypeName};

/// The callable a [`InjectionPoint::Parameter`] belongs to.
#[derive(Clone, Copy, Debug)]
pub enum Callable<'a> {
    Constructor(&'a ConstructorDecl),
    Method(&'a MethodDecl),
}

impl<'a> Callable<'a> {
    pub fn params(&self) -> &'a [ParamDecl] {
        match *self {
            Callable::Constructor(ctor) => &ctor.params,
            Callable::Method(method) => &method.params,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match *self {
            Callable::Constructor(ctor) => ctor.span,
            Callable::Method(method) => method.span,
        }
    }
}

/// One place that requests injection.
#[derive(Clone, Copy, Debug)]
pub enum InjectionPoint<'a> {
    Constructor {
        owner: &'a TypeDecl,
        constructor: &'a ConstructorDecl,
    },
    Field {
        owner: &'a TypeDecl,
        field: &'a FieldDecl,
    },
    Parameter {
        owner: &'a TypeDecl,
        callable: Callable<'a>,
        parameter: &'a ParamDecl,
    },
}

impl<'a> InjectionPoint<'a> {
    pub fn owner(&self) -> &'a TypeDecl {
        match *self {
            InjectionPoint::Constructor { owner, .. }
            | InjectionPoint::Field { owner, .. }
            | InjectionPoint::Parameter { owner, .. } => owner,
        }
    }

    /// The type this point needs constructed. A constructor point constructs
    /// its owner.
    pub fn dependency_type(&self) -> &'a TypeName {
        match *self {
            InjectionPoint::Constructor { owner, .. } => &owner.name,
            InjectionPoint::Field { field, .. } => field.ty(),
            InjectionPoint::Parameter { parameter, .. } => &parameter.ty,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match *self {
            InjectionPoint::Constructor { constructor, .. } => constructor.span,
            InjectionPoint::Field { field, .. } => field.span,
            InjectionPoint::Parameter { callable, .. } => callable.span(),
        }
    }

    /// Parameter points of a constructor point; empty for other shapes.
    pub fn parameter_points(&self) -> impl Iterator<Item = InjectionPoint<'a>> + use<'a> {
        let constructor = match *self {
            InjectionPoint::Constructor { owner, constructor } => Some((owner, constructor)),
            _ => None,
        };
        constructor.into_iter().flat_map(|(owner, constructor)| {
            constructor
                .params
                .iter()
                .map(move |parameter| InjectionPoint::Parameter {
                    owner,
                    callable: Callable::Constructor(constructor),
                    parameter,
                })
        })
    }
}

/// A method carrying the injection marker.
#[derive(Clone, Copy, Debug)]
pub struct MarkedMethod<'a> {
    pub owner: &'a TypeDecl,
    pub method: &'a MethodDecl,
}

impl<'a> MarkedMethod<'a> {
    pub fn parameter_points(&self) -> impl Iterator<Item = InjectionPoint<'a>> + use<'a> {
        let owner = self.owner;
        let method = self.method;
        method
            .params
            .iter()
            .map(move |parameter| InjectionPoint::Parameter {
                owner,
                callable: Callable::Method(method),
                parameter,
            })
    }
}
