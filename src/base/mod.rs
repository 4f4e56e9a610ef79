//! Foundation types for the injector toolchain.
//!
//! This module provides fundamental types used throughout the resolver:
//! - [`TypeName`] - Canonical qualified type names
//! - [`Position`], [`Span`] - Line/column positions of declarations
//! - Well-known annotation names
//!
//! This module has NO dependencies on other injector modules.

pub mod constants;
mod name;
mod position;

pub use name::{TypeName, simple_name, type_name};
pub use position::{Position, Span};
