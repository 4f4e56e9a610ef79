//! Qualified type names.

use std::sync::Arc;

/// Canonical qualified name of a declared type, e.g. `com.example.Engine`.
///
/// Identity of a type throughout the resolver is by this string. Cloning is a
/// reference count increment.
pub type TypeName = Arc<str>;

/// Build a [`TypeName`] from anything string-like.
pub fn type_name(name: impl AsRef<str>) -> TypeName {
    Arc::from(name.as_ref())
}

/// Last segment of a dotted qualified name.
///
/// Nested type separators (`$`) are kept, only package qualification is
/// stripped: `a.b.Outer$Inner` → `Outer$Inner`.
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map(|(_, simple)| simple)
        .unwrap_or(qualified)
}
