//! Swift type references, access levels and generic parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::effects::EffectSpecifier;

/// A reference to a Swift type.
///
/// Types are kept structural so that wrappers such as optionals render with
/// the parentheses Swift requires (`((Int) -> Void)?`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeRef {
    /// A named type (`Int`, `Result`, `Self`, `any Error`).
    Named(String),
    /// An optional type: `T?`.
    Optional(Box<TypeRef>),
    /// An array type: `[T]`.
    Array(Box<TypeRef>),
    /// A dictionary type: `[K: V]`.
    Dictionary {
        key: Box<TypeRef>,
        value: Box<TypeRef>,
    },
    /// A tuple type: `(A, B)`.
    Tuple(Vec<TypeRef>),
    /// A generic type with type arguments: `Result<T, E>`.
    Generic { base: String, args: Vec<TypeRef> },
    /// A function type: `(A) async throws -> R`.
    Function {
        params: Vec<TypeRef>,
        effects: EffectSpecifier,
        returns: Box<TypeRef>,
    },
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create an optional type reference.
    pub fn optional(inner: impl Into<TypeRef>) -> Self {
        Self::Optional(Box::new(inner.into()))
    }

    /// Create an array type reference.
    pub fn array(inner: impl Into<TypeRef>) -> Self {
        Self::Array(Box::new(inner.into()))
    }

    /// Create a dictionary type reference.
    pub fn dictionary(key: impl Into<TypeRef>, value: impl Into<TypeRef>) -> Self {
        Self::Dictionary {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
        }
    }

    /// Create a tuple type reference.
    pub fn tuple(elements: impl IntoIterator<Item = TypeRef>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    /// Create a generic type reference.
    pub fn generic(base: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        Self::Generic {
            base: base.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Create a function type reference.
    pub fn function(
        params: impl IntoIterator<Item = TypeRef>,
        effects: EffectSpecifier,
        returns: impl Into<TypeRef>,
    ) -> Self {
        Self::Function {
            params: params.into_iter().collect(),
            effects,
            returns: Box::new(returns.into()),
        }
    }

    /// `Void`.
    pub fn void() -> Self {
        Self::named("Void")
    }

    /// Check if this type is optional.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Get the inner type for wrapper types (Optional, Array).
    pub fn inner_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Optional(inner) | Self::Array(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Optional(inner) => match inner.as_ref() {
                Self::Function { .. } => write!(f, "({})?", inner),
                _ => write!(f, "{}?", inner),
            },
            Self::Array(inner) => write!(f, "[{}]", inner),
            Self::Dictionary { key, value } => write!(f, "[{}: {}]", key, value),
            Self::Tuple(elements) => write!(f, "({})", join(elements)),
            Self::Generic { base, args } => write!(f, "{}<{}>", base, join(args)),
            Self::Function {
                params,
                effects,
                returns,
            } => write!(f, "({}){} -> {}", join(params), effects.suffix(), returns),
        }
    }
}

fn join(types: &[TypeRef]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Access level keyword placed in front of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Open,
    Public,
    Package,
    Internal,
    Fileprivate,
    Private,
}

impl AccessLevel {
    /// The Swift keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Public => "public",
            Self::Package => "package",
            Self::Internal => "internal",
            Self::Fileprivate => "fileprivate",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generic type parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParam {
    /// Parameter name (e.g., "T", "Element").
    pub name: String,
    /// Protocol or superclass constraints, joined with `&`.
    pub bounds: Vec<TypeRef>,
}

impl GenericParam {
    /// Create a new unconstrained generic parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    /// Add a constraint.
    pub fn bound(mut self, bound: impl Into<TypeRef>) -> Self {
        self.bounds.push(bound.into());
        self
    }
}

impl From<&str> for GenericParam {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for GenericParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bounds.is_empty() {
            f.write_str(&self.name)
        } else {
            let bounds: Vec<String> = self.bounds.iter().map(ToString::to_string).collect();
            write!(f, "{}: {}", self.name, bounds.join(" & "))
        }
    }
}

/// Render a generic parameter clause, empty when there are no parameters.
pub(crate) fn generic_clause(params: &[GenericParam]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        let params: Vec<String> = params.iter().map(ToString::to_string).collect();
        format!("<{}>", params.join(", "))
    }
}

/// Render a conformance clause (`: A, B`), empty when there is nothing to inherit.
pub(crate) fn inheritance_clause(types: &[TypeRef]) -> String {
    if types.is_empty() {
        String::new()
    } else {
        format!(": {}", join(types))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Throws;

    #[test]
    fn test_wrappers() {
        assert_eq!(TypeRef::optional("String").to_string(), "String?");
        assert_eq!(TypeRef::array("Int").to_string(), "[Int]");
        assert_eq!(
            TypeRef::dictionary("String", TypeRef::array("Int")).to_string(),
            "[String: [Int]]"
        );
        assert_eq!(
            TypeRef::tuple([TypeRef::named("Int"), TypeRef::named("Bool")]).to_string(),
            "(Int, Bool)"
        );
    }

    #[test]
    fn test_generic() {
        let ty = TypeRef::generic("Result", [TypeRef::named("Data"), TypeRef::named("Error")]);
        assert_eq!(ty.to_string(), "Result<Data, Error>");
    }

    #[test]
    fn test_function_type_inside_optional_is_parenthesized() {
        let callback = TypeRef::function(
            [TypeRef::named("Int")],
            EffectSpecifier::Async.with_throws(Throws::untyped()),
            TypeRef::void(),
        );
        assert_eq!(callback.to_string(), "(Int) async throws -> Void");
        assert_eq!(
            TypeRef::optional(callback).to_string(),
            "((Int) async throws -> Void)?"
        );
    }

    #[test]
    fn test_function_type_with_typed_error() {
        let handler = TypeRef::function(
            [TypeRef::function(
                Vec::new(),
                EffectSpecifier::Throws(Throws::typed("IOError")),
                "Data",
            )],
            EffectSpecifier::Async.with_throws(Throws::typed("LoadError")),
            TypeRef::optional("Data"),
        );
        assert_eq!(
            handler.to_string(),
            "(() throws(IOError) -> Data) async throws(LoadError) -> Data?"
        );
    }

    #[test]
    fn test_generic_param() {
        let param = GenericParam::new("T").bound("Hashable").bound("Sendable");
        assert_eq!(param.to_string(), "T: Hashable & Sendable");
        assert_eq!(
            generic_clause(&[param, GenericParam::new("U")]),
            "<T: Hashable & Sendable, U>"
        );
        assert_eq!(generic_clause(&[]), "");
    }

    #[test]
    fn test_inheritance_clause_keeps_duplicates() {
        let clause = inheritance_clause(&["Equatable".into(), "Equatable".into()]);
        assert_eq!(clause, ": Equatable, Equatable");
    }
}
