//! Auxiliary facts attached to declarations: comments, attributes, access
//! level, conformances and generic parameters.
//!
//! Every decorator consumes the node and returns the updated value, so an
//! earlier clone is never affected by later decoration.

use std::fmt;

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::types::{AccessLevel, GenericParam, TypeRef};

/// An attribute such as `@MainActor` or `@available(iOS 17, *)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub args: Vec<String>,
}

impl Attribute {
    /// Create an attribute without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "@{}", self.name)
        } else {
            write!(f, "@{}({})", self.name, self.args.join(", "))
        }
    }
}

/// Leading trivia and modifiers shared by declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Decor {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessLevel>,
}

impl Decor {
    /// Comment, doc comment and attribute lines, in that order.
    pub fn leading_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for text in &self.comments {
            fragments.extend(text.split('\n').map(CodeFragment::comment));
        }
        for text in &self.doc {
            fragments.extend(text.split('\n').map(CodeFragment::doc_comment));
        }
        for attr in &self.attributes {
            fragments.push(CodeFragment::line(attr.to_string()));
        }
        fragments
    }

    /// The access keyword followed by a space, or nothing.
    pub fn access_prefix(&self) -> String {
        match self.access {
            Some(level) => format!("{} ", level),
            None => String::new(),
        }
    }
}

/// Decorators available on every declaration.
pub trait Decorated: Sized {
    /// Mutable access to the node's decorations.
    fn decor_mut(&mut self) -> &mut Decor;

    /// Attach a `//` comment line above the declaration.
    fn comment(mut self, line: impl Into<String>) -> Self {
        self.decor_mut().comments.push(line.into());
        self
    }

    /// Attach a `///` documentation line above the declaration.
    fn doc(mut self, line: impl Into<String>) -> Self {
        self.decor_mut().doc.push(line.into());
        self
    }

    /// Attach an attribute.
    fn attribute(mut self, attr: impl Into<Attribute>) -> Self {
        self.decor_mut().attributes.push(attr.into());
        self
    }

    /// Set the access level. The last call wins.
    fn access(mut self, level: AccessLevel) -> Self {
        self.decor_mut().access = Some(level);
        self
    }

    fn public(self) -> Self {
        self.access(AccessLevel::Public)
    }

    fn private(self) -> Self {
        self.access(AccessLevel::Private)
    }
}

/// Declarations with an inheritance/conformance clause.
pub trait Conforming: Sized {
    fn conformances_mut(&mut self) -> &mut Vec<TypeRef>;

    /// Append a conformance, superclass or raw type. Duplicates are kept.
    fn inherits(mut self, ty: impl Into<TypeRef>) -> Self {
        self.conformances_mut().push(ty.into());
        self
    }

    /// Append several conformances in order.
    fn inherits_all<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeRef>,
    {
        self.conformances_mut()
            .extend(types.into_iter().map(Into::into));
        self
    }
}

/// Declarations with a generic parameter clause.
pub trait Generic: Sized {
    fn generics_mut(&mut self) -> &mut Vec<GenericParam>;

    /// Append a generic parameter.
    fn generic(mut self, param: impl Into<GenericParam>) -> Self {
        self.generics_mut().push(param.into());
        self
    }
}

/// Implement [`Decorated`] for a struct with a `decor` field.
macro_rules! impl_decorated {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::decor::Decorated for $ty {
                fn decor_mut(&mut self) -> &mut $crate::decor::Decor {
                    &mut self.decor
                }
            }
        )*
    };
}

/// Implement [`Conforming`] for a struct with a `conformances` field.
macro_rules! impl_conforming {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::decor::Conforming for $ty {
                fn conformances_mut(&mut self) -> &mut Vec<$crate::types::TypeRef> {
                    &mut self.conformances
                }
            }
        )*
    };
}

/// Implement [`Generic`] for a struct with a `generics` field.
macro_rules! impl_generic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::decor::Generic for $ty {
                fn generics_mut(&mut self) -> &mut Vec<$crate::types::GenericParam> {
                    &mut self.generics
                }
            }
        )*
    };
}

pub(crate) use impl_conforming;
pub(crate) use impl_decorated;
pub(crate) use impl_generic;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Clone)]
    struct Sample {
        decor: Decor,
    }

    impl_decorated!(Sample);

    #[test]
    fn test_attribute_display() {
        assert_eq!(Attribute::new("MainActor").to_string(), "@MainActor");
        assert_eq!(
            Attribute::new("available").arg("iOS 17").arg("*").to_string(),
            "@available(iOS 17, *)"
        );
    }

    #[test]
    fn test_leading_fragment_order() {
        let sample = Sample::default()
            .attribute("discardableResult")
            .doc("Does things.")
            .comment("MARK: - Work");

        assert_eq!(
            sample.decor.leading_fragments(),
            vec![
                CodeFragment::comment("MARK: - Work"),
                CodeFragment::doc_comment("Does things."),
                CodeFragment::line("@discardableResult"),
            ]
        );
    }

    #[test]
    fn test_multi_line_comments_become_one_line_each() {
        let sample = Sample::default().comment("first\nsecond").doc("d1\nd2");

        assert_eq!(
            sample.decor.leading_fragments(),
            vec![
                CodeFragment::comment("first"),
                CodeFragment::comment("second"),
                CodeFragment::doc_comment("d1"),
                CodeFragment::doc_comment("d2"),
            ]
        );
    }

    #[test]
    fn test_access_last_call_wins() {
        let sample = Sample::default().private().public();
        assert_eq!(sample.decor.access_prefix(), "public ");
    }

    #[test]
    fn test_earlier_copy_is_unaffected() {
        let earlier = Sample::default().comment("first");
        let later = earlier.clone().comment("second");

        assert_eq!(earlier.decor.comments, vec!["first"]);
        assert_eq!(later.decor.comments, vec!["first", "second"]);
    }
}
