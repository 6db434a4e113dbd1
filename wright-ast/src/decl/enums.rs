//! Tagged unions: `enum` declarations and their cases.
//!
//! An [`EnumCase`] renders differently depending on who asks:
//!
//! | capability  | without payload | with associated values   | with raw value   |
//! |-------------|-----------------|--------------------------|------------------|
//! | declaration | `case ok`       | `case failure(code: Int)`| `case ok = 200`  |
//! | expression  | `.ok`           | `.failure(code)`         | `.ok`            |
//! | pattern     | `.ok`           | `.failure(let code)`     | `.ok`            |

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use super::type_header;
use crate::{
    decor::{Attribute, Decor, impl_conforming, impl_decorated, impl_generic},
    literal::Literal,
    node::Node,
    render::{Declaration, Expression, PatternSyntax, RenderContext, braced},
    sequence::NodeList,
    types::{GenericParam, TypeRef},
};

/// An `enum` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub decor: Decor,
    #[serde(default)]
    pub is_indirect: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericParam>,
    /// Raw type first (if any), then protocols.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conformances: Vec<TypeRef>,
    /// Cases and other members, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Node>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            is_indirect: false,
            generics: Vec::new(),
            conformances: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Mark as `indirect`.
    pub fn indirect(mut self) -> Self {
        self.is_indirect = true;
        self
    }

    /// Append one case.
    pub fn case(mut self, case: EnumCase) -> Self {
        self.members.push(case.into());
        self
    }

    /// Append the cases produced by a builder closure.
    pub fn cases(self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.members(f)
    }

    /// Append a non-case member (method, computed property, nested type).
    pub fn member(mut self, member: impl Into<Node>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn members(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.members.extend(NodeList::build(f));
        self
    }

    /// Iterate over the case members only.
    pub fn enum_cases(&self) -> impl Iterator<Item = &EnumCase> {
        self.members.iter().filter_map(|m| match m {
            Node::EnumCase(case) => Some(case),
            _ => None,
        })
    }
}

impl Declaration for Enum {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        let keyword = if self.is_indirect { "indirect enum" } else { "enum" };
        let header = type_header(
            &self.decor,
            keyword,
            &self.name,
            &self.generics,
            &self.conformances,
        );
        fragments.push(braced(header, &self.members, cx));
        fragments
    }
}

/// A named, typed payload of an enum case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedValue {
    pub name: String,
    pub ty: TypeRef,
}

/// A single enum case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EnumCaseFields")]
pub struct EnumCase {
    pub name: String,
    pub decor: Decor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<Literal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associated_values: Vec<AssociatedValue>,
}

impl EnumCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            raw_value: None,
            associated_values: Vec::new(),
        }
    }

    /// Set the raw value: `case ok = 200`.
    ///
    /// # Panics
    ///
    /// If the literal is a tuple, array or dictionary, if a raw value was
    /// already set, or if the case has associated values.
    pub fn equals(mut self, value: impl Into<Literal>) -> Self {
        let value = value.into();
        assert!(
            value.is_raw_value(),
            "case `{}`: {} literals cannot be raw values",
            self.name,
            value.kind_name()
        );
        assert!(
            self.raw_value.is_none(),
            "case `{}` already has a raw value",
            self.name
        );
        assert!(
            self.associated_values.is_empty(),
            "case `{}` has associated values and cannot take a raw value",
            self.name
        );
        self.raw_value = Some(value);
        self
    }

    /// Append an associated value: `case failure(code: Int)`.
    ///
    /// # Panics
    ///
    /// If the case already has a raw value.
    pub fn associated_value(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        assert!(
            self.raw_value.is_none(),
            "case `{}` has a raw value and cannot take associated values",
            self.name
        );
        self.associated_values.push(AssociatedValue {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    /// Attach a `//` comment line above the case.
    ///
    /// Cases take comments and attributes but no access level, so this type
    /// does not implement [`Decorated`](crate::decor::Decorated).
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.decor.comments.push(line.into());
        self
    }

    /// Attach a `///` documentation line above the case.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.decor.doc.push(line.into());
        self
    }

    /// Attach an attribute such as `@available(*, deprecated)`.
    pub fn attribute(mut self, attr: impl Into<Attribute>) -> Self {
        self.decor.attributes.push(attr.into());
        self
    }

    /// Check the raw value against the rest of the case.
    fn validate(&self) -> Result<(), String> {
        if let Some(level) = self.decor.access {
            return Err(format!(
                "case `{}` cannot take an access level (got `{}`)",
                self.name, level
            ));
        }
        match &self.raw_value {
            Some(raw) if !raw.is_raw_value() => Err(format!(
                "case `{}`: {} literals cannot be raw values",
                self.name,
                raw.kind_name()
            )),
            Some(_) if !self.associated_values.is_empty() => Err(format!(
                "case `{}` cannot have both a raw value and associated values",
                self.name
            )),
            _ => Ok(()),
        }
    }

    fn applied(&self, binding: &str) -> String {
        if self.associated_values.is_empty() {
            format!(".{}", self.name)
        } else {
            let args: Vec<String> = self
                .associated_values
                .iter()
                .map(|v| format!("{}{}", binding, v.name))
                .collect();
            format!(".{}({})", self.name, args.join(", "))
        }
    }
}

/// Wire form of [`EnumCase`]; checked on the way in.
#[derive(Deserialize)]
struct EnumCaseFields {
    name: String,
    #[serde(default)]
    decor: Decor,
    #[serde(default)]
    raw_value: Option<Literal>,
    #[serde(default)]
    associated_values: Vec<AssociatedValue>,
}

impl TryFrom<EnumCaseFields> for EnumCase {
    type Error = String;

    fn try_from(fields: EnumCaseFields) -> Result<Self, Self::Error> {
        let case = Self {
            name: fields.name,
            decor: fields.decor,
            raw_value: fields.raw_value,
            associated_values: fields.associated_values,
        };
        case.validate()?;
        Ok(case)
    }
}

impl Declaration for EnumCase {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut line = format!("case {}", self.name);
        if !self.associated_values.is_empty() {
            let params: Vec<String> = self
                .associated_values
                .iter()
                .map(|v| format!("{}: {}", v.name, v.ty))
                .collect();
            line.push_str(&format!("({})", params.join(", ")));
        }
        if let Some(raw) = &self.raw_value {
            line.push_str(" = ");
            line.push_str(&raw.expression(cx));
        }

        let mut fragments = self.decor.leading_fragments();
        fragments.push(CodeFragment::line(line));
        fragments
    }
}

impl Expression for EnumCase {
    fn expression(&self, _cx: &RenderContext) -> String {
        self.applied("")
    }
}

impl PatternSyntax for EnumCase {
    fn pattern(&self, _cx: &RenderContext) -> String {
        self.applied("let ")
    }
}

impl_decorated!(Enum);
impl_conforming!(Enum);
impl_generic!(Enum);
