//! Value and reference type declarations.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use super::type_header;
use crate::{
    decor::{Decor, impl_conforming, impl_decorated, impl_generic},
    node::Node,
    render::{Declaration, RenderContext, braced},
    sequence::NodeList,
    types::{GenericParam, TypeRef},
};

/// A `struct` declaration.
///
/// Member names are not checked for uniqueness; that is the compiler's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub name: String,
    #[serde(default)]
    pub decor: Decor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conformances: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Node>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            generics: Vec::new(),
            conformances: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Append one member.
    pub fn member(mut self, member: impl Into<Node>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Append the members produced by a builder closure.
    pub fn members(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.members.extend(NodeList::build(f));
        self
    }
}

impl Declaration for Struct {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        let header = type_header(
            &self.decor,
            "struct",
            &self.name,
            &self.generics,
            &self.conformances,
        );
        fragments.push(braced(header, &self.members, cx));
        fragments
    }
}

/// A `class` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(default)]
    pub decor: Decor,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericParam>,
    /// Superclass first, then protocols.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conformances: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Node>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            is_final: false,
            generics: Vec::new(),
            conformances: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Mark as `final`.
    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn member(mut self, member: impl Into<Node>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn members(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.members.extend(NodeList::build(f));
        self
    }
}

impl Declaration for Class {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        let keyword = if self.is_final { "final class" } else { "class" };
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

impl_decorated!(Struct, Class);
impl_conforming!(Struct, Class);
impl_generic!(Struct, Class);
