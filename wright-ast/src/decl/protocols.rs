//! Protocols and their requirements.

use log::warn;
use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use super::type_header;
use crate::{
    decor::{Decor, impl_conforming, impl_decorated},
    node::Node,
    render::{Declaration, RenderContext},
    sequence::NodeList,
    types::{TypeRef, inheritance_clause},
};

/// A `protocol` declaration.
///
/// Functions, initializers and properties among the members are rendered as
/// requirements (signatures without bodies).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    pub name: String,
    #[serde(default)]
    pub decor: Decor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conformances: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Node>,
}

impl Protocol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            conformances: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, member: impl Into<Node>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn members(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.members.extend(NodeList::build(f));
        self
    }

    fn requirement(member: &Node, cx: &RenderContext) -> Vec<CodeFragment> {
        match member {
            Node::Function(f) => {
                if !f.body.is_empty() {
                    warn!("protocol requirement `{}` has a body; dropping it", f.name);
                }
                f.requirement(cx)
            }
            Node::Initializer(init) => init.requirement(cx),
            Node::Property(p) => p.requirement(),
            other => other.declaration(cx),
        }
    }
}

impl Declaration for Protocol {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        let header = type_header(&self.decor, "protocol", &self.name, &[], &self.conformances);
        let body = self
            .members
            .iter()
            .flat_map(|m| Self::requirement(m, cx))
            .collect();
        fragments.push(CodeFragment::braced(header, body));
        fragments
    }
}

/// An `associatedtype` requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociatedType {
    pub name: String,
    #[serde(default)]
    pub decor: Decor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conformances: Vec<TypeRef>,
}

impl AssociatedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            conformances: Vec::new(),
        }
    }
}

impl Declaration for AssociatedType {
    fn declaration(&self, _cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        fragments.push(CodeFragment::line(format!(
            "associatedtype {}{}",
            self.name,
            inheritance_clause(&self.conformances)
        )));
        fragments
    }
}

impl_decorated!(Protocol, AssociatedType);
impl_conforming!(Protocol, AssociatedType);
