//! `extension` declarations.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    decor::{Decor, impl_conforming, impl_decorated},
    node::Node,
    render::{Declaration, RenderContext, braced},
    sequence::NodeList,
    types::{TypeRef, inheritance_clause},
};

/// Adds members or conformances to an existing type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub extended: TypeRef,
    #[serde(default)]
    pub decor: Decor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conformances: Vec<TypeRef>,
    /// Raw `where` requirements, e.g. `Element: Equatable`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Node>,
}

impl Extension {
    pub fn new(extended: impl Into<TypeRef>) -> Self {
        Self {
            extended: extended.into(),
            decor: Decor::default(),
            conformances: Vec::new(),
            requirements: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Add a `where` requirement.
    pub fn where_(mut self, requirement: impl Into<String>) -> Self {
        self.requirements.push(requirement.into());
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

impl Declaration for Extension {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        let mut header = format!(
            "{}extension {}{}",
            self.decor.access_prefix(),
            self.extended,
            inheritance_clause(&self.conformances)
        );
        if !self.requirements.is_empty() {
            header.push_str(" where ");
            header.push_str(&self.requirements.join(", "));
        }
        header.push_str(" {");
        fragments.push(braced(header, &self.members, cx));
        fragments
    }
}

impl_decorated!(Extension);
impl_conforming!(Extension);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decl::Function, decor::Conforming, render::render};

    #[test]
    fn test_conformance_extension() {
        let e = Extension::new("Point")
            .inherits("CustomStringConvertible")
            .member(Function::new("describe"));

        assert_eq!(
            render(&[e.into()]),
            "extension Point: CustomStringConvertible {\n    func describe() {\n    }\n}\n"
        );
    }

    #[test]
    fn test_constrained_extension() {
        let e = Extension::new(TypeRef::generic("Array", [TypeRef::named("Element")]))
            .where_("Element: Equatable");
        assert_eq!(
            render(&[e.into()]),
            "extension Array<Element> where Element: Equatable {\n}\n"
        );
    }
}
