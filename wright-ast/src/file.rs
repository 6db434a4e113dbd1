//! Whole source files.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    node::Node,
    render::{RenderContext, statements},
    sequence::NodeList,
};

/// A Swift source file: header comment, imports, then top-level nodes.
///
/// Imports keep their first insertion position and are emitted once each.
/// Top-level nodes are separated only by the blank lines the author adds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceFile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub imports: IndexSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
}

impl SourceFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the leading `//` comment block.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Import a module. Repeated imports are ignored.
    pub fn import(mut self, module: impl Into<String>) -> Self {
        self.imports.insert(module.into());
        self
    }

    pub fn node(mut self, node: impl Into<Node>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn nodes(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.nodes.extend(NodeList::build(f));
        self
    }

    pub(crate) fn fragments(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();
        if !self.header.is_empty() {
            sections.push(
                self.header
                    .iter()
                    .flat_map(|text| text.split('\n'))
                    .map(CodeFragment::comment)
                    .collect(),
            );
        }
        if !self.imports.is_empty() {
            sections.push(
                self.imports
                    .iter()
                    .map(|module| CodeFragment::line(format!("import {}", module)))
                    .collect(),
            );
        }
        let body = statements(&self.nodes, cx);
        if !body.is_empty() {
            sections.push(body);
        }

        let mut fragments: Vec<CodeFragment> = Vec::new();
        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(section);
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decl::Struct, render::Renderer};

    #[test]
    fn test_sections_and_import_dedup() {
        let file = SourceFile::new()
            .header("Generated file. Do not edit.")
            .import("Foundation")
            .import("Combine")
            .import("Foundation")
            .node(Struct::new("A"))
            .node(Node::blank())
            .node(Struct::new("B"));

        insta::assert_snapshot!(Renderer::default().render_file(&file), @r"
        // Generated file. Do not edit.

        import Foundation
        import Combine

        struct A {
        }

        struct B {
        }
        ");
    }

    #[test]
    fn test_adjacent_nodes_get_no_implicit_blank() {
        let file = SourceFile::new().node(Struct::new("A")).node(Struct::new("B"));
        assert_eq!(
            Renderer::default().render_file(&file),
            "struct A {\n}\nstruct B {\n}\n"
        );
    }

    #[test]
    fn test_multi_line_header_is_commented_per_line() {
        let file = SourceFile::new()
            .header("Generated by wright.\nDo not edit.")
            .import("Foundation");
        assert_eq!(
            Renderer::default().render_file(&file),
            "// Generated by wright.\n// Do not edit.\n\nimport Foundation\n"
        );
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(Renderer::default().render_file(&SourceFile::new()), "");
    }
}
