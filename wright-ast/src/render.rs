//! Rendering capabilities and the tree renderer.
//!
//! A node is rendered through the capability its parent asks for:
//!
//! - [`Declaration`] - statement/declaration position, yields whole lines
//! - [`Expression`] - expression position, yields inline text
//! - [`PatternSyntax`] - pattern position (`case`, `catch`, `for`)
//!
//! When a child cannot play the role its parent requests, the renderer logs a
//! warning and substitutes an empty placeholder instead of failing the render.

use log::warn;
use swiftwright_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::{file::SourceFile, node::Node};

/// Settings shared by every node during one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub indent: Indent,
}

impl RenderContext {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }
}

/// "As-declaration" capability: render as one or more whole lines.
pub trait Declaration {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment>;
}

/// "As-expression" capability: render as inline text.
///
/// Multi-line expressions (closures) indent their inner lines relative to
/// column zero; the code builder re-indents them on emission.
pub trait Expression {
    fn expression(&self, cx: &RenderContext) -> String;
}

/// Pattern capability: render in a matching position.
pub trait PatternSyntax {
    fn pattern(&self, cx: &RenderContext) -> String;
}

/// Implement [`PatternSyntax`] for expression kinds, which match with `~=`.
macro_rules! expression_pattern {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::render::PatternSyntax for $ty {
                fn pattern(&self, cx: &$crate::render::RenderContext) -> String {
                    $crate::render::Expression::expression(self, cx)
                }
            }
        )*
    };
}

pub(crate) use expression_pattern;

/// Render `node` in expression position, degrading to an empty placeholder.
pub(crate) fn expr(node: &Node, cx: &RenderContext, role: &str) -> String {
    match node.as_expression() {
        Some(e) => e.expression(cx),
        None => {
            warn!(
                "`{}` node cannot be rendered as {}; substituting an empty placeholder",
                node.kind_name(),
                role
            );
            String::new()
        }
    }
}

/// Render `node` in pattern position, degrading to an empty placeholder.
pub(crate) fn pattern(node: &Node, cx: &RenderContext, role: &str) -> String {
    match node.as_pattern() {
        Some(p) => p.pattern(cx),
        None => {
            warn!(
                "`{}` node cannot be rendered as {}; substituting an empty placeholder",
                node.kind_name(),
                role
            );
            String::new()
        }
    }
}

/// Comma-join expressions.
pub(crate) fn expr_list(nodes: &[Node], cx: &RenderContext, role: &str) -> String {
    nodes
        .iter()
        .map(|n| expr(n, cx, role))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render nodes in statement position, in order.
pub(crate) fn statements(nodes: &[Node], cx: &RenderContext) -> Vec<CodeFragment> {
    nodes.iter().flat_map(|n| n.declaration(cx)).collect()
}

/// `header` line, indented statements, closing brace.
pub(crate) fn braced(header: String, nodes: &[Node], cx: &RenderContext) -> CodeFragment {
    CodeFragment::braced(header, statements(nodes, cx))
}

/// Statements rendered one level deep as text, for multi-line expressions.
pub(crate) fn nested_text(nodes: &[Node], cx: &RenderContext) -> String {
    let mut builder = CodeBuilder::new(cx.indent);
    builder.push_indent();
    for fragment in statements(nodes, cx) {
        builder.apply_fragment(fragment);
    }
    builder.build()
}

/// Pairs a node with a context so it can go through [`CodeBuilder::emit`].
struct InContext<'a> {
    nodes: &'a [Node],
    cx: RenderContext,
}

impl Renderable for InContext<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        statements(self.nodes, &self.cx)
    }
}

/// Converts finished trees into Swift source text.
///
/// # Example
///
/// ```
/// use swiftwright_ast::{Conforming, Enum, EnumCase, Renderer};
///
/// let status = Enum::new("Status")
///     .inherits("Int")
///     .cases(|c| {
///         c.push(EnumCase::new("ok").equals(200));
///     });
///
/// let text = Renderer::default().render(&[status.into()]);
/// assert_eq!(text, "enum Status: Int {\n    case ok = 200\n}\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    cx: RenderContext,
}

impl Renderer {
    pub fn new(indent: Indent) -> Self {
        Self {
            cx: RenderContext::new(indent),
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.cx
    }

    /// Render a node sequence in statement position.
    pub fn render(&self, nodes: &[Node]) -> String {
        let mut builder = CodeBuilder::new(self.cx.indent);
        builder.emit(&InContext {
            nodes,
            cx: self.cx,
        });
        builder.build()
    }

    /// Render a single node in statement position.
    pub fn render_node(&self, node: &Node) -> String {
        self.render(std::slice::from_ref(node))
    }

    /// Render a node in expression position.
    pub fn render_expression(&self, node: &Node) -> String {
        expr(node, &self.cx, "an expression")
    }

    /// Render a whole source file.
    pub fn render_file(&self, file: &SourceFile) -> String {
        let mut builder = CodeBuilder::new(self.cx.indent);
        for fragment in file.fragments(&self.cx) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }
}

/// Render nodes with default settings.
pub fn render(nodes: &[Node]) -> String {
    Renderer::default().render(nodes)
}
