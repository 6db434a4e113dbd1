//! Operator expressions.

use serde::{Deserialize, Serialize};

use crate::{
    node::Node,
    render::{Expression, RenderContext, expr},
};

/// A binary operator application, single-spaced: `a + b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infix {
    pub lhs: Box<Node>,
    pub op: String,
    pub rhs: Box<Node>,
    /// Wrap the whole expression in parentheses.
    #[serde(default)]
    pub is_parenthesized: bool,
}

impl Infix {
    pub fn new(lhs: impl Into<Node>, op: impl Into<String>, rhs: impl Into<Node>) -> Self {
        Self {
            lhs: Box::new(lhs.into()),
            op: op.into(),
            rhs: Box::new(rhs.into()),
            is_parenthesized: false,
        }
    }

    pub fn parenthesized(mut self) -> Self {
        self.is_parenthesized = true;
        self
    }
}

impl Expression for Infix {
    fn expression(&self, cx: &RenderContext) -> String {
        let inner = format!(
            "{} {} {}",
            expr(&self.lhs, cx, "an operand"),
            self.op,
            expr(&self.rhs, cx, "an operand")
        );
        if self.is_parenthesized {
            format!("({})", inner)
        } else {
            inner
        }
    }
}

/// A prefix operator application: `!flag`, `-x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefix {
    pub op: String,
    pub operand: Box<Node>,
}

impl Prefix {
    pub fn new(op: impl Into<String>, operand: impl Into<Node>) -> Self {
        Self {
            op: op.into(),
            operand: Box::new(operand.into()),
        }
    }

    /// Logical negation.
    pub fn not(operand: impl Into<Node>) -> Self {
        Self::new("!", operand)
    }
}

impl Expression for Prefix {
    fn expression(&self, cx: &RenderContext) -> String {
        format!("{}{}", self.op, expr(&self.operand, cx, "an operand"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostfixOp {
    /// `value?`
    OptionalChain,
    /// `value!`
    ForceUnwrap,
}

/// Optional chaining or force unwrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Postfix {
    pub operand: Box<Node>,
    pub op: PostfixOp,
}

impl Postfix {
    pub fn new(operand: impl Into<Node>, op: PostfixOp) -> Self {
        Self {
            operand: Box::new(operand.into()),
            op,
        }
    }
}

impl Expression for Postfix {
    fn expression(&self, cx: &RenderContext) -> String {
        let mark = match self.op {
            PostfixOp::OptionalChain => "?",
            PostfixOp::ForceUnwrap => "!",
        };
        format!("{}{}", expr(&self.operand, cx, "an operand"), mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decl::Struct, render::Renderer};

    fn render(node: impl Into<Node>) -> String {
        Renderer::default().render_expression(&node.into())
    }

    #[test]
    fn test_infix_spacing() {
        let sum = Infix::new(Node::reference("a"), "+", 1);
        assert_eq!(render(sum.clone()), "a + 1");
        assert_eq!(render(Infix::new(sum.parenthesized(), "*", 2)), "(a + 1) * 2");
    }

    #[test]
    fn test_prefix_and_postfix() {
        assert_eq!(render(Prefix::not(Node::reference("done"))), "!done");
        assert_eq!(
            render(Postfix::new(Node::reference("cache"), PostfixOp::ForceUnwrap)),
            "cache!"
        );
    }

    #[test]
    fn test_non_expression_operand_degrades() {
        let bad = Infix::new(Struct::new("Oops"), "==", 1);
        assert_eq!(render(bad), " == 1");
    }
}
