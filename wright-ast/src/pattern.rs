//! Patterns for `switch`, `if case`, `for` and `catch`.

use serde::{Deserialize, Serialize};

use crate::{
    node::Node,
    render::{PatternSyntax, RenderContext, expr},
};

/// A pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Pattern {
    /// Binds one name: `let name`.
    Identifier(String),
    /// Matches an enum case and binds its payload: `.name(let a, let b)`.
    Case { name: String, bindings: Vec<String> },
    /// `_`.
    Wildcard,
    /// Matches a tuple element-wise: `(let a, _)`.
    Tuple(Vec<Pattern>),
    /// Matches by `~=` against an expression: `200`, `.none`.
    Expression(Box<Node>),
}

impl Pattern {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// A case pattern binding each associated value, in order.
    pub fn case<I, S>(name: impl Into<String>, bindings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Case {
            name: name.into(),
            bindings: bindings.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tuple(elements: impl IntoIterator<Item = Pattern>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    pub fn expression(node: impl Into<Node>) -> Self {
        Self::Expression(Box::new(node.into()))
    }

    /// Render where names are introduced without `let` (`for x in`).
    pub(crate) fn binding(&self, cx: &RenderContext) -> String {
        match self {
            Self::Identifier(name) => name.clone(),
            Self::Wildcard => "_".to_string(),
            Self::Tuple(elements) => {
                let parts: Vec<String> = elements.iter().map(|p| p.binding(cx)).collect();
                format!("({})", parts.join(", "))
            }
            Self::Case { .. } | Self::Expression(_) => format!("case {}", self.pattern(cx)),
        }
    }
}

impl PatternSyntax for Pattern {
    fn pattern(&self, cx: &RenderContext) -> String {
        match self {
            Self::Identifier(name) => format!("let {}", name),
            Self::Case { name, bindings } if bindings.is_empty() => format!(".{}", name),
            Self::Case { name, bindings } => {
                let bound: Vec<String> = bindings.iter().map(|b| format!("let {}", b)).collect();
                format!(".{}({})", name, bound.join(", "))
            }
            Self::Wildcard => "_".to_string(),
            Self::Tuple(elements) => {
                let parts: Vec<String> = elements.iter().map(|p| p.pattern(cx)).collect();
                format!("({})", parts.join(", "))
            }
            Self::Expression(node) => expr(node, cx, "an expression pattern"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;

    fn render(pattern: &Pattern) -> String {
        pattern.pattern(&RenderContext::default())
    }

    #[test]
    fn test_identifier() {
        let p = Pattern::identifier("value");
        assert_eq!(render(&p), "let value");
        assert_eq!(p.binding(&RenderContext::default()), "value");
    }

    #[test]
    fn test_case_pattern_binds_in_order() {
        assert_eq!(
            render(&Pattern::case("failure", ["code", "message"])),
            ".failure(let code, let message)"
        );
        assert_eq!(render(&Pattern::case("none", Vec::<String>::new())), ".none");
    }

    #[test]
    fn test_tuple_and_wildcard() {
        let p = Pattern::tuple([Pattern::identifier("index"), Pattern::Wildcard]);
        assert_eq!(render(&p), "(let index, _)");
        assert_eq!(p.binding(&RenderContext::default()), "(index, _)");
    }

    #[test]
    fn test_expression_pattern() {
        let p = Pattern::expression(Literal::Int(404));
        assert_eq!(render(&p), "404");
        assert_eq!(p.binding(&RenderContext::default()), "case 404");
    }
}
