//! Literal expressions.

use serde::{Deserialize, Serialize};

use crate::{
    node::Node,
    render::{Expression, RenderContext, expr, expr_list},
};

/// A literal expression.
///
/// Tuple, array and dictionary literals are ordinary expressions but can't be
/// used as an enum case's raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Literal {
    /// A string literal; quotes, backslashes and control characters are escaped.
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Nil,
    /// A bare identifier or dotted path (`self.count`, `.default`).
    Reference(String),
    Tuple(Vec<Node>),
    Array(Vec<Node>),
    Dictionary(Vec<(Node, Node)>),
}

impl Literal {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    pub fn tuple<I, N>(elements: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self::Tuple(elements.into_iter().map(Into::into).collect())
    }

    pub fn array<I, N>(elements: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self::Array(elements.into_iter().map(Into::into).collect())
    }

    pub fn dictionary<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Node>,
        V: Into<Node>,
    {
        Self::Dictionary(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether this literal may serve as an enum case raw value.
    pub fn is_raw_value(&self) -> bool {
        !matches!(self, Self::Tuple(_) | Self::Array(_) | Self::Dictionary(_))
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Nil => "nil",
            Self::Reference(_) => "reference",
            Self::Tuple(_) => "tuple",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
        }
    }
}

impl Expression for Literal {
    fn expression(&self, cx: &RenderContext) -> String {
        match self {
            Self::String(value) => quote(value),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => float(*value),
            Self::Bool(value) => value.to_string(),
            Self::Nil => "nil".to_string(),
            Self::Reference(name) => name.clone(),
            Self::Tuple(elements) => format!("({})", expr_list(elements, cx, "a tuple element")),
            Self::Array(elements) => format!("[{}]", expr_list(elements, cx, "an array element")),
            Self::Dictionary(entries) if entries.is_empty() => "[:]".to_string(),
            Self::Dictionary(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| {
                        format!(
                            "{}: {}",
                            expr(k, cx, "a dictionary key"),
                            expr(v, cx, "a dictionary value")
                        )
                    })
                    .collect();
                format!("[{}]", entries.join(", "))
            }
        }
    }
}

/// Quote a string as a single-line Swift string literal.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn float(value: f64) -> String {
    if value.is_nan() {
        "Double.nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Double.infinity".to_string()
        } else {
            "-Double.infinity".to_string()
        }
    } else {
        // Debug keeps a fractional part (`1.0`), so the literal stays a Double.
        format!("{:?}", value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(literal: Literal) -> String {
        literal.expression(&RenderContext::default())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(42.into()), "42");
        assert_eq!(render((-7).into()), "-7");
        assert_eq!(render(1.0.into()), "1.0");
        assert_eq!(render(0.25.into()), "0.25");
        assert_eq!(render(true.into()), "true");
        assert_eq!(render(Literal::Nil), "nil");
        assert_eq!(render(Literal::reference("self.count")), "self.count");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(render(f64::NAN.into()), "Double.nan");
        assert_eq!(render(f64::NEG_INFINITY.into()), "-Double.infinity");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(render("plain".into()), "\"plain\"");
        assert_eq!(render("say \"hi\"".into()), "\"say \\\"hi\\\"\"");
        assert_eq!(render("a\\b\n".into()), "\"a\\\\b\\n\"");
        assert_eq!(render("bell\u{7}".into()), "\"bell\\u{7}\"");
    }

    #[test]
    fn test_collections() {
        assert_eq!(render(Literal::tuple([Literal::Int(1), "a".into()])), "(1, \"a\")");
        assert_eq!(render(Literal::array([1, 2, 3])), "[1, 2, 3]");
        assert_eq!(render(Literal::dictionary(Vec::<(Literal, Literal)>::new())), "[:]");
        assert_eq!(
            render(Literal::dictionary([("a", 1), ("b", 2)])),
            "[\"a\": 1, \"b\": 2]"
        );
    }

    #[test]
    fn test_raw_value_kinds() {
        assert!(Literal::Int(1).is_raw_value());
        assert!(Literal::string("x").is_raw_value());
        assert!(!Literal::array([1]).is_raw_value());
        assert!(!Literal::tuple([1, 2]).is_raw_value());
        assert!(!Literal::dictionary([("k", 1)]).is_raw_value());
    }
}
