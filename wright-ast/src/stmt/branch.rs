//! `if` and `guard`.

use log::warn;
use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    decl::Binding,
    node::Node,
    render::{Declaration, RenderContext, braced, expr, pattern, statements},
    sequence::NodeList,
};

/// One clause of a condition list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "value",
    rename_all = "snake_case",
    try_from = "ConditionFields"
)]
pub enum Condition {
    /// A boolean expression.
    Expr(Node),
    /// Optional binding: `let name = value`, or the `let name` shorthand.
    Binding {
        binding: Binding,
        name: String,
        value: Option<Node>,
    },
    /// Pattern match: `case pattern = value`.
    Case { pattern: Node, value: Node },
}

/// Wire form of [`Condition`]; checked on the way in.
#[derive(Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
enum ConditionFields {
    Expr(Node),
    Binding {
        binding: Binding,
        name: String,
        #[serde(default)]
        value: Option<Node>,
    },
    Case { pattern: Node, value: Node },
}

impl TryFrom<ConditionFields> for Condition {
    type Error = String;

    fn try_from(fields: ConditionFields) -> Result<Self, Self::Error> {
        Ok(match fields {
            ConditionFields::Expr(node) => Self::Expr(node),
            ConditionFields::Binding {
                binding,
                name,
                value,
            } => Self::Binding {
                binding,
                name,
                value,
            },
            ConditionFields::Case { pattern, value } => {
                check_condition_pattern(&pattern)?;
                Self::Case { pattern, value }
            }
        })
    }
}

fn check_condition_pattern(node: &Node) -> Result<(), String> {
    if node.is_pattern() {
        Ok(())
    } else {
        Err(format!(
            "condition pattern must be a pattern, got a `{}` node",
            node.kind_name()
        ))
    }
}

impl Condition {
    pub fn expr(node: impl Into<Node>) -> Self {
        Self::Expr(node.into())
    }

    pub fn let_(name: impl Into<String>, value: impl Into<Node>) -> Self {
        Self::Binding {
            binding: Binding::Let,
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// `let name`, unwrapping a same-named optional.
    pub fn unwrap(name: impl Into<String>) -> Self {
        Self::Binding {
            binding: Binding::Let,
            name: name.into(),
            value: None,
        }
    }

    /// # Panics
    ///
    /// If `pattern` cannot be rendered as a pattern.
    pub fn case(pattern: impl Into<Node>, value: impl Into<Node>) -> Self {
        let pattern = pattern.into();
        if let Err(message) = check_condition_pattern(&pattern) {
            panic!("{}", message);
        }
        Self::Case {
            pattern,
            value: value.into(),
        }
    }

    fn render(&self, cx: &RenderContext) -> String {
        match self {
            Self::Expr(node) => expr(node, cx, "a condition"),
            Self::Binding {
                binding,
                name,
                value: Some(value),
            } => format!(
                "{} {} = {}",
                binding.keyword(),
                name,
                expr(value, cx, "a bound value")
            ),
            Self::Binding {
                binding,
                name,
                value: None,
            } => format!("{} {}", binding.keyword(), name),
            Self::Case { pattern: p, value } => format!(
                "case {} = {}",
                pattern(p, cx, "a case condition"),
                expr(value, cx, "a matched value")
            ),
        }
    }
}

fn condition_list(conditions: &[Condition], cx: &RenderContext, keyword: &str) -> String {
    if conditions.is_empty() {
        warn!("`{}` without conditions; substituting an empty placeholder", keyword);
    }
    conditions
        .iter()
        .map(|c| c.render(cx))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The `else` branch of an [`If`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Else {
    Block(Vec<Node>),
    If(Box<If>),
}

/// An `if` statement with optional `else` / `else if` chaining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub then: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<Else>,
}

impl If {
    /// Start with a boolean condition.
    pub fn new(condition: impl Into<Node>) -> Self {
        Self::when(Condition::expr(condition))
    }

    /// Start with any condition clause.
    pub fn when(condition: Condition) -> Self {
        Self {
            conditions: vec![condition],
            then: Vec::new(),
            otherwise: None,
        }
    }

    /// Append a clause, joined with `, `.
    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn then(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.then.extend(NodeList::build(f));
        self
    }

    /// Set the `else` block. A builder that yields nothing leaves the
    /// statement without an `else` clause.
    pub fn otherwise(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        let nodes = NodeList::build(f);
        self.otherwise = if nodes.is_empty() {
            None
        } else {
            Some(Else::Block(nodes))
        };
        self
    }

    /// Chain `else if`.
    pub fn else_if(mut self, next: If) -> Self {
        self.otherwise = Some(Else::If(Box::new(next)));
        self
    }

    fn chain(&self, cx: &RenderContext, lead: &str) -> Vec<CodeFragment> {
        let header = format!("{}if {} {{", lead, condition_list(&self.conditions, cx, "if"));
        match &self.otherwise {
            None => vec![braced(header, &self.then, cx)],
            Some(Else::Block(nodes)) => vec![
                CodeFragment::block(header, statements(&self.then, cx), None),
                braced("} else {".to_string(), nodes, cx),
            ],
            Some(Else::If(next)) => {
                let mut fragments = vec![CodeFragment::block(
                    header,
                    statements(&self.then, cx),
                    None,
                )];
                fragments.extend(next.chain(cx, "} else "));
                fragments
            }
        }
    }
}

impl Declaration for If {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        self.chain(cx, "")
    }
}

/// `guard conditions else { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub otherwise: Vec<Node>,
}

impl Guard {
    pub fn new(condition: impl Into<Node>) -> Self {
        Self::when(Condition::expr(condition))
    }

    pub fn when(condition: Condition) -> Self {
        Self {
            conditions: vec![condition],
            otherwise: Vec::new(),
        }
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// The `else` body; it must leave the scope.
    pub fn otherwise(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.otherwise.extend(NodeList::build(f));
        self
    }
}

impl Declaration for Guard {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let header = format!(
            "guard {} else {{",
            condition_list(&self.conditions, cx, "guard")
        );
        vec![braced(header, &self.otherwise, cx)]
    }
}
