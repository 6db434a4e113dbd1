//! Loops.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    node::Node,
    pattern::Pattern,
    render::{Declaration, RenderContext, braced, expr, pattern, statements},
    sequence::{NodeList, expect_expression, expect_pattern, single_expression, single_pattern},
};

/// `while condition { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LoopFields")]
pub struct While {
    pub condition: Box<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

/// Wire form shared by `while` and `repeat-while`; checked on the way in.
#[derive(Deserialize)]
struct LoopFields {
    condition: Box<Node>,
    #[serde(default)]
    body: Vec<Node>,
}

impl TryFrom<LoopFields> for While {
    type Error = String;

    fn try_from(fields: LoopFields) -> Result<Self, Self::Error> {
        expect_expression("while condition", &fields.condition)?;
        Ok(Self {
            condition: fields.condition,
            body: fields.body,
        })
    }
}

impl While {
    /// # Panics
    ///
    /// Unless `condition` yields exactly one expression.
    pub fn new(condition: impl FnOnce(&mut NodeList)) -> Self {
        Self {
            condition: Box::new(single_expression("while condition", condition)),
            body: Vec::new(),
        }
    }

    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }
}

impl Declaration for While {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let header = format!("while {} {{", expr(&self.condition, cx, "a loop condition"));
        vec![braced(header, &self.body, cx)]
    }
}

/// `repeat { ... } while condition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LoopFields")]
pub struct RepeatWhile {
    pub condition: Box<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

impl TryFrom<LoopFields> for RepeatWhile {
    type Error = String;

    fn try_from(fields: LoopFields) -> Result<Self, Self::Error> {
        expect_expression("repeat-while condition", &fields.condition)?;
        Ok(Self {
            condition: fields.condition,
            body: fields.body,
        })
    }
}

impl RepeatWhile {
    /// # Panics
    ///
    /// Unless `condition` yields exactly one expression.
    pub fn new(condition: impl FnOnce(&mut NodeList)) -> Self {
        Self {
            condition: Box::new(single_expression("repeat-while condition", condition)),
            body: Vec::new(),
        }
    }

    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }
}

impl Declaration for RepeatWhile {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let close = format!("}} while {}", expr(&self.condition, cx, "a loop condition"));
        vec![CodeFragment::block(
            "repeat {",
            statements(&self.body, cx),
            Some(close),
        )]
    }
}

/// `for pattern in sequence where filter { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ForInFields")]
pub struct ForIn {
    pub pattern: Box<Node>,
    pub sequence: Box<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

#[derive(Deserialize)]
struct ForInFields {
    pattern: Box<Node>,
    sequence: Box<Node>,
    #[serde(default)]
    filter: Option<Box<Node>>,
    #[serde(default)]
    body: Vec<Node>,
}

impl TryFrom<ForInFields> for ForIn {
    type Error = String;

    fn try_from(fields: ForInFields) -> Result<Self, Self::Error> {
        expect_pattern("for-in pattern", &fields.pattern)?;
        Ok(Self {
            pattern: fields.pattern,
            sequence: fields.sequence,
            filter: fields.filter,
            body: fields.body,
        })
    }
}

impl ForIn {
    /// # Panics
    ///
    /// Unless `pattern` yields exactly one pattern.
    pub fn new(pattern: impl FnOnce(&mut NodeList), sequence: impl Into<Node>) -> Self {
        Self {
            pattern: Box::new(single_pattern("for-in pattern", pattern)),
            sequence: Box::new(sequence.into()),
            filter: None,
            body: Vec::new(),
        }
    }

    /// Iterate binding each element to `name`.
    pub fn binding(name: impl Into<String>, sequence: impl Into<Node>) -> Self {
        let name = name.into();
        Self::new(
            |p| {
                p.push(Pattern::identifier(name));
            },
            sequence,
        )
    }

    /// Add a `where` filter.
    pub fn where_(mut self, filter: impl Into<Node>) -> Self {
        self.filter = Some(Box::new(filter.into()));
        self
    }

    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }
}

impl Declaration for ForIn {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let binding = match self.pattern.as_ref() {
            Node::Pattern(p) => p.binding(cx),
            other => format!("case {}", pattern(other, cx, "a loop pattern")),
        };
        let mut header = format!(
            "for {} in {}",
            binding,
            expr(&self.sequence, cx, "a loop sequence")
        );
        if let Some(filter) = &self.filter {
            header.push_str(" where ");
            header.push_str(&expr(filter, cx, "a loop filter"));
        }
        header.push_str(" {");
        vec![braced(header, &self.body, cx)]
    }
}
