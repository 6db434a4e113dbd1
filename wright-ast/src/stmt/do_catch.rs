//! `do` / `catch`.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    node::Node,
    render::{Declaration, RenderContext, braced, pattern, statements},
    sequence::NodeList,
};

/// A `catch` clause; without a pattern it catches everything as `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatchFields")]
pub struct Catch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

#[derive(Deserialize)]
struct CatchFields {
    #[serde(default)]
    pattern: Option<Box<Node>>,
    #[serde(default)]
    body: Vec<Node>,
}

impl TryFrom<CatchFields> for Catch {
    type Error = String;

    fn try_from(fields: CatchFields) -> Result<Self, Self::Error> {
        if let Some(pattern) = &fields.pattern {
            check_pattern(pattern)?;
        }
        Ok(Self {
            pattern: fields.pattern,
            body: fields.body,
        })
    }
}

fn check_pattern(node: &Node) -> Result<(), String> {
    if node.is_pattern() {
        Ok(())
    } else {
        Err(format!(
            "catch pattern must be a pattern, got a `{}` node",
            node.kind_name()
        ))
    }
}

impl Catch {
    /// `catch { ... }`.
    pub fn all() -> Self {
        Self {
            pattern: None,
            body: Vec::new(),
        }
    }

    /// `catch pattern { ... }`.
    ///
    /// # Panics
    ///
    /// If `pattern` cannot be rendered as a pattern.
    pub fn matching(pattern: impl Into<Node>) -> Self {
        let pattern = pattern.into();
        if let Err(message) = check_pattern(&pattern) {
            panic!("{}", message);
        }
        Self {
            pattern: Some(Box::new(pattern)),
            body: Vec::new(),
        }
    }

    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }

    fn header(&self, cx: &RenderContext) -> String {
        match &self.pattern {
            Some(p) => format!("}} catch {} {{", pattern(p, cx, "a catch pattern")),
            None => "} catch {".to_string(),
        }
    }
}

/// `do { ... } catch ... { ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoCatch {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catches: Vec<Catch>,
}

impl DoCatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }

    /// Append a catch clause; clauses render in the order added.
    pub fn catch(mut self, clause: Catch) -> Self {
        self.catches.push(clause);
        self
    }
}

impl Declaration for DoCatch {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let Some((last, rest)) = self.catches.split_last() else {
            return vec![braced("do {".to_string(), &self.body, cx)];
        };
        let mut fragments = vec![CodeFragment::block("do {", statements(&self.body, cx), None)];
        for clause in rest {
            fragments.push(CodeFragment::block(
                clause.header(cx),
                statements(&clause.body, cx),
                None,
            ));
        }
        fragments.push(braced(last.header(cx), &last.body, cx));
        fragments
    }
}
