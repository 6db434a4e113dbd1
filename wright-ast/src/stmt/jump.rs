//! Control transfer and `defer`.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    node::Node,
    render::{Declaration, RenderContext, braced, expr},
    sequence::NodeList,
};

/// `return` with an optional value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Return {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<Node>>,
}

impl Return {
    /// Bare `return`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(value: impl Into<Node>) -> Self {
        Self {
            value: Some(Box::new(value.into())),
        }
    }
}

impl Declaration for Return {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let line = match &self.value {
            Some(value) => format!("return {}", expr(value, cx, "a return value")),
            None => "return".to_string(),
        };
        vec![CodeFragment::line(line)]
    }
}

/// `throw error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Throw {
    pub error: Box<Node>,
}

impl Throw {
    pub fn new(error: impl Into<Node>) -> Self {
        Self {
            error: Box::new(error.into()),
        }
    }
}

impl Declaration for Throw {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "throw {}",
            expr(&self.error, cx, "a thrown error")
        ))]
    }
}

fn with_label(keyword: &str, label: &Option<String>) -> CodeFragment {
    match label {
        Some(label) => CodeFragment::line(format!("{} {}", keyword, label)),
        None => CodeFragment::line(keyword),
    }
}

/// `break [label]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Break {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Break {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

impl Declaration for Break {
    fn declaration(&self, _cx: &RenderContext) -> Vec<CodeFragment> {
        vec![with_label("break", &self.label)]
    }
}

/// `continue [label]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Continue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Continue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

impl Declaration for Continue {
    fn declaration(&self, _cx: &RenderContext) -> Vec<CodeFragment> {
        vec![with_label("continue", &self.label)]
    }
}

/// `defer { ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defer {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

impl Defer {
    pub fn new(f: impl FnOnce(&mut NodeList)) -> Self {
        Self {
            body: NodeList::build(f),
        }
    }
}

impl Declaration for Defer {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        vec![braced("defer {".to_string(), &self.body, cx)]
    }
}
