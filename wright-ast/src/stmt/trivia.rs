//! Comments and verbatim code.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::render::{Declaration, Expression, RenderContext};

/// An explicit `//` comment line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Declaration for Comment {
    fn declaration(&self, _cx: &RenderContext) -> Vec<CodeFragment> {
        self.text.split('\n').map(CodeFragment::comment).collect()
    }
}

/// Swift source emitted as-is, in statement or expression position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raw {
    pub code: String,
}

impl Raw {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl Declaration for Raw {
    fn declaration(&self, _cx: &RenderContext) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.code.clone())]
    }
}

impl Expression for Raw {
    fn expression(&self, _cx: &RenderContext) -> String {
        self.code.clone()
    }
}
