//! Functions, methods and initializers.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    decor::{Decor, impl_decorated, impl_generic},
    effects::{EffectSpecifier, Effectful},
    node::Node,
    render::{Declaration, RenderContext, braced, expr},
    sequence::NodeList,
    types::{GenericParam, TypeRef, generic_clause},
};

/// A function parameter: `label name: inout Type... = default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// External argument label; `_` suppresses it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub name: String,
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Box<Node>>,
    #[serde(default)]
    pub is_inout: bool,
    #[serde(default)]
    pub is_variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            label: None,
            name: name.into(),
            ty: ty.into(),
            default: None,
            is_inout: false,
            is_variadic: false,
        }
    }

    /// Set an external label distinct from the internal name.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Suppress the argument label (`_ name: T`).
    pub fn unlabeled(self) -> Self {
        self.label("_")
    }

    /// Set a default value.
    pub fn default_value(mut self, value: impl Into<Node>) -> Self {
        self.default = Some(Box::new(value.into()));
        self
    }

    pub fn inout(mut self) -> Self {
        self.is_inout = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    fn render(&self, cx: &RenderContext) -> String {
        let mut out = String::new();
        if let Some(label) = &self.label {
            out.push_str(label);
            out.push(' ');
        }
        out.push_str(&self.name);
        out.push_str(": ");
        if self.is_inout {
            out.push_str("inout ");
        }
        out.push_str(&self.ty.to_string());
        if self.is_variadic {
            out.push_str("...");
        }
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(&expr(default, cx, "a default argument"));
        }
        out
    }
}

pub(crate) fn param_clause(params: &[Param], cx: &RenderContext) -> String {
    let params: Vec<String> = params.iter().map(|p| p.render(cx)).collect();
    format!("({})", params.join(", "))
}

/// A `func` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub decor: Decor,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_override: bool,
    #[serde(default)]
    pub is_mutating: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    #[serde(default)]
    pub effects: EffectSpecifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            is_static: false,
            is_override: false,
            is_mutating: false,
            generics: Vec::new(),
            params: Vec::new(),
            effects: EffectSpecifier::None,
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeRef>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Mark as `mutating` (value-type methods that modify `self`).
    pub fn mutating(mut self) -> Self {
        self.is_mutating = true;
        self
    }

    /// Append body statements produced by a builder closure.
    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }

    /// Everything up to, not including, the opening brace.
    pub(crate) fn signature(&self, cx: &RenderContext) -> String {
        let mut out = self.decor.access_prefix();
        if self.is_override {
            out.push_str("override ");
        }
        if self.is_static {
            out.push_str("static ");
        }
        if self.is_mutating {
            out.push_str("mutating ");
        }
        out.push_str("func ");
        out.push_str(&self.name);
        out.push_str(&generic_clause(&self.generics));
        out.push_str(&param_clause(&self.params, cx));
        out.push_str(&self.effects.suffix());
        if let Some(ret) = &self.return_type {
            out.push_str(" -> ");
            out.push_str(&ret.to_string());
        }
        out
    }

    /// Bodiless form used inside protocols.
    pub(crate) fn requirement(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        fragments.push(CodeFragment::line(self.signature(cx)));
        fragments
    }
}

impl Declaration for Function {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        fragments.push(braced(format!("{} {{", self.signature(cx)), &self.body, cx));
        fragments
    }
}

impl Effectful for Function {
    fn effects_mut(&mut self) -> &mut EffectSpecifier {
        &mut self.effects
    }
}

/// An `init` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initializer {
    #[serde(default)]
    pub decor: Decor,
    #[serde(default)]
    pub is_failable: bool,
    #[serde(default)]
    pub is_convenience: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    #[serde(default)]
    pub effects: EffectSpecifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

impl Initializer {
    pub fn new() -> Self {
        Self {
            decor: Decor::default(),
            is_failable: false,
            is_convenience: false,
            params: Vec::new(),
            effects: EffectSpecifier::None,
            body: Vec::new(),
        }
    }

    /// `init?`.
    pub fn failable(mut self) -> Self {
        self.is_failable = true;
        self
    }

    pub fn convenience(mut self) -> Self {
        self.is_convenience = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }

    pub(crate) fn signature(&self, cx: &RenderContext) -> String {
        format!(
            "{}{}init{}{}{}",
            self.decor.access_prefix(),
            if self.is_convenience { "convenience " } else { "" },
            if self.is_failable { "?" } else { "" },
            param_clause(&self.params, cx),
            self.effects.suffix()
        )
    }

    pub(crate) fn requirement(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        fragments.push(CodeFragment::line(self.signature(cx)));
        fragments
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Declaration for Initializer {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        fragments.push(braced(format!("{} {{", self.signature(cx)), &self.body, cx));
        fragments
    }
}

impl Effectful for Initializer {
    fn effects_mut(&mut self) -> &mut EffectSpecifier {
        &mut self.effects
    }
}

impl_decorated!(Function, Initializer);
impl_generic!(Function);
