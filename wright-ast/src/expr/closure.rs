//! Closure expressions.

use serde::{Deserialize, Serialize};

use crate::{
    decor::Attribute,
    effects::{EffectSpecifier, Effectful},
    node::Node,
    render::{Expression, RenderContext, nested_text},
    sequence::NodeList,
    types::TypeRef,
};

/// Reference strength of a captured name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureStrength {
    #[default]
    Strong,
    Weak,
    Unowned,
}

/// One capture list entry: `weak self`, `unowned delegate`, `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    #[serde(default)]
    pub strength: CaptureStrength,
    pub name: String,
}

impl Capture {
    pub fn strong(name: impl Into<String>) -> Self {
        Self {
            strength: CaptureStrength::Strong,
            name: name.into(),
        }
    }

    pub fn weak(name: impl Into<String>) -> Self {
        Self {
            strength: CaptureStrength::Weak,
            name: name.into(),
        }
    }

    pub fn unowned(name: impl Into<String>) -> Self {
        Self {
            strength: CaptureStrength::Unowned,
            name: name.into(),
        }
    }

    fn render(&self) -> String {
        match self.strength {
            CaptureStrength::Strong => self.name.clone(),
            CaptureStrength::Weak => format!("weak {}", self.name),
            CaptureStrength::Unowned => format!("unowned {}", self.name),
        }
    }
}

/// A closure parameter; the type annotation is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosureParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
}

/// A closure expression.
///
/// The `[captures] (params) effects -> R in` signature is emitted only when
/// at least one part of it is present; otherwise the body stands alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Closure {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captures: Vec<Capture>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ClosureParam>,
    #[serde(default)]
    pub effects: EffectSpecifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

impl Closure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(mut self, capture: Capture) -> Self {
        self.captures.push(capture);
        self
    }

    /// Append the captures produced by an iterator, in order.
    pub fn captures(mut self, captures: impl IntoIterator<Item = Capture>) -> Self {
        self.captures.extend(captures);
        self
    }

    /// Append an untyped parameter.
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(ClosureParam {
            name: name.into(),
            ty: None,
        });
        self
    }

    /// Append a parameter with a type annotation.
    pub fn typed_param(mut self, name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        self.params.push(ClosureParam {
            name: name.into(),
            ty: Some(ty.into()),
        });
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeRef>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Attach an attribute such as `@Sendable` or `@MainActor`.
    pub fn attribute(mut self, attr: impl Into<Attribute>) -> Self {
        self.attributes.push(attr.into());
        self
    }

    /// Append body statements produced by a builder closure.
    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }

    /// Everything between `{ ` and ` in`, or `None` for a bare body.
    fn signature(&self) -> Option<String> {
        let mut parts = Vec::new();
        for attr in &self.attributes {
            parts.push(attr.to_string());
        }
        if !self.captures.is_empty() {
            let captures: Vec<String> = self.captures.iter().map(Capture::render).collect();
            parts.push(format!("[{}]", captures.join(", ")));
        }

        let bare_params = self.params.iter().all(|p| p.ty.is_none())
            && self.return_type.is_none()
            && self.effects.is_none();
        if bare_params {
            if !self.params.is_empty() {
                let names: Vec<&str> = self.params.iter().map(|p| p.name.as_str()).collect();
                parts.push(names.join(", "));
            }
        } else {
            let params: Vec<String> = self
                .params
                .iter()
                .map(|p| match &p.ty {
                    Some(ty) => format!("{}: {}", p.name, ty),
                    None => p.name.clone(),
                })
                .collect();
            let mut clause = format!("({}){}", params.join(", "), self.effects.suffix());
            if let Some(ret) = &self.return_type {
                clause.push_str(" -> ");
                clause.push_str(&ret.to_string());
            }
            parts.push(clause);
        }

        if parts.is_empty() {
            None
        } else {
            Some(format!("{} in", parts.join(" ")))
        }
    }
}

impl Expression for Closure {
    fn expression(&self, cx: &RenderContext) -> String {
        match (self.signature(), self.body.is_empty()) {
            (None, true) => "{}".to_string(),
            (Some(sig), true) => format!("{{ {} }}", sig),
            (None, false) => format!("{{\n{}}}", nested_text(&self.body, cx)),
            (Some(sig), false) => format!("{{ {}\n{}}}", sig, nested_text(&self.body, cx)),
        }
    }
}

impl Effectful for Closure {
    fn effects_mut(&mut self) -> &mut EffectSpecifier {
        &mut self.effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expr::Call, render::Renderer, stmt::Return};

    fn render(closure: Closure) -> String {
        Renderer::default().render_expression(&closure.into())
    }

    #[test]
    fn test_bare_body_has_no_signature() {
        let c = Closure::new().body(|b| {
            b.push(Call::named("refresh"));
        });
        assert_eq!(render(c), "{\n    refresh()\n}");
    }

    #[test]
    fn test_empty_closure() {
        assert_eq!(render(Closure::new()), "{}");
        assert_eq!(render(Closure::new().param("_")), "{ _ in }");
    }

    #[test]
    fn test_return_type_only() {
        let c = Closure::new().returns("Int").body(|b| {
            b.push(Return::value(Node::reference("x")));
        });
        assert_eq!(render(c), "{ () -> Int in\n    return x\n}");
    }

    #[test]
    fn test_capture_list() {
        let c = Closure::new()
            .capture(Capture::weak("self"))
            .capture(Capture::unowned("delegate"))
            .capture(Capture::strong("count"))
            .param("value")
            .body(|b| {
                b.push(Node::raw("self?.update(value)"));
            });
        assert_eq!(
            render(c),
            "{ [weak self, unowned delegate, count] value in\n    self?.update(value)\n}"
        );
    }

    #[test]
    fn test_typed_signature_with_effects() {
        let c = Closure::new()
            .attribute("Sendable")
            .typed_param("id", "Int")
            .async_()
            .throws()
            .returns("User")
            .body(|b| {
                b.push(Return::value(
                    Call::named("load").labeled("id", Node::reference("id")).try_().await_(),
                ));
            });
        assert_eq!(
            render(c),
            "{ @Sendable (id: Int) async throws -> User in\n    return try await load(id: id)\n}"
        );
    }

    #[test]
    fn test_nested_closure_indentation() {
        let inner = Closure::new().body(|b| {
            b.push(Node::raw("work()"));
        });
        let outer = Closure::new().body(|b| {
            b.push(Call::named("run").trailing(inner));
        });
        assert_eq!(render(outer), "{\n    run {\n        work()\n    }\n}");
    }
}
