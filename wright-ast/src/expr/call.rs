//! Function calls and member access.

use serde::{Deserialize, Serialize};

use super::Closure;
use crate::{
    effects::CallEffects,
    node::Node,
    render::{Expression, RenderContext, expr},
};

/// One call argument, optionally labeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: Node,
}

/// A call expression: `try await callee(a, label: b) { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub callee: Box<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Argument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_closure: Option<Closure>,
    #[serde(default)]
    pub effects: CallEffects,
}

impl Call {
    /// Call an arbitrary callee expression.
    pub fn new(callee: impl Into<Node>) -> Self {
        Self {
            callee: Box::new(callee.into()),
            args: Vec::new(),
            trailing_closure: None,
            effects: CallEffects::default(),
        }
    }

    /// Call a function or type by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Node::reference(name))
    }

    /// Append an unlabeled argument.
    pub fn arg(mut self, value: impl Into<Node>) -> Self {
        self.args.push(Argument {
            label: None,
            value: value.into(),
        });
        self
    }

    /// Append a labeled argument.
    pub fn labeled(mut self, label: impl Into<String>, value: impl Into<Node>) -> Self {
        self.args.push(Argument {
            label: Some(label.into()),
            value: value.into(),
        });
        self
    }

    /// Attach a trailing closure.
    pub fn trailing(mut self, closure: Closure) -> Self {
        self.trailing_closure = Some(closure);
        self
    }

    /// Prefix the call with `try`.
    pub fn try_(mut self) -> Self {
        self.effects.is_try = true;
        self
    }

    /// Prefix the call with `await`.
    pub fn await_(mut self) -> Self {
        self.effects.is_await = true;
        self
    }
}

impl Expression for Call {
    fn expression(&self, cx: &RenderContext) -> String {
        let mut out = String::from(self.effects.prefix());
        out.push_str(&expr(&self.callee, cx, "a callee"));

        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| {
                let value = expr(&arg.value, cx, "a call argument");
                match &arg.label {
                    Some(label) => format!("{}: {}", label, value),
                    None => value,
                }
            })
            .collect();

        match &self.trailing_closure {
            Some(closure) if args.is_empty() => {
                out.push(' ');
                out.push_str(&closure.expression(cx));
            }
            Some(closure) => {
                out.push_str(&format!("({}) ", args.join(", ")));
                out.push_str(&closure.expression(cx));
            }
            None => out.push_str(&format!("({})", args.join(", "))),
        }
        out
    }
}

/// Member access: `base.name`, or implicit `.name` without a base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Box<Node>>,
    pub name: String,
}

impl Member {
    pub fn new(base: impl Into<Node>, name: impl Into<String>) -> Self {
        Self {
            base: Some(Box::new(base.into())),
            name: name.into(),
        }
    }

    /// Implicit member expression (`.shared`).
    pub fn implicit(name: impl Into<String>) -> Self {
        Self {
            base: None,
            name: name.into(),
        }
    }
}

impl Expression for Member {
    fn expression(&self, cx: &RenderContext) -> String {
        match &self.base {
            Some(base) => format!("{}.{}", expr(base, cx, "a member base"), self.name),
            None => format!(".{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expr::{Postfix, PostfixOp},
        render::Renderer,
        stmt::Return,
    };

    fn render(node: impl Into<Node>) -> String {
        Renderer::default().render_expression(&node.into())
    }

    #[test]
    fn test_arguments_keep_order_and_labels() {
        let call = Call::named("move").arg(Node::reference("piece")).labeled("to", 3).labeled("animated", true);
        assert_eq!(render(call), "move(piece, to: 3, animated: true)");
    }

    #[test]
    fn test_try_await_prefix() {
        let call = Call::new(Member::new(Node::reference("client"), "fetch"))
            .await_()
            .try_()
            .labeled("id", Node::reference("id"));
        assert_eq!(render(call), "try await client.fetch(id: id)");
    }

    #[test]
    fn test_trailing_closure_only() {
        let call = Call::named("withAnimation").trailing(Closure::new().body(|b| {
            b.push(Node::raw("expanded.toggle()"));
        }));
        assert_eq!(render(call), "withAnimation {\n    expanded.toggle()\n}");
    }

    #[test]
    fn test_trailing_closure_after_arguments() {
        let call = Call::new(Member::new(Node::reference("items"), "sorted"))
            .labeled("limit", 10)
            .trailing(Closure::new().param("a").param("b").body(|b| {
                b.push(Return::value(Node::raw("a < b")));
            }));
        assert_eq!(render(call), "items.sorted(limit: 10) { a, b in\n    return a < b\n}");
    }

    #[test]
    fn test_member_forms() {
        assert_eq!(render(Member::implicit("shared")), ".shared");
        let chained = Member::new(Postfix::new(Node::reference("user"), PostfixOp::OptionalChain), "name");
        assert_eq!(render(chained), "user?.name");
    }
}
