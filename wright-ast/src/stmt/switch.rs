//! `switch` statements.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    node::Node,
    render::{Declaration, RenderContext, expr, pattern, statements},
    sequence::NodeList,
};

/// One `case` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SwitchCaseFields")]
pub struct SwitchCase {
    pub patterns: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Node>,
}

/// Wire form of [`SwitchCase`]; checked on the way in.
#[derive(Deserialize)]
struct SwitchCaseFields {
    patterns: Vec<Node>,
    #[serde(default)]
    guard: Option<Box<Node>>,
    #[serde(default)]
    body: Vec<Node>,
}

impl TryFrom<SwitchCaseFields> for SwitchCase {
    type Error = String;

    fn try_from(fields: SwitchCaseFields) -> Result<Self, Self::Error> {
        if fields.patterns.is_empty() {
            return Err("switch case needs at least one pattern".to_string());
        }
        fields.patterns.iter().try_for_each(check_pattern)?;
        Ok(Self {
            patterns: fields.patterns,
            guard: fields.guard,
            body: fields.body,
        })
    }
}

impl SwitchCase {
    /// # Panics
    ///
    /// If `pattern` cannot be rendered as a pattern.
    pub fn new(pattern: impl Into<Node>) -> Self {
        Self {
            patterns: vec![checked(pattern.into())],
            guard: None,
            body: Vec::new(),
        }
    }

    /// Match several alternatives in one clause.
    ///
    /// # Panics
    ///
    /// If the builder yields no nodes, or any node is not a pattern.
    pub fn patterns(f: impl FnOnce(&mut NodeList)) -> Self {
        let patterns: Vec<Node> = NodeList::build(f).into_iter().map(checked).collect();
        assert!(!patterns.is_empty(), "switch case needs at least one pattern");
        Self {
            patterns,
            guard: None,
            body: Vec::new(),
        }
    }

    /// Add another alternative.
    pub fn or(mut self, pattern: impl Into<Node>) -> Self {
        self.patterns.push(checked(pattern.into()));
        self
    }

    /// Add a `where` guard.
    pub fn where_(mut self, guard: impl Into<Node>) -> Self {
        self.guard = Some(Box::new(guard.into()));
        self
    }

    pub fn body(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.body.extend(NodeList::build(f));
        self
    }

    fn label(&self, cx: &RenderContext) -> String {
        let patterns: Vec<String> = self
            .patterns
            .iter()
            .map(|p| pattern(p, cx, "a case pattern"))
            .collect();
        let mut label = format!("case {}", patterns.join(", "));
        if let Some(guard) = &self.guard {
            label.push_str(" where ");
            label.push_str(&expr(guard, cx, "a case guard"));
        }
        label.push(':');
        label
    }
}

fn check_pattern(node: &Node) -> Result<(), String> {
    if node.is_pattern() {
        Ok(())
    } else {
        Err(format!(
            "switch case pattern must be a pattern, got a `{}` node",
            node.kind_name()
        ))
    }
}

fn checked(node: Node) -> Node {
    if let Err(message) = check_pattern(&node) {
        panic!("{}", message);
    }
    node
}

/// Case bodies may not be empty in Swift.
fn clause_body(body: &[Node], cx: &RenderContext) -> CodeFragment {
    let fragments = statements(body, cx);
    if fragments.is_empty() {
        CodeFragment::indent(vec![CodeFragment::line("break")])
    } else {
        CodeFragment::indent(fragments)
    }
}

/// `switch subject { case ...: ... default: ... }`.
///
/// Case labels sit at the same depth as `switch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    pub subject: Box<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cases: Vec<SwitchCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<Node>>,
}

impl Switch {
    pub fn new(subject: impl Into<Node>) -> Self {
        Self {
            subject: Box::new(subject.into()),
            cases: Vec::new(),
            default: None,
        }
    }

    pub fn case(mut self, case: SwitchCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Append a `default:` clause body.
    pub fn default(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        self.default
            .get_or_insert_with(Vec::new)
            .extend(NodeList::build(f));
        self
    }
}

impl Declaration for Switch {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::line(format!(
            "switch {} {{",
            expr(&self.subject, cx, "a switch subject")
        ))];
        for case in &self.cases {
            fragments.push(CodeFragment::line(case.label(cx)));
            fragments.push(clause_body(&case.body, cx));
        }
        if let Some(body) = &self.default {
            fragments.push(CodeFragment::line("default:"));
            fragments.push(clause_body(body, cx));
        }
        fragments.push(CodeFragment::line("}"));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decl::{EnumCase, Struct},
        expr::{Call, Infix},
        literal::Literal,
        pattern::Pattern,
        render::render,
        stmt::Return,
    };

    #[test]
    fn test_switch_over_enum() {
        let stmt = Switch::new(Node::reference("result"))
            .case(SwitchCase::new(Pattern::case("success", ["value"])).body(|b| {
                b.push(Return::value(Node::reference("value")));
            }))
            .case(
                SwitchCase::new(Pattern::case("failure", ["error"]))
                    .where_(Infix::new(Node::reference("error.code"), "==", 404))
                    .body(|b| {
                        b.push(Return::value(Literal::Nil));
                    }),
            )
            .default(|b| {
                b.push(Call::named("fatalError"));
            });

        insta::assert_snapshot!(render(&[stmt.into()]), @r"
        switch result {
        case .success(let value):
            return value
        case .failure(let error) where error.code == 404:
            return nil
        default:
            fatalError()
        }
        ");
    }

    #[test]
    fn test_alternatives_and_empty_body() {
        let stmt = Switch::new(Node::reference("status")).case(SwitchCase::patterns(|p| {
            p.push(EnumCase::new("ok"));
            p.push(Pattern::expression(204));
        }));
        assert_eq!(
            render(&[stmt.into()]),
            "switch status {\ncase .ok, 204:\n    break\n}\n"
        );
    }

    #[test]
    fn test_or_and_wildcard() {
        let stmt = Switch::new(Node::reference("x"))
            .case(SwitchCase::new(1).or(2))
            .case(SwitchCase::new(Pattern::Wildcard));
        assert_eq!(
            render(&[stmt.into()]),
            "switch x {\ncase 1, 2:\n    break\ncase _:\n    break\n}\n"
        );
    }

    #[test]
    #[should_panic(expected = "switch case pattern must be a pattern, got a `struct` node")]
    fn test_non_pattern_panics() {
        let _ = SwitchCase::new(Struct::new("Nope"));
    }

    #[test]
    #[should_panic(expected = "at least one pattern")]
    fn test_empty_patterns_panic() {
        let _ = SwitchCase::patterns(|_| {});
    }

    #[test]
    fn test_json_case_patterns_are_checked() {
        let declaration = r#"{"patterns": [{"kind": "struct", "value": {"name": "Nope"}}]}"#;
        let err = serde_json::from_str::<SwitchCase>(declaration).unwrap_err();
        assert!(err.to_string().contains("got a `struct` node"), "{}", err);

        let empty = r#"{"patterns": []}"#;
        let err = serde_json::from_str::<SwitchCase>(empty).unwrap_err();
        assert!(err.to_string().contains("at least one pattern"), "{}", err);

        let wildcard = r#"{"patterns": [{"kind": "pattern", "value": {"kind": "wildcard"}}]}"#;
        assert!(serde_json::from_str::<SwitchCase>(wildcard).is_ok());
    }
}
