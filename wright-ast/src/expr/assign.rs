//! Assignment statements.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    literal::Literal,
    node::Node,
    render::{Declaration, RenderContext, expr},
};

/// `target = value`, or a compound form such as `total += x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: Box<Node>,
    pub op: String,
    pub value: Box<Node>,
}

impl Assignment {
    pub fn new(target: impl Into<Node>, value: impl Into<Node>) -> Self {
        Self::compound(target, "=", value)
    }

    /// Assignment through an operator other than `=`.
    pub fn compound(target: impl Into<Node>, op: impl Into<String>, value: impl Into<Node>) -> Self {
        Self {
            target: Box::new(target.into()),
            op: op.into(),
            value: Box::new(value.into()),
        }
    }
}

impl Declaration for Assignment {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "{} {} {}",
            expr(&self.target, cx, "an assignment target"),
            self.op,
            expr(&self.value, cx, "an assigned value")
        ))]
    }
}

/// How a tuple binding evaluates its value.
///
/// `Concurrent` starts the value as a child task (`async let`) and is not
/// the same as awaiting it in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    #[default]
    Sync,
    Async,
    Throwing,
    AsyncThrowing,
    Concurrent,
}

impl AssignmentMode {
    fn binding_keyword(&self) -> &'static str {
        match self {
            Self::Concurrent => "async let",
            _ => "let",
        }
    }

    fn value_prefix(&self) -> &'static str {
        match self {
            Self::Sync | Self::Concurrent => "",
            Self::Async => "await ",
            Self::Throwing => "try ",
            Self::AsyncThrowing => "try await ",
        }
    }
}

/// Destructuring binding: `let (a, b) = value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TupleAssignmentFields")]
pub struct TupleAssignment {
    pub names: Vec<String>,
    pub value: Box<Node>,
    pub mode: AssignmentMode,
}

impl TupleAssignment {
    /// # Panics
    ///
    /// If `names` is empty, or if `value` is a tuple literal whose element
    /// count differs from the number of names.
    pub fn new<I, S>(names: I, value: impl Into<Node>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let value = value.into();
        if let Err(message) = check_arity(&names, &value) {
            panic!("{}", message);
        }
        Self {
            names,
            value: Box::new(value),
            mode: AssignmentMode::Sync,
        }
    }

    pub fn mode(mut self, mode: AssignmentMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Names must be present; a literal tuple must match them one for one.
fn check_arity(names: &[String], value: &Node) -> Result<(), String> {
    if names.is_empty() {
        return Err("tuple assignment needs at least one name".to_string());
    }
    match value {
        Node::Literal(Literal::Tuple(elements)) if elements.len() != names.len() => Err(format!(
            "tuple assignment binds {} names to a {}-element tuple",
            names.len(),
            elements.len()
        )),
        _ => Ok(()),
    }
}

/// Wire form of [`TupleAssignment`]; checked on the way in.
#[derive(Deserialize)]
struct TupleAssignmentFields {
    names: Vec<String>,
    value: Box<Node>,
    #[serde(default)]
    mode: AssignmentMode,
}

impl TryFrom<TupleAssignmentFields> for TupleAssignment {
    type Error = String;

    fn try_from(fields: TupleAssignmentFields) -> Result<Self, Self::Error> {
        check_arity(&fields.names, &fields.value)?;
        Ok(Self {
            names: fields.names,
            value: fields.value,
            mode: fields.mode,
        })
    }
}

impl Declaration for TupleAssignment {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let target = match self.names.as_slice() {
            [single] => single.clone(),
            names => format!("({})", names.join(", ")),
        };
        vec![CodeFragment::line(format!(
            "{} {} = {}{}",
            self.mode.binding_keyword(),
            target,
            self.mode.value_prefix(),
            expr(&self.value, cx, "a tuple value")
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expr::Call, render::render};

    fn pair() -> Literal {
        Literal::tuple([Call::named("loadA"), Call::named("loadB")])
    }

    #[test]
    fn test_each_mode_has_its_own_prefix() {
        let cases = [
            (AssignmentMode::Sync, "let (a, b) = (loadA(), loadB())\n"),
            (AssignmentMode::Async, "let (a, b) = await (loadA(), loadB())\n"),
            (AssignmentMode::Throwing, "let (a, b) = try (loadA(), loadB())\n"),
            (AssignmentMode::AsyncThrowing, "let (a, b) = try await (loadA(), loadB())\n"),
            (AssignmentMode::Concurrent, "async let (a, b) = (loadA(), loadB())\n"),
        ];
        for (mode, expected) in cases {
            let node = TupleAssignment::new(["a", "b"], pair()).mode(mode);
            assert_eq!(render(&[node.into()]), expected, "{:?}", mode);
        }
    }

    #[test]
    fn test_single_name_has_no_parens() {
        let node = TupleAssignment::new(["user"], Call::named("fetchUser"))
            .mode(AssignmentMode::Concurrent);
        assert_eq!(render(&[node.into()]), "async let user = fetchUser()\n");
    }

    #[test]
    fn test_non_literal_value_is_not_checked() {
        let node = TupleAssignment::new(["q", "r"], Call::named("divmod"));
        assert_eq!(render(&[node.into()]), "let (q, r) = divmod()\n");
    }

    #[test]
    #[should_panic(expected = "binds 3 names to a 2-element tuple")]
    fn test_arity_mismatch_panics() {
        let _ = TupleAssignment::new(["a", "b", "c"], pair());
    }

    #[test]
    #[should_panic(expected = "at least one name")]
    fn test_empty_names_panics() {
        let _ = TupleAssignment::new(Vec::<String>::new(), pair());
    }

    #[test]
    fn test_json_tuple_arity_is_checked() {
        let json = r#"{
            "names": ["a", "b", "c"],
            "value": {"kind": "literal", "value": {"kind": "tuple", "value": [
                {"kind": "literal", "value": {"kind": "int", "value": 1}}
            ]}}
        }"#;
        let err = serde_json::from_str::<TupleAssignment>(json).unwrap_err();
        assert!(
            err.to_string()
                .contains("tuple assignment binds 3 names to a 1-element tuple"),
            "{}",
            err
        );

        let unnamed = r#"{"names": [], "value": {"kind": "call", "value": {"callee": {"kind": "literal", "value": {"kind": "reference", "value": "load"}}}}}"#;
        let err = serde_json::from_str::<TupleAssignment>(unnamed).unwrap_err();
        assert!(err.to_string().contains("at least one name"), "{}", err);
    }

    #[test]
    fn test_json_tuple_assignment_loads_with_mode() {
        let json = r#"{
            "names": ["q", "r"],
            "value": {"kind": "literal", "value": {"kind": "reference", "value": "pair"}},
            "mode": "concurrent"
        }"#;
        let node = serde_json::from_str::<TupleAssignment>(json).unwrap();
        assert_eq!(render(&[node.into()]), "async let (q, r) = pair\n");
    }

    #[test]
    fn test_compound_assignment() {
        let nodes: Vec<Node> = vec![
            Assignment::new(Node::reference("self.count"), 0).into(),
            Assignment::compound(Node::reference("total"), "+=", Node::reference("x")).into(),
        ];
        assert_eq!(render(&nodes), "self.count = 0\ntotal += x\n");
    }
}
