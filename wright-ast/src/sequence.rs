//! Order-preserving composition of node sequences.
//!
//! [`NodeList`] is a small interpreter for builder closures: every operation
//! appends to the end of the list, so the rendered order is the order in
//! which the authoring code ran. Nothing is ever deduplicated.
//!
//! | authoring shape            | effect on the sequence                      |
//! |----------------------------|---------------------------------------------|
//! | empty closure              | nothing                                     |
//! | `push` a node              | one node                                    |
//! | `push_opt(None)`           | one [`Node::Empty`] placeholder             |
//! | `either(cond, a, b)`       | the chosen branch's nodes, flattened        |
//! | `each(items, f)`           | every iteration's nodes, in iteration order |

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// An ordered, duplicate-permitting node sequence under construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeList {
    nodes: Vec<Node>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a builder closure and return what it produced.
    ///
    /// # Example
    ///
    /// ```
    /// use swiftwright_ast::{Node, NodeList};
    ///
    /// let verbose = false;
    /// let nodes = NodeList::build(|b| {
    ///     b.push(Node::raw("setUp()"));
    ///     b.when(verbose, |b| {
    ///         b.push(Node::raw("log()"));
    ///     });
    ///     b.each(["a", "b"], |b, name| {
    ///         b.push(Node::reference(name));
    ///     });
    /// });
    /// assert_eq!(nodes.len(), 3);
    /// ```
    pub fn build(f: impl FnOnce(&mut NodeList)) -> Vec<Node> {
        let mut list = Self::new();
        f(&mut list);
        list.nodes
    }

    /// Append one node.
    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    /// Append an optional node; `None` leaves an empty placeholder behind.
    pub fn push_opt<N: Into<Node>>(&mut self, node: Option<N>) -> &mut Self {
        self.nodes.push(node.map_or(Node::Empty, Into::into));
        self
    }

    /// Append nodes in iteration order.
    pub fn extend<I, N>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append the output of a nested builder.
    pub fn append(&mut self, f: impl FnOnce(&mut NodeList)) -> &mut Self {
        let nodes = Self::build(f);
        self.nodes.extend(nodes);
        self
    }

    /// One-sided conditional: the branch contributes nothing when `condition` is false.
    pub fn when(&mut self, condition: bool, f: impl FnOnce(&mut NodeList)) -> &mut Self {
        if condition {
            self.append(f);
        }
        self
    }

    /// Two-way conditional: exactly one branch is flattened in.
    pub fn either(
        &mut self,
        condition: bool,
        then: impl FnOnce(&mut NodeList),
        otherwise: impl FnOnce(&mut NodeList),
    ) -> &mut Self {
        if condition {
            self.append(then)
        } else {
            self.append(otherwise)
        }
    }

    /// Repeated section: each iteration's nodes, flattened in iteration order.
    pub fn each<T, I, F>(&mut self, items: I, mut f: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut NodeList, T),
    {
        for item in items {
            self.append(|b| f(b, item));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl IntoIterator for NodeList {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<N: Into<Node>> FromIterator<N> for NodeList {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<N: Into<Node>> Extend<N> for NodeList {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.nodes.extend(iter.into_iter().map(Into::into));
    }
}

/// Run an expression-only builder.
///
/// # Panics
///
/// Unless the closure yields exactly one expression-capable node.
pub fn single_expression(role: &str, f: impl FnOnce(&mut NodeList)) -> Node {
    let mut nodes = NodeList::build(f);
    assert!(
        nodes.len() == 1,
        "{} must yield exactly one expression, got {}",
        role,
        nodes.len()
    );
    let node = nodes.remove(0);
    if let Err(message) = expect_expression(role, &node) {
        panic!("{}", message);
    }
    node
}

/// Run a pattern-only builder.
///
/// # Panics
///
/// Unless the closure yields exactly one pattern-capable node.
pub fn single_pattern(role: &str, f: impl FnOnce(&mut NodeList)) -> Node {
    let mut nodes = NodeList::build(f);
    assert!(
        nodes.len() == 1,
        "{} must yield exactly one pattern, got {}",
        role,
        nodes.len()
    );
    let node = nodes.remove(0);
    if let Err(message) = expect_pattern(role, &node) {
        panic!("{}", message);
    }
    node
}

/// Check that `node` can fill an expression-only slot.
pub(crate) fn expect_expression(role: &str, node: &Node) -> Result<(), String> {
    if node.is_expression() {
        Ok(())
    } else {
        Err(format!(
            "{} must yield an expression, got a `{}` node",
            role,
            node.kind_name()
        ))
    }
}

/// Check that `node` can fill a pattern-only slot.
pub(crate) fn expect_pattern(role: &str, node: &Node) -> Result<(), String> {
    if node.is_pattern() {
        Ok(())
    } else {
        Err(format!(
            "{} must yield a pattern, got a `{}` node",
            role,
            node.kind_name()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decl::Struct, pattern::Pattern};

    fn names(nodes: &[Node]) -> Vec<String> {
        nodes
            .iter()
            .map(|n| match n {
                Node::Raw(raw) => raw.code.clone(),
                Node::Empty => "<empty>".to_string(),
                other => other.kind_name().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_body() {
        assert!(NodeList::build(|_| {}).is_empty());
    }

    #[test]
    fn test_literal_order_and_duplicates() {
        let nodes = NodeList::build(|b| {
            b.push(Node::raw("a")).push(Node::raw("b")).push(Node::raw("a"));
        });
        assert_eq!(names(&nodes), ["a", "b", "a"]);
    }

    #[test]
    fn test_either_flattens_one_branch() {
        for flag in [true, false] {
            let nodes = NodeList::build(|b| {
                b.push(Node::raw("before"));
                b.either(
                    flag,
                    |b| {
                        b.push(Node::raw("then1")).push(Node::raw("then2"));
                    },
                    |b| {
                        b.push(Node::raw("else"));
                    },
                );
                b.push(Node::raw("after"));
            });
            let expected: &[&str] = if flag {
                &["before", "then1", "then2", "after"]
            } else {
                &["before", "else", "after"]
            };
            assert_eq!(names(&nodes), expected);
        }
    }

    #[test]
    fn test_absent_optional_keeps_position() {
        let nodes = NodeList::build(|b| {
            b.push(Node::raw("first"));
            b.push_opt(None::<Node>);
            b.push_opt(Some(Node::raw("third")));
        });
        assert_eq!(names(&nodes), ["first", "<empty>", "third"]);
    }

    #[test]
    fn test_each_flattens_in_iteration_order() {
        let nodes = NodeList::build(|b| {
            b.each(1..=3, |b, i| {
                b.push(Node::raw(format!("open{}", i)));
                b.when(i % 2 == 1, |b| {
                    b.push(Node::raw(format!("odd{}", i)));
                });
            });
        });
        assert_eq!(
            names(&nodes),
            ["open1", "odd1", "open2", "open3", "odd3"]
        );
    }

    #[test]
    fn test_collect() {
        let list: NodeList = ["x", "y"].into_iter().map(Node::raw).collect();
        assert_eq!(names(list.as_slice()), ["x", "y"]);
    }

    #[test]
    fn test_single_expression() {
        let node = single_expression("condition", |b| {
            b.push(true);
        });
        assert!(node.is_expression());
    }

    #[test]
    #[should_panic(expected = "exactly one expression, got 0")]
    fn test_single_expression_rejects_empty() {
        single_expression("condition", |_| {});
    }

    #[test]
    #[should_panic(expected = "exactly one expression, got 2")]
    fn test_single_expression_rejects_two() {
        single_expression("condition", |b| {
            b.push(true).push(false);
        });
    }

    #[test]
    #[should_panic(expected = "must yield an expression, got a `struct` node")]
    fn test_single_expression_rejects_declaration() {
        single_expression("condition", |b| {
            b.push(Struct::new("Foo"));
        });
    }

    #[test]
    #[should_panic(expected = "got a `empty` node")]
    fn test_single_expression_rejects_placeholder() {
        single_expression("condition", |b| {
            b.push_opt(None::<Node>);
        });
    }

    #[test]
    fn test_single_pattern() {
        let node = single_pattern("loop pattern", |b| {
            b.push(Pattern::identifier("item"));
        });
        assert!(matches!(node, Node::Pattern(_)));
    }

    #[test]
    #[should_panic(expected = "must yield a pattern")]
    fn test_single_pattern_rejects_statement() {
        single_pattern("loop pattern", |b| {
            b.push(Node::blank());
        });
    }
}
