//! Declarative Swift syntax trees and their renderer.
//!
//! Trees are built from plain values: every builder and decorator consumes
//! its receiver and returns the updated node, so earlier copies stay intact
//! and finished trees can be shared across threads.
//!
//! # Module Organization
//!
//! - [`decl`] - Declarations (struct, class, enum, protocol, function, property, ...)
//! - [`expr`] - Expressions (calls, member access, operators, closures) and assignments
//! - [`stmt`] - Statements (if, guard, loops, switch, do/catch, jumps, trivia)
//! - [`pattern`] - Patterns for `case`, `catch` and `for`
//! - [`sequence`] - [`NodeList`] builder combinators
//! - [`render`] - Rendering capabilities and the [`Renderer`]
//!
//! # Example
//!
//! ```
//! use swiftwright_ast::{
//!     Call, Decorated, Function, Node, Property, Renderer, Struct,
//! };
//!
//! let greeter = Struct::new("Greeter").public().members(|m| {
//!     m.push(Property::let_("name").ty("String"));
//!     m.push(Function::new("greet").body(|b| {
//!         b.push(Call::named("print").arg("Hello, \"world\""));
//!     }));
//! });
//!
//! let text = Renderer::default().render(&[Node::from(greeter)]);
//! assert_eq!(
//!     text,
//!     "public struct Greeter {\n    let name: String\n    func greet() {\n        print(\"Hello, \\\"world\\\"\")\n    }\n}\n"
//! );
//! ```

pub mod decl;
pub mod decor;
pub mod effects;
pub mod expr;
pub mod file;
pub mod literal;
pub mod node;
pub mod pattern;
pub mod render;
pub mod sequence;
pub mod stmt;
pub mod types;

pub use decl::{
    AssociatedType, AssociatedValue, Binding, Class, Enum, EnumCase, Extension, Function, Import,
    Initializer, Param, Property, Protocol, Struct, TypeAlias,
};
pub use decor::{Attribute, Conforming, Decor, Decorated, Generic};
pub use effects::{CallEffects, EffectSpecifier, Effectful, Throws};
pub use expr::{
    Argument, Assignment, AssignmentMode, Call, Capture, CaptureStrength, Closure, ClosureParam,
    Infix, Member, Postfix, PostfixOp, Prefix, TupleAssignment,
};
pub use file::SourceFile;
pub use literal::Literal;
pub use node::Node;
pub use pattern::Pattern;
pub use render::{Declaration, Expression, PatternSyntax, RenderContext, Renderer, render};
pub use sequence::{NodeList, single_expression, single_pattern};
pub use stmt::{
    Break, Catch, Comment, Condition, Continue, Defer, DoCatch, Else, ForIn, Guard, If, Raw,
    RepeatWhile, Return, Switch, SwitchCase, Throw, While,
};
pub use types::{AccessLevel, GenericParam, TypeRef};
