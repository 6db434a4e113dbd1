//! The closed catalog of node kinds.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    decl::{
        AssociatedType, Class, Enum, EnumCase, Extension, Function, Import, Initializer, Property,
        Protocol, Struct, TypeAlias,
    },
    expr::{Assignment, Call, Closure, Infix, Member, Postfix, Prefix, TupleAssignment},
    literal::Literal,
    pattern::Pattern,
    render::{Declaration, Expression, PatternSyntax, RenderContext},
    stmt::{
        Break, Comment, Continue, Defer, DoCatch, ForIn, Guard, If, Raw, RepeatWhile, Return,
        Switch, Throw, While,
    },
};

crate::render::expression_pattern!(Literal, Call, Member, Infix, Prefix, Postfix, Raw);

/// One declaration, expression, statement or pattern.
///
/// Nodes are plain values: decorating a node consumes it and returns a new
/// one, and cloning before decoration keeps the earlier version intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Node {
    // Declarations
    Struct(Struct),
    Class(Class),
    Enum(Enum),
    EnumCase(EnumCase),
    Protocol(Protocol),
    AssociatedType(AssociatedType),
    Extension(Extension),
    Function(Function),
    Initializer(Initializer),
    Property(Property),
    TypeAlias(TypeAlias),
    Import(Import),

    // Expressions
    Literal(Literal),
    Call(Call),
    Member(Member),
    Infix(Infix),
    Prefix(Prefix),
    Postfix(Postfix),
    Closure(Closure),

    // Statements
    Assignment(Assignment),
    TupleAssignment(TupleAssignment),
    If(If),
    Guard(Guard),
    While(While),
    RepeatWhile(RepeatWhile),
    ForIn(ForIn),
    Switch(Switch),
    DoCatch(DoCatch),
    Return(Return),
    Throw(Throw),
    Break(Break),
    Continue(Continue),
    Defer(Defer),

    // Patterns
    Pattern(Pattern),

    // Trivia
    Comment(Comment),
    Blank,
    Raw(Raw),
    /// No-op placeholder; occupies a position and renders nothing.
    Empty,
}

impl Node {
    /// A bare reference expression (`self`, `value.count`).
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Literal(Literal::reference(name))
    }

    /// An escape-hatch line of Swift, emitted verbatim.
    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(Raw::new(code))
    }

    /// An explicit `//` comment line.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(Comment::new(text))
    }

    /// An explicit blank line.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Snake-case name of the node kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Struct(_) => "struct",
            Self::Class(_) => "class",
            Self::Enum(_) => "enum",
            Self::EnumCase(_) => "enum_case",
            Self::Protocol(_) => "protocol",
            Self::AssociatedType(_) => "associated_type",
            Self::Extension(_) => "extension",
            Self::Function(_) => "function",
            Self::Initializer(_) => "initializer",
            Self::Property(_) => "property",
            Self::TypeAlias(_) => "type_alias",
            Self::Import(_) => "import",
            Self::Literal(literal) => literal.kind_name(),
            Self::Call(_) => "call",
            Self::Member(_) => "member",
            Self::Infix(_) => "infix",
            Self::Prefix(_) => "prefix",
            Self::Postfix(_) => "postfix",
            Self::Closure(_) => "closure",
            Self::Assignment(_) => "assignment",
            Self::TupleAssignment(_) => "tuple_assignment",
            Self::If(_) => "if",
            Self::Guard(_) => "guard",
            Self::While(_) => "while",
            Self::RepeatWhile(_) => "repeat_while",
            Self::ForIn(_) => "for_in",
            Self::Switch(_) => "switch",
            Self::DoCatch(_) => "do_catch",
            Self::Return(_) => "return",
            Self::Throw(_) => "throw",
            Self::Break(_) => "break",
            Self::Continue(_) => "continue",
            Self::Defer(_) => "defer",
            Self::Pattern(_) => "pattern",
            Self::Comment(_) => "comment",
            Self::Blank => "blank",
            Self::Raw(_) => "raw",
            Self::Empty => "empty",
        }
    }

    /// The "as-expression" capability, if this kind has one.
    pub fn as_expression(&self) -> Option<&dyn Expression> {
        match self {
            Self::EnumCase(n) => Some(n),
            Self::Literal(n) => Some(n),
            Self::Call(n) => Some(n),
            Self::Member(n) => Some(n),
            Self::Infix(n) => Some(n),
            Self::Prefix(n) => Some(n),
            Self::Postfix(n) => Some(n),
            Self::Closure(n) => Some(n),
            Self::Raw(n) => Some(n),
            _ => None,
        }
    }

    /// The pattern capability. Expressions double as expression patterns.
    pub fn as_pattern(&self) -> Option<&dyn PatternSyntax> {
        match self {
            Self::Pattern(n) => Some(n),
            Self::EnumCase(n) => Some(n),
            Self::Literal(n) => Some(n),
            Self::Call(n) => Some(n),
            Self::Member(n) => Some(n),
            Self::Infix(n) => Some(n),
            Self::Prefix(n) => Some(n),
            Self::Postfix(n) => Some(n),
            Self::Raw(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_expression(&self) -> bool {
        self.as_expression().is_some()
    }

    pub fn is_pattern(&self) -> bool {
        self.as_pattern().is_some()
    }

    pub fn is_empty_placeholder(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Declaration for Node {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        match self {
            Self::Struct(n) => n.declaration(cx),
            Self::Class(n) => n.declaration(cx),
            Self::Enum(n) => n.declaration(cx),
            Self::EnumCase(n) => n.declaration(cx),
            Self::Protocol(n) => n.declaration(cx),
            Self::AssociatedType(n) => n.declaration(cx),
            Self::Extension(n) => n.declaration(cx),
            Self::Function(n) => n.declaration(cx),
            Self::Initializer(n) => n.declaration(cx),
            Self::Property(n) => n.declaration(cx),
            Self::TypeAlias(n) => n.declaration(cx),
            Self::Import(n) => n.declaration(cx),
            Self::Assignment(n) => n.declaration(cx),
            Self::TupleAssignment(n) => n.declaration(cx),
            Self::If(n) => n.declaration(cx),
            Self::Guard(n) => n.declaration(cx),
            Self::While(n) => n.declaration(cx),
            Self::RepeatWhile(n) => n.declaration(cx),
            Self::ForIn(n) => n.declaration(cx),
            Self::Switch(n) => n.declaration(cx),
            Self::DoCatch(n) => n.declaration(cx),
            Self::Return(n) => n.declaration(cx),
            Self::Throw(n) => n.declaration(cx),
            Self::Break(n) => n.declaration(cx),
            Self::Continue(n) => n.declaration(cx),
            Self::Defer(n) => n.declaration(cx),
            Self::Comment(n) => n.declaration(cx),
            Self::Raw(n) => n.declaration(cx),
            Self::Blank => vec![CodeFragment::Blank],
            Self::Empty => Vec::new(),
            Self::Literal(_)
            | Self::Call(_)
            | Self::Member(_)
            | Self::Infix(_)
            | Self::Prefix(_)
            | Self::Postfix(_)
            | Self::Closure(_) => vec![CodeFragment::line(crate::render::expr(
                self,
                cx,
                "an expression statement",
            ))],
            Self::Pattern(_) => {
                log::warn!("a pattern cannot stand alone as a statement; substituting nothing");
                Vec::new()
            }
        }
    }
}

/// Implement `From<T> for Node` for each `Variant(T)`.
macro_rules! node_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

node_from!(
    Struct,
    Class,
    Enum,
    EnumCase,
    Protocol,
    AssociatedType,
    Extension,
    Function,
    Initializer,
    Property,
    TypeAlias,
    Import,
    Literal,
    Call,
    Member,
    Infix,
    Prefix,
    Postfix,
    Closure,
    Assignment,
    TupleAssignment,
    If,
    Guard,
    While,
    RepeatWhile,
    ForIn,
    Switch,
    DoCatch,
    Return,
    Throw,
    Break,
    Continue,
    Defer,
    Pattern,
    Comment,
    Raw,
);

/// Scalars convert through [`Literal`]; `&str` becomes a string literal.
macro_rules! node_from_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::Literal(Literal::from(value))
                }
            }
        )*
    };
}

node_from_literal!(i64, i32, f64, bool, &str, String);
