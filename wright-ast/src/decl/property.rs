//! Stored and computed properties.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    decor::{Decor, impl_decorated},
    node::Node,
    render::{Declaration, RenderContext, braced, expr},
    sequence::NodeList,
    types::TypeRef,
};

/// `let` or `var`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    Let,
    #[default]
    Var,
}

impl Binding {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Var => "var",
        }
    }
}

/// A property declaration, also used for local `let`/`var` statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PropertyFields")]
pub struct Property {
    pub name: String,
    pub decor: Decor,
    pub binding: Binding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<Node>>,
    pub is_static: bool,
    pub is_lazy: bool,
    pub is_weak: bool,
    /// Body of a read-only computed property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub getter: Option<Vec<Node>>,
}

/// Wire form of [`Property`]; checked on the way in.
#[derive(Deserialize)]
struct PropertyFields {
    name: String,
    #[serde(default)]
    decor: Decor,
    #[serde(default)]
    binding: Binding,
    #[serde(default)]
    ty: Option<TypeRef>,
    #[serde(default)]
    value: Option<Box<Node>>,
    #[serde(default)]
    is_static: bool,
    #[serde(default)]
    is_lazy: bool,
    #[serde(default)]
    is_weak: bool,
    #[serde(default)]
    getter: Option<Vec<Node>>,
}

impl TryFrom<PropertyFields> for Property {
    type Error = String;

    fn try_from(fields: PropertyFields) -> Result<Self, Self::Error> {
        let property = Self {
            name: fields.name,
            decor: fields.decor,
            binding: fields.binding,
            ty: fields.ty,
            value: fields.value,
            is_static: fields.is_static,
            is_lazy: fields.is_lazy,
            is_weak: fields.is_weak,
            getter: None,
        };
        match fields.getter {
            Some(body) => {
                property.check_computable()?;
                Ok(Self {
                    getter: Some(body),
                    ..property
                })
            }
            None => Ok(property),
        }
    }
}

impl Property {
    fn new(name: impl Into<String>, binding: Binding) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            binding,
            ty: None,
            value: None,
            is_static: false,
            is_lazy: false,
            is_weak: false,
            getter: None,
        }
    }

    pub fn let_(name: impl Into<String>) -> Self {
        Self::new(name, Binding::Let)
    }

    pub fn var_(name: impl Into<String>) -> Self {
        Self::new(name, Binding::Var)
    }

    /// Set the type annotation.
    pub fn ty(mut self, ty: impl Into<TypeRef>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the initial value.
    pub fn value(mut self, value: impl Into<Node>) -> Self {
        self.value = Some(Box::new(value.into()));
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as `lazy`. Only meaningful on `var`.
    pub fn lazy(mut self) -> Self {
        self.is_lazy = true;
        self
    }

    pub fn weak(mut self) -> Self {
        self.is_weak = true;
        self
    }

    /// Make this a computed property with the given getter body.
    ///
    /// # Panics
    ///
    /// Computed properties must be `var` and cannot have an initial value.
    pub fn getter(mut self, f: impl FnOnce(&mut NodeList)) -> Self {
        if let Err(message) = self.check_computable() {
            panic!("{}", message);
        }
        self.getter = Some(NodeList::build(f));
        self
    }

    fn check_computable(&self) -> Result<(), String> {
        if self.binding != Binding::Var {
            Err(format!(
                "computed property `{}` must be declared with `var`",
                self.name
            ))
        } else if self.value.is_some() {
            Err(format!(
                "computed property `{}` cannot have an initial value",
                self.name
            ))
        } else {
            Ok(())
        }
    }

    pub fn is_computed(&self) -> bool {
        self.getter.is_some()
    }

    /// `[access ][static ][weak ][lazy ]var name[: T]`
    pub(crate) fn head(&self) -> String {
        let mut out = self.decor.access_prefix();
        if self.is_static {
            out.push_str("static ");
        }
        if self.is_weak {
            out.push_str("weak ");
        }
        if self.is_lazy {
            out.push_str("lazy ");
        }
        out.push_str(self.binding.keyword());
        out.push(' ');
        out.push_str(&self.name);
        if let Some(ty) = &self.ty {
            out.push_str(": ");
            out.push_str(&ty.to_string());
        }
        out
    }

    /// Protocol requirement form: `var name: T { get set }`.
    pub(crate) fn requirement(&self) -> Vec<CodeFragment> {
        let accessors = if self.binding == Binding::Let || self.is_computed() {
            "{ get }"
        } else {
            "{ get set }"
        };
        let mut fragments = self.decor.leading_fragments();
        let mut head = self.decor.access_prefix();
        if self.is_static {
            head.push_str("static ");
        }
        head.push_str("var ");
        head.push_str(&self.name);
        if let Some(ty) = &self.ty {
            head.push_str(": ");
            head.push_str(&ty.to_string());
        }
        fragments.push(CodeFragment::line(format!("{} {}", head, accessors)));
        fragments
    }
}

impl Declaration for Property {
    fn declaration(&self, cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        let head = self.head();
        match (&self.getter, &self.value) {
            (Some(body), _) => fragments.push(braced(format!("{} {{", head), body, cx)),
            (None, Some(value)) => fragments.push(CodeFragment::line(format!(
                "{} = {}",
                head,
                expr(value, cx, "a property value")
            ))),
            (None, None) => fragments.push(CodeFragment::line(head)),
        }
        fragments
    }
}

impl_decorated!(Property);
