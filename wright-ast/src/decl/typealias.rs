//! Type aliases and imports.

use serde::{Deserialize, Serialize};
use swiftwright_codegen::CodeFragment;

use crate::{
    decor::{Decor, impl_decorated, impl_generic},
    render::{Declaration, RenderContext},
    types::{GenericParam, TypeRef, generic_clause},
};

/// `typealias Name<G> = Target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: String,
    #[serde(default)]
    pub decor: Decor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericParam>,
    pub target: TypeRef,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, target: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            decor: Decor::default(),
            generics: Vec::new(),
            target: target.into(),
        }
    }
}

impl Declaration for TypeAlias {
    fn declaration(&self, _cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        fragments.push(CodeFragment::line(format!(
            "{}typealias {}{} = {}",
            self.decor.access_prefix(),
            self.name,
            generic_clause(&self.generics),
            self.target
        )));
        fragments
    }
}

/// `import Module`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub module: String,
    #[serde(default)]
    pub decor: Decor,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            decor: Decor::default(),
        }
    }
}

impl Declaration for Import {
    fn declaration(&self, _cx: &RenderContext) -> Vec<CodeFragment> {
        let mut fragments = self.decor.leading_fragments();
        fragments.push(CodeFragment::line(format!(
            "{}import {}",
            self.decor.access_prefix(),
            self.module
        )));
        fragments
    }
}

impl_decorated!(TypeAlias, Import);
impl_generic!(TypeAlias);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decor::{Decorated, Generic},
        render::render,
    };

    #[test]
    fn test_typealias() {
        let alias = TypeAlias::new("Handler", TypeRef::function(
            [TypeRef::named("Result<T, Error>")],
            Default::default(),
            TypeRef::void(),
        ))
        .generic("T")
        .public();

        assert_eq!(
            render(&[alias.into()]),
            "public typealias Handler<T> = (Result<T, Error>) -> Void\n"
        );
    }

    #[test]
    fn test_import_with_attribute() {
        let import = Import::new("Foundation").attribute("preconcurrency");
        assert_eq!(
            render(&[import.into(), Import::new("os").into()]),
            "@preconcurrency\nimport Foundation\nimport os\n"
        );
    }
}
