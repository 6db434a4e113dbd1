//! Effect specifiers: `async`, `throws`, typed throws and `rethrows`.
//!
//! Rendering order is fixed: `async` always precedes `throws`/`rethrows`, and
//! a typed error follows `throws` with no space (`throws(ParseError)`).

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

/// The throwing half of an effect specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Throws {
    /// `throws` or `throws(ErrorType)`.
    Throws(Option<Box<TypeRef>>),
    /// `rethrows`.
    Rethrows,
}

impl Throws {
    /// Untyped `throws`.
    pub fn untyped() -> Self {
        Self::Throws(None)
    }

    /// Typed `throws(ErrorType)`.
    pub fn typed(error: impl Into<TypeRef>) -> Self {
        Self::Throws(Some(Box::new(error.into())))
    }

    /// Build from an optional error type and a rethrows flag.
    ///
    /// # Panics
    ///
    /// A typed error combined with `rethrows` has no Swift spelling.
    pub fn from_parts(error: Option<TypeRef>, rethrows: bool) -> Self {
        match (error, rethrows) {
            (None, true) => Self::Rethrows,
            (error, false) => Self::Throws(error.map(Box::new)),
            (Some(error), true) => {
                panic!("`rethrows` cannot carry a typed error (got `{}`)", error)
            }
        }
    }

    fn keyword(&self) -> String {
        match self {
            Self::Throws(None) => "throws".to_string(),
            Self::Throws(Some(error)) => format!("throws({})", error),
            Self::Rethrows => "rethrows".to_string(),
        }
    }
}

/// Effect specifier attached to a function, initializer, closure or function type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectSpecifier {
    #[default]
    None,
    Throws(Throws),
    Async,
    AsyncThrows(Throws),
}

impl EffectSpecifier {
    /// Add `async`, keeping any throwing effect.
    pub fn with_async(self) -> Self {
        match self {
            Self::None | Self::Async => Self::Async,
            Self::Throws(t) | Self::AsyncThrows(t) => Self::AsyncThrows(t),
        }
    }

    /// Set the throwing effect, keeping `async`. A previous throwing effect is replaced.
    pub fn with_throws(self, throws: Throws) -> Self {
        match self {
            Self::None | Self::Throws(_) => Self::Throws(throws),
            Self::Async | Self::AsyncThrows(_) => Self::AsyncThrows(throws),
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Self::Async | Self::AsyncThrows(_))
    }

    pub fn is_throwing(&self) -> bool {
        matches!(self, Self::Throws(_) | Self::AsyncThrows(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Keywords with one leading space each, e.g. ` async throws(E)`.
    pub fn suffix(&self) -> String {
        let mut out = String::new();
        if self.is_async() {
            out.push_str(" async");
        }
        if let Self::Throws(t) | Self::AsyncThrows(t) = self {
            out.push(' ');
            out.push_str(&t.keyword());
        }
        out
    }
}

/// Builder methods shared by every node that carries an effect specifier.
pub trait Effectful: Sized {
    /// Mutable access to the node's effect specifier.
    fn effects_mut(&mut self) -> &mut EffectSpecifier;

    /// Mark as `async`.
    fn async_(mut self) -> Self {
        let effects = std::mem::take(self.effects_mut());
        *self.effects_mut() = effects.with_async();
        self
    }

    /// Mark as `throws`.
    fn throws(self) -> Self {
        self.throwing(Throws::untyped())
    }

    /// Mark as `throws(ErrorType)`.
    fn throws_typed(self, error: impl Into<TypeRef>) -> Self {
        self.throwing(Throws::typed(error))
    }

    /// Mark as `rethrows`.
    fn rethrows(self) -> Self {
        self.throwing(Throws::Rethrows)
    }

    /// Set an explicit throwing effect.
    fn throwing(mut self, throws: Throws) -> Self {
        let effects = std::mem::take(self.effects_mut());
        *self.effects_mut() = effects.with_throws(throws);
        self
    }
}

/// Call-site effect markers, rendered as a `try`/`await` prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEffects {
    pub is_try: bool,
    pub is_await: bool,
}

impl CallEffects {
    /// `try `, `await ` or `try await ` (Swift requires `try` first).
    pub fn prefix(&self) -> &'static str {
        match (self.is_try, self.is_await) {
            (false, false) => "",
            (true, false) => "try ",
            (false, true) => "await ",
            (true, true) => "try await ",
        }
    }
}
