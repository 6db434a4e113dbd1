//! Text emission primitives for Swiftwright.
//!
//! This crate knows nothing about Swift syntax trees. It provides the
//! building blocks the renderer writes through:
//!
//! - [`CodeBuilder`] - Writes fragments as indented text
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//! - [`SyntaxChecker`] - Seam for validating emitted Swift with a real toolchain

mod checker;
mod code_builder;
mod fragment;
mod indent;

pub use checker::{CheckError, SwiftcChecker, SyntaxChecker};
pub use code_builder::CodeBuilder;
pub use fragment::{CodeFragment, Renderable};
pub use indent::Indent;
