//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Syntax nodes describe their output as fragments; [`CodeBuilder`](crate::CodeBuilder)
//! turns fragments into indented text.

/// A piece of generated code, before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    ///
    /// Embedded newlines are allowed; every physical line receives the
    /// current indentation.
    Line(String),
    /// A blank line.
    Blank,
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments one level.
    Indent(Vec<CodeFragment>),
    /// A `//` line comment.
    Comment(String),
    /// A `///` documentation comment.
    DocComment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(header, body, Some("}".to_string()))
    }

    /// Create a block fragment. Without `close`, the next fragment continues
    /// at the header's depth (`} else {` chains).
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    pub fn doc_comment(s: impl Into<String>) -> Self {
        Self::DocComment(s.into())
    }
}

/// Types that describe their output as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
