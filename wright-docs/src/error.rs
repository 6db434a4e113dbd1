use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use swiftwright_codegen::CheckError;
use thiserror::Error;

use crate::report::{Outcome, SampleReport};

pub type Result<T> = std::result::Result<T, DocsError>;

#[derive(Debug, Error, Diagnostic)]
pub enum DocsError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(wright::docs::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk '{path}'")]
    #[diagnostic(code(wright::docs::walk))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("could not run the Swift syntax checker")]
    #[diagnostic(
        code(wright::docs::checker),
        help("install a Swift toolchain, or point `[docs] swiftc` in swiftwright.toml at one")
    )]
    Checker {
        #[source]
        source: CheckError,
    },
}

/// A sample the checker rejected, pointing at its location in the document.
#[derive(Debug, Error, Diagnostic)]
#[error("sample at {path}:{line} does not parse")]
#[diagnostic(code(wright::docs::rejected))]
pub struct SampleFailure {
    pub path: PathBuf,
    pub line: usize,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("rejected by the checker")]
    pub span: SourceSpan,
    #[help]
    pub diagnostics: String,
}

impl SampleFailure {
    /// Build a diagnostic for a failed sample from the text of its document.
    ///
    /// Returns `None` when the sample did not fail.
    pub fn new(report: &SampleReport, document: String) -> Option<Self> {
        let Outcome::Failed { diagnostics } = &report.outcome else {
            return None;
        };
        Some(Self {
            path: report.path.clone(),
            line: report.line,
            src: NamedSource::new(report.path.display().to_string(), document),
            span: (report.offset, report.len).into(),
            diagnostics: diagnostics.clone(),
        })
    }
}
