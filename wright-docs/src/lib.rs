//! Syntax-checks Swift samples embedded in documentation.
//!
//! Markdown files are scanned for fenced code blocks. Each block is
//! classified, stripped of known-safe imports, and handed to a
//! [`SyntaxChecker`](swiftwright_codegen::SyntaxChecker). Samples that cannot
//! be checked on their own are skipped with a [`SkipReason`], which the
//! [`Report`] never counts as a pass.

mod classify;
mod error;
mod extract;
mod harness;
mod prepare;
mod report;

pub use classify::{SampleKind, classify};
pub use error::{DocsError, Result, SampleFailure};
pub use extract::{Sample, extract_samples};
pub use harness::{Harness, HarnessConfig};
pub use prepare::{Prepared, prepare};
pub use report::{Outcome, Report, SampleReport, SkipReason};
