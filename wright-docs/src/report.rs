//! Per-sample outcomes and totals.

use std::{fmt, path::PathBuf};

/// Why a sample was not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Manifest,
    Shell,
    /// Imports a module outside the configured safe set.
    ForeignImport(String),
    /// Declares an `@main` entry point.
    EntryPoint,
    /// Contains elision markers.
    Fragment,
    /// Nothing left after stripping imports.
    Empty,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manifest => f.write_str("package manifest"),
            Self::Shell => f.write_str("shell commands"),
            Self::ForeignImport(module) => write!(f, "imports {}", module),
            Self::EntryPoint => f.write_str("entry point"),
            Self::Fragment => f.write_str("fragment"),
            Self::Empty => f.write_str("empty"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed { diagnostics: String },
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Outcome of one sample, with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    pub path: PathBuf,
    pub line: usize,
    /// Byte range of the sample body within its document.
    pub offset: usize,
    pub len: usize,
    pub outcome: Outcome,
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match &self.outcome {
            Outcome::Passed => "ok".to_string(),
            Outcome::Failed { .. } => "FAILED".to_string(),
            Outcome::Skipped(reason) => format!("skipped ({})", reason),
        };
        write!(f, "{}:{} ... {}", self.path.display(), self.line, status)
    }
}

/// Outcomes of a whole run, in the order samples were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub samples: Vec<SampleReport>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.samples.iter().filter(|s| s.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.samples.iter().filter(|s| s.outcome.is_failed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.samples.iter().filter(|s| s.outcome.is_skipped()).count()
    }

    /// True when nothing failed. Skips do not count against success.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &SampleReport> {
        self.samples.iter().filter(|s| s.outcome.is_failed())
    }

    /// `N passed; N failed; N skipped`.
    pub fn summary(&self) -> String {
        format!(
            "{} passed; {} failed; {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}

impl Extend<SampleReport> for Report {
    fn extend<I: IntoIterator<Item = SampleReport>>(&mut self, iter: I) {
        self.samples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize, outcome: Outcome) -> SampleReport {
        SampleReport {
            path: PathBuf::from("README.md"),
            line,
            offset: 0,
            len: 0,
            outcome,
        }
    }

    #[test]
    fn test_totals_keep_skips_separate() {
        let report = Report {
            samples: vec![
                at(3, Outcome::Passed),
                at(9, Outcome::Skipped(SkipReason::Shell)),
                at(15, Outcome::Skipped(SkipReason::Fragment)),
            ],
        };
        assert_eq!((report.passed(), report.failed(), report.skipped()), (1, 0, 2));
        assert!(report.is_success());
        assert_eq!(report.summary(), "1 passed; 0 failed; 2 skipped");
    }

    #[test]
    fn test_failure_is_not_success() {
        let report = Report {
            samples: vec![at(
                1,
                Outcome::Failed {
                    diagnostics: "error: expected '}'".to_string(),
                },
            )],
        };
        assert!(!report.is_success());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_line_format() {
        assert_eq!(at(4, Outcome::Passed).to_string(), "README.md:4 ... ok");
        assert_eq!(
            at(8, Outcome::Skipped(SkipReason::ForeignImport("UIKit".into()))).to_string(),
            "README.md:8 ... skipped (imports UIKit)"
        );
    }
}
