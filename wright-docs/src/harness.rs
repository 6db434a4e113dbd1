//! Walks documentation and checks every sample.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use swiftwright_codegen::{CheckError, SyntaxChecker};
use walkdir::WalkDir;

use crate::{
    classify::{SampleKind, classify},
    error::{DocsError, Result},
    extract::extract_samples,
    prepare::{Prepared, prepare},
    report::{Outcome, Report, SampleReport, SkipReason},
};

/// Harness settings, as found under `[docs]` in `swiftwright.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HarnessConfig {
    /// File extensions scanned when walking directories.
    pub extensions: Vec<String>,
    /// Modules whose import lines are stripped before checking.
    pub safe_imports: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            safe_imports: vec!["Foundation".to_string(), "Swiftwright".to_string()],
        }
    }
}

/// Documentation harness over a [`SyntaxChecker`].
pub struct Harness<C> {
    checker: C,
    config: HarnessConfig,
}

impl<C: SyntaxChecker> Harness<C> {
    pub fn new(checker: C) -> Self {
        Self::with_config(checker, HarnessConfig::default())
    }

    pub fn with_config(checker: C, config: HarnessConfig) -> Self {
        Self { checker, config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Check files and directories. Directories are walked recursively for
    /// files with a configured extension; explicit files are always checked.
    pub fn check_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Report> {
        let mut report = Report::default();
        for path in paths {
            for file in self.collect(path.as_ref())? {
                report.extend(self.check_file(&file)?);
            }
        }
        info!("{}", report.summary());
        Ok(report)
    }

    /// Check every sample in one file.
    pub fn check_file(&self, path: &Path) -> Result<Vec<SampleReport>> {
        let text = std::fs::read_to_string(path).map_err(|source| DocsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_text(&text, path)
    }

    /// Check every sample in an in-memory document.
    pub fn check_text(&self, text: &str, path: &Path) -> Result<Vec<SampleReport>> {
        let mut reports = Vec::new();
        for sample in extract_samples(text, path) {
            let outcome = match classify(&sample) {
                None => continue,
                Some(SampleKind::Manifest) => Outcome::Skipped(SkipReason::Manifest),
                Some(SampleKind::Shell) => Outcome::Skipped(SkipReason::Shell),
                Some(SampleKind::Example) => {
                    match prepare(&sample.body, &self.config.safe_imports) {
                        Prepared::Skip(reason) => Outcome::Skipped(reason),
                        Prepared::Ready(source) => self.run(&source)?,
                    }
                }
            };
            if let Outcome::Skipped(reason) = &outcome {
                debug!("{}:{}: skipped ({})", path.display(), sample.line, reason);
            }
            reports.push(SampleReport {
                path: sample.path,
                line: sample.line,
                offset: sample.offset,
                len: sample.len,
                outcome,
            });
        }
        Ok(reports)
    }

    fn run(&self, source: &str) -> Result<Outcome> {
        match self.checker.check(source) {
            Ok(()) => Ok(Outcome::Passed),
            Err(CheckError::Rejected { message, output }) => Ok(Outcome::Failed {
                diagnostics: if output.trim().is_empty() {
                    message
                } else {
                    output
                },
            }),
            Err(source @ CheckError::Launch { .. }) => Err(DocsError::Checker { source }),
        }
    }

    fn collect(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.is_dir() {
            return Ok(vec![path.to_path_buf()]);
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|source| DocsError::Walk {
                path: path.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() && self.wanted(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn wanted(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.config.extensions.iter().any(|e| e == ext))
    }
}
