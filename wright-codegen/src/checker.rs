//! Syntax checking of emitted Swift through an external toolchain.
//!
//! The renderer itself never shells out. This seam exists for the
//! documentation harness and for toolchain-backed tests.

use std::{io::Write, path::PathBuf, process::Command};

use log::debug;
use thiserror::Error;

/// Error from syntax checking.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The checker process could not be started or its input staged.
    #[error("failed to run `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The checker ran and rejected the source.
    #[error("{message}\n\nOutput:\n{output}")]
    Rejected { message: String, output: String },
}

impl CheckError {
    /// Captured diagnostic text, if the checker produced any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Launch { .. } => None,
            Self::Rejected { output, .. } => Some(output),
        }
    }
}

/// Trait for verifying that Swift source parses.
pub trait SyntaxChecker {
    /// Check that the given source text is syntactically valid.
    fn check(&self, source: &str) -> Result<(), CheckError>;
}

/// Swift checker using `swiftc -parse`.
#[derive(Debug, Clone)]
pub struct SwiftcChecker {
    program: PathBuf,
}

impl SwiftcChecker {
    /// Use `swiftc` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("swiftc")
    }

    /// Use a specific compiler executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Whether the compiler can be launched at all.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn launch_error(&self, source: std::io::Error) -> CheckError {
        CheckError::Launch {
            program: self.program.display().to_string(),
            source,
        }
    }
}

impl Default for SwiftcChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxChecker for SwiftcChecker {
    fn check(&self, source: &str) -> Result<(), CheckError> {
        let mut file = tempfile::Builder::new()
            .prefix("wright-")
            .suffix(".swift")
            .tempfile()
            .map_err(|e| self.launch_error(e))?;
        file.write_all(source.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.launch_error(e))?;

        debug!("checking {} with {}", file.path().display(), self.program.display());
        let output = Command::new(&self.program)
            .arg("-parse")
            .arg(file.path())
            .output()
            .map_err(|e| self.launch_error(e))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CheckError::Rejected {
                message: "swiftc -parse failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_launch_error() {
        let checker = SwiftcChecker::with_program("/nonexistent/swiftc-for-tests");
        assert!(!checker.is_available());

        let err = checker.check("let x = 1\n").unwrap_err();
        assert!(matches!(err, CheckError::Launch { .. }));
        assert!(err.output().is_none());
        assert!(err.to_string().contains("swiftc-for-tests"));
    }

    #[test]
    fn test_rejected_carries_output() {
        let err = CheckError::Rejected {
            message: "swiftc -parse failed".to_string(),
            output: "error: expected expression".to_string(),
        };
        assert_eq!(err.output(), Some("error: expected expression"));
        assert!(err.to_string().contains("expected expression"));
    }
}
