//! Deciding what a fenced block is.

use crate::extract::Sample;

/// What kind of sample a fenced block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Ordinary Swift code, checked after preparation.
    Example,
    /// A `Package.swift` manifest.
    Manifest,
    /// Shell commands.
    Shell,
}

const SHELL_LANGUAGES: &[&str] = &["sh", "bash", "shell", "console", "zsh"];

/// Classify a block; `None` for languages the harness ignores.
pub fn classify(sample: &Sample) -> Option<SampleKind> {
    let language = sample.language();
    if SHELL_LANGUAGES.contains(&language.as_str()) {
        return Some(SampleKind::Shell);
    }
    if language != "swift" {
        return None;
    }
    if is_manifest(&sample.body) {
        Some(SampleKind::Manifest)
    } else {
        Some(SampleKind::Example)
    }
}

fn is_manifest(body: &str) -> bool {
    body.lines().any(|line| {
        let line = line.trim();
        line.starts_with("// swift-tools-version") || line.contains("Package(")
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn sample(info: &str, body: &str) -> Sample {
        Sample {
            path: PathBuf::from("doc.md"),
            info: info.to_string(),
            line: 1,
            offset: 0,
            len: body.len(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_swift_example() {
        assert_eq!(classify(&sample("swift", "let x = 1\n")), Some(SampleKind::Example));
    }

    #[test]
    fn test_manifest_markers() {
        let tools = sample("swift", "// swift-tools-version: 5.9\nimport PackageDescription\n");
        let package = sample("swift", "let package = Package(\n    name: \"Demo\"\n)\n");
        assert_eq!(classify(&tools), Some(SampleKind::Manifest));
        assert_eq!(classify(&package), Some(SampleKind::Manifest));
    }

    #[test]
    fn test_shell_languages() {
        for lang in ["sh", "bash", "shell", "console", "zsh", "Bash"] {
            assert_eq!(classify(&sample(lang, "swift build\n")), Some(SampleKind::Shell));
        }
    }

    #[test]
    fn test_other_languages_are_ignored() {
        assert_eq!(classify(&sample("json", "{}\n")), None);
        assert_eq!(classify(&sample("", "plain\n")), None);
    }
}
