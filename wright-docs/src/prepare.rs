//! Turning an example into something checkable on its own.

use crate::report::SkipReason;

/// Result of preparing an example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// Source ready for the checker.
    Ready(String),
    Skip(SkipReason),
}

/// Module named by an import declaration, or `None` if `line` is not one.
///
/// Handles `@testable import M`, `import struct M.Type` and submodules.
fn imported_module(line: &str) -> Option<&str> {
    let mut words = line.split_whitespace().skip_while(|w| w.starts_with('@'));
    if words.next()? != "import" {
        return None;
    }
    let mut path = words.next()?;
    if matches!(
        path,
        "typealias" | "struct" | "class" | "enum" | "protocol" | "let" | "var" | "func"
    ) {
        path = words.next()?;
    }
    path.split('.').next()
}

fn is_elision(line: &str) -> bool {
    matches!(line, "..." | "…")
        || line.starts_with("// ...")
        || line.starts_with("// …")
}

/// Strip safe imports and decide whether the remaining body can be checked.
///
/// Checks run in order: foreign imports, entry points, elisions, emptiness.
pub fn prepare(body: &str, safe_imports: &[String]) -> Prepared {
    let mut kept = Vec::new();
    for line in body.lines() {
        let trimmed = line.trim();
        match imported_module(trimmed) {
            Some(module) if safe_imports.iter().any(|safe| safe == module) => continue,
            Some(module) => return Prepared::Skip(SkipReason::ForeignImport(module.to_string())),
            None => kept.push(line),
        }
    }

    if kept.iter().any(|line| line.trim_start().starts_with("@main")) {
        return Prepared::Skip(SkipReason::EntryPoint);
    }
    if kept.iter().any(|line| is_elision(line.trim())) {
        return Prepared::Skip(SkipReason::Fragment);
    }
    if kept.iter().all(|line| line.trim().is_empty()) {
        return Prepared::Skip(SkipReason::Empty);
    }

    let mut source = kept.join("\n");
    source.push('\n');
    Prepared::Ready(source)
}
