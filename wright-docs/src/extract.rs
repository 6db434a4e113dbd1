//! Fenced code block extraction.

use std::path::{Path, PathBuf};

/// One fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub path: PathBuf,
    /// Everything after the opening fence, trimmed.
    pub info: String,
    /// 1-based line number of the first body line.
    pub line: usize,
    /// Byte range of the body within the document.
    pub offset: usize,
    pub len: usize,
    pub body: String,
}

impl Sample {
    /// First word of the info string, lowercased (`swift`, `sh`, ...).
    pub fn language(&self) -> String {
        self.info
            .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

struct Fence {
    marker: char,
    width: usize,
    info: String,
}

/// Parse a fence line: up to three spaces, then three or more backticks or tildes.
fn fence(line: &str) -> Option<Fence> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let width = rest.chars().take_while(|c| *c == marker).count();
    if width < 3 {
        return None;
    }
    let info = rest[width..].trim().to_string();
    if marker == '`' && info.contains('`') {
        return None;
    }
    Some(Fence {
        marker,
        width,
        info,
    })
}

fn closes(line: &str, open: &Fence) -> bool {
    match fence(line) {
        Some(close) => {
            close.marker == open.marker && close.width >= open.width && close.info.is_empty()
        }
        None => false,
    }
}

/// Collect every fenced code block in `text`, in document order.
///
/// An unterminated fence runs to the end of the document.
pub fn extract_samples(text: &str, path: &Path) -> Vec<Sample> {
    let mut samples = Vec::new();
    let mut open: Option<(Fence, usize, usize)> = None;
    let mut offset = 0;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        let content = line.trim_end_matches(['\n', '\r']);
        let next = offset + line.len();
        let closing = matches!(&open, Some((f, _, _)) if closes(content, f));
        if closing {
            if let Some((f, first_line, start)) = open.take() {
                samples.push(sample(path, f, first_line, &text[start..offset], start));
            }
        } else if open.is_none() {
            open = fence(content).map(|f| (f, index + 2, next));
        }
        offset = next;
    }

    if let Some((f, first_line, start)) = open {
        samples.push(sample(path, f, first_line, &text[start..], start));
    }
    samples
}

fn sample(path: &Path, fence: Fence, line: usize, body: &str, offset: usize) -> Sample {
    Sample {
        path: path.to_path_buf(),
        info: fence.info,
        line,
        offset,
        len: body.len(),
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Sample> {
        extract_samples(text, Path::new("README.md"))
    }

    #[test]
    fn test_backtick_and_tilde_fences() {
        let text = "# Title\n\n```swift\nlet a = 1\n```\n\ntext\n\n~~~sh\nswift build\n~~~\n";
        let samples = extract(text);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].info, "swift");
        assert_eq!(samples[0].line, 4);
        assert_eq!(samples[0].body, "let a = 1\n");
        assert_eq!(&text[samples[0].offset..samples[0].offset + samples[0].len], "let a = 1\n");
        assert_eq!(samples[1].language(), "sh");
        assert_eq!(samples[1].body, "swift build\n");
    }

    #[test]
    fn test_longer_fence_contains_shorter() {
        let text = "````markdown\n```swift\nx\n```\n````\n";
        let samples = extract(text);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].language(), "markdown");
        assert_eq!(samples[0].body, "```swift\nx\n```\n");
    }

    #[test]
    fn test_mismatched_marker_does_not_close() {
        let text = "```swift\nlet a = 1\n~~~\nlet b = 2\n```\n";
        let samples = extract(text);
        assert_eq!(samples[0].body, "let a = 1\n~~~\nlet b = 2\n");
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let samples = extract("```swift\nlet a = 1\n");
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].body, "let a = 1\n");
    }

    #[test]
    fn test_info_string_attributes() {
        let samples = extract("``` Swift title=\"x\"\n\n```\n");
        assert_eq!(samples[0].language(), "swift");
        assert_eq!(samples[0].body, "\n");
    }

    #[test]
    fn test_indented_code_is_not_a_fence() {
        assert!(extract("    ```swift\n    x\n    ```\n").is_empty());
    }
}
