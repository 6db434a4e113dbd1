//! Indented text output.

use crate::{CodeFragment, Indent, Renderable};

/// Writes fragments as indented lines.
///
/// # Example
///
/// ```
/// use swiftwright_codegen::{CodeBuilder, CodeFragment, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::default());
/// builder.apply_fragment(CodeFragment::braced(
///     "func main() {",
///     vec![CodeFragment::line("print(\"Hello\")")],
/// ));
/// assert_eq!(builder.build(), "func main() {\n    print(\"Hello\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line with the current indentation.
    ///
    /// Text spanning several physical lines gets the current indentation on
    /// each of them; empty physical lines stay empty.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for physical in s.split('\n') {
            if !physical.is_empty() {
                self.write_indent();
                self.buffer.push_str(physical);
            }
            self.buffer.push('\n');
        }
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit every fragment of a renderable value.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Comment(text) => self.push_prefixed("//", &text),
            CodeFragment::DocComment(text) => self.push_prefixed("///", &text),
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn push_prefixed(&mut self, prefix: &str, text: &str) {
        self.write_indent();
        self.buffer.push_str(prefix);
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_all(indent: Indent, fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::new(indent);
        for fragment in fragments {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_multiline_line_is_reindented() {
        let mut builder = CodeBuilder::default();
        builder
            .push_indent()
            .push_line("let f = {\n    work()\n\n}");

        assert_eq!(builder.build(), "    let f = {\n        work()\n\n    }\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_comments() {
        let code = emit_all(
            Indent::default(),
            vec![
                CodeFragment::doc_comment("A test function"),
                CodeFragment::comment(""),
                CodeFragment::line("func test() {}"),
            ],
        );
        assert_eq!(code, "/// A test function\n//\nfunc test() {}\n");
    }

    #[test]
    fn test_open_block_continues_at_header_depth() {
        let code = emit_all(
            Indent::default(),
            vec![
                CodeFragment::block("if a {", vec![CodeFragment::line("x()")], None),
                CodeFragment::braced("} else {", vec![CodeFragment::line("y()")]),
            ],
        );
        assert_eq!(code, "if a {\n    x()\n} else {\n    y()\n}\n");
    }

    #[test]
    fn test_indent_fragment_and_blank() {
        let code = emit_all(
            Indent::default(),
            vec![
                CodeFragment::line("case .a:"),
                CodeFragment::indent(vec![CodeFragment::line("break")]),
                CodeFragment::Blank,
                CodeFragment::line("default:"),
            ],
        );
        assert_eq!(code, "case .a:\n    break\n\ndefault:\n");
    }

    #[test]
    fn test_tab_indent() {
        let code = emit_all(
            Indent::Tab,
            vec![CodeFragment::braced("do {", vec![CodeFragment::line("try run()")])],
        );
        assert_eq!(code, "do {\n\ttry run()\n}\n");
    }

    #[test]
    fn test_emit_renderable() {
        struct Entry;
        impl Renderable for Entry {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("entry point"),
                    CodeFragment::braced(
                        "func main() {",
                        vec![CodeFragment::line("print(\"Hello\")")],
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::default();
        builder.emit(&Entry);
        assert_eq!(
            builder.build(),
            "// entry point\nfunc main() {\n    print(\"Hello\")\n}\n"
        );
    }
}
