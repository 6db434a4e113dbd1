//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2, 3, 4 or 8).
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 4-space indentation, the Swift convention.
    pub const SWIFT: Self = Self::Spaces(4);

    /// One indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(3) => "   ",
            Self::Spaces(8) => "        ",
            // Other widths fall back to four spaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}
