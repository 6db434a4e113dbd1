//! `swiftwright.toml` loading.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use swiftwright_codegen::Indent;
use swiftwright_docs::HarnessConfig;
use thiserror::Error;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "swiftwright.toml";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass an existing file to --config, or omit it to use defaults"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(wright::config::parse))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported indent width {width}")]
    #[diagnostic(
        code(wright::config::indent),
        help("use 2, 3, 4 or 8 spaces, or \"tab\"")
    )]
    Indent { width: u8 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub docs: DocsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub indent: IndentSetting,
}

/// `indent = 4` or `indent = "tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentSetting {
    Spaces(u8),
    Keyword(IndentKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentKeyword {
    Tab,
}

impl Default for IndentSetting {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

impl IndentSetting {
    pub fn indent(&self) -> Indent {
        match self {
            Self::Spaces(width) => Indent::Spaces(*width),
            Self::Keyword(IndentKeyword::Tab) => Indent::Tab,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocsConfig {
    #[serde(flatten)]
    pub harness: HarnessConfig,
    /// Compiler used to syntax-check samples; `swiftc` from `PATH` if unset.
    pub swiftc: Option<PathBuf>,
}

impl Config {
    /// Load an explicit config file, or `swiftwright.toml` if present, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<ConfigError>> {
        let path = match explicit {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG).is_file() => Path::new(DEFAULT_CONFIG),
            None => return Ok(Self::default()),
        };
        let src = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::parse(&src, &path.display().to_string())
    }

    pub fn parse(src: &str, filename: &str) -> Result<Self, Box<ConfigError>> {
        let config: Self = toml::from_str(src).map_err(|source: toml::de::Error| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                filename: filename.to_string(),
                src: NamedSource::new(filename, src.to_string()),
                span,
                source,
            })
        })?;
        match config.render.indent {
            IndentSetting::Spaces(2 | 3 | 4 | 8) | IndentSetting::Keyword(_) => Ok(config),
            IndentSetting::Spaces(width) => Err(Box::new(ConfigError::Indent { width })),
        }
    }
}
